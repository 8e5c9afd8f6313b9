//! Domain models for the side config module.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys of the persisted side config object.
pub mod keys {
    pub const API_KEY: &str = "api_key";
    pub const API_HEADER: &str = "api_header";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const VERIFY_CERT: &str = "verify_cert";
}

/// Store key of a node's side config blob, e.g. `feedA_side_config`.
#[must_use]
pub fn side_config_key(node_id: &str, suffix: &str) -> String {
    format!("{node_id}{suffix}")
}

/// The four string fields an operator sets through a modal collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    ApiKey,
    ApiHeader,
    Username,
    Password,
}

impl FieldKind {
    pub const ALL: [Self; 4] = [Self::ApiKey, Self::ApiHeader, Self::Username, Self::Password];

    /// Operator-facing label, also used in notices.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "API KEY",
            Self::ApiHeader => "API HEADER",
            Self::Username => "USERNAME",
            Self::Password => "PASSWORD",
        }
    }

    /// Collector variant that gathers this field.
    #[must_use]
    pub fn collector(self) -> CollectorKind {
        match self {
            Self::ApiKey | Self::Password => CollectorKind::Secret,
            Self::ApiHeader | Self::Username => CollectorKind::Text,
        }
    }

    /// Key of this field in the persisted object.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ApiKey => keys::API_KEY,
            Self::ApiHeader => keys::API_HEADER,
            Self::Username => keys::USERNAME,
            Self::Password => keys::PASSWORD,
        }
    }
}

/// Modal collector variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorKind {
    /// Value plus confirmation, both must match.
    Secret,
    /// Single non-empty value.
    Text,
}

/// What the editor asks the modal host to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorRequest {
    pub kind: CollectorKind,
    /// Caller-supplied label shown in the form.
    pub field_name: String,
}

impl CollectorRequest {
    #[must_use]
    pub fn for_field(field: FieldKind) -> Self {
        Self {
            kind: field.collector(),
            field_name: field.label().to_owned(),
        }
    }
}

/// Value produced by a confirmed collector.
///
/// Each collector writes a single fixed output slot regardless of which
/// field it was opened for: `api_key` for the secret collector and
/// `username` for the text collector.
#[derive(Debug, Clone)]
pub enum CollectorOutput {
    Secret(SecretString),
    Text(String),
}

impl CollectorOutput {
    /// Name of the fixed output slot.
    #[must_use]
    pub fn output_key(&self) -> &'static str {
        match self {
            Self::Secret(_) => keys::API_KEY,
            Self::Text(_) => keys::USERNAME,
        }
    }

    /// Value of the secret slot; `None` if this is a text output.
    #[must_use]
    pub fn into_secret(self) -> Option<SecretString> {
        match self {
            Self::Secret(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Value of the text slot; `None` if this is a secret output.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value),
            Self::Secret(_) => None,
        }
    }
}

/// Outcome of a blocking modal form.
#[derive(Debug, Clone)]
pub enum ModalOutcome {
    Confirmed(CollectorOutput),
    Dismissed,
}

/// A tab shown in the host's node-detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDetailTab {
    pub icon: String,
    pub tooltip: String,
    /// Host view state activated by the tab.
    pub state: String,
    pub active: bool,
}

/// A routable view state declared to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub name: String,
    pub template_url: String,
    pub controller: String,
    pub controller_as: String,
}

/// Per-node side-channel credentials.
///
/// Every field is optional: `None` means "use the node's default". Empty
/// strings are never persisted and load back as `None`. `verify_cert` is
/// the only field where `Some(false)` is meaningful.
#[derive(Debug, Clone, Default)]
pub struct SideConfigRecord {
    pub api_key: Option<SecretString>,
    pub api_header: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub verify_cert: Option<bool>,
}

impl SideConfigRecord {
    #[must_use]
    pub fn builder() -> SideConfigRecordBuilder {
        SideConfigRecordBuilder::default()
    }

    /// Decode a stored blob.
    ///
    /// Returns `None` for a falsy blob (`null`, `false`, `0`, `""`). Any
    /// other value yields a record; keys that are missing, empty, or of the
    /// wrong type decode as unset.
    #[must_use]
    pub fn from_stored(value: &Value) -> Option<Self> {
        if is_falsy(value) {
            return None;
        }

        Some(Self {
            api_key: non_empty_str(value, keys::API_KEY).map(|s| SecretString::from(s.to_owned())),
            api_header: non_empty_str(value, keys::API_HEADER).map(ToOwned::to_owned),
            username: non_empty_str(value, keys::USERNAME).map(ToOwned::to_owned),
            password: non_empty_str(value, keys::PASSWORD)
                .map(|s| SecretString::from(s.to_owned())),
            verify_cert: value.get(keys::VERIFY_CERT).and_then(Value::as_bool),
        })
    }

    /// Encode the record for the store.
    ///
    /// Only set fields are present in the resulting object; unset and
    /// empty fields are omitted entirely.
    #[must_use]
    pub fn to_stored(&self) -> Value {
        let mut map = Map::new();

        if let Some(api_key) = non_empty_secret(self.api_key.as_ref()) {
            map.insert(keys::API_KEY.to_owned(), Value::String(api_key.to_owned()));
        }
        if let Some(api_header) = non_empty(self.api_header.as_deref()) {
            map.insert(keys::API_HEADER.to_owned(), Value::String(api_header.to_owned()));
        }
        if let Some(username) = non_empty(self.username.as_deref()) {
            map.insert(keys::USERNAME.to_owned(), Value::String(username.to_owned()));
        }
        if let Some(password) = non_empty_secret(self.password.as_ref()) {
            map.insert(keys::PASSWORD.to_owned(), Value::String(password.to_owned()));
        }
        if let Some(verify_cert) = self.verify_cert {
            map.insert(keys::VERIFY_CERT.to_owned(), Value::Bool(verify_cert));
        }

        Value::Object(map)
    }

    /// Whether a string field holds a non-empty value.
    #[must_use]
    pub fn is_set(&self, field: FieldKind) -> bool {
        match field {
            FieldKind::ApiKey => non_empty_secret(self.api_key.as_ref()).is_some(),
            FieldKind::ApiHeader => non_empty(self.api_header.as_deref()).is_some(),
            FieldKind::Username => non_empty(self.username.as_deref()).is_some(),
            FieldKind::Password => non_empty_secret(self.password.as_ref()).is_some(),
        }
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verify_cert.is_none() && FieldKind::ALL.iter().all(|f| !self.is_set(*f))
    }

    /// Certificate verification with the unset state resolved to `true`.
    #[must_use]
    pub fn effective_verify_cert(&self) -> bool {
        self.verify_cert.unwrap_or(true)
    }

    /// Assign a collector output to `field`.
    ///
    /// The secret slot feeds `api_key`/`password`, the text slot feeds
    /// `api_header`/`username`. An output from the other slot, or an empty
    /// value, leaves the field unset.
    pub fn assign(&mut self, field: FieldKind, output: CollectorOutput) {
        match field {
            FieldKind::ApiKey => {
                self.api_key = output.into_secret().filter(|s| !s.expose_secret().is_empty());
            }
            FieldKind::Password => {
                self.password = output.into_secret().filter(|s| !s.expose_secret().is_empty());
            }
            FieldKind::ApiHeader => {
                self.api_header = output.into_text().filter(|s| !s.is_empty());
            }
            FieldKind::Username => {
                self.username = output.into_text().filter(|s| !s.is_empty());
            }
        }
    }
}

#[derive(Default)]
pub struct SideConfigRecordBuilder {
    api_key: Option<SecretString>,
    api_header: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    verify_cert: Option<bool>,
}

impl SideConfigRecordBuilder {
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn api_header(mut self, api_header: &str) -> Self {
        self.api_header = Some(api_header.to_owned());
        self
    }

    #[must_use]
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_owned());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<SecretString>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn verify_cert(mut self, verify_cert: bool) -> Self {
        self.verify_cert = Some(verify_cert);
        self
    }

    #[must_use]
    pub fn build(self) -> SideConfigRecord {
        SideConfigRecord {
            api_key: self.api_key,
            api_header: self.api_header,
            username: self.username,
            password: self.password,
            verify_cert: self.verify_cert,
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::MIN_POSITIVE),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_secret(value: Option<&SecretString>) -> Option<&str> {
    value.map(ExposeSecret::expose_secret).filter(|s| !s.is_empty())
}
