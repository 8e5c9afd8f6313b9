//! Credentials a miner node sends with its feed requests.
//!
//! The node starts from its own configuration and lets the side config
//! override it. API key and header are taken from the side config only as a
//! pair, and so are username and password, so a half-configured side record
//! never mixes with the node's own values.

use std::sync::Arc;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use side_config_sdk::{ConfigStoreClient, SideConfigRecord};
use tracing::{error, info};

use super::error::DomainError;

/// Effective request credentials of a node.
#[derive(Debug, Clone)]
pub struct NodeCredentials {
    pub api_key: Option<SecretString>,
    pub api_header: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub verify_cert: bool,
}

impl NodeCredentials {
    /// Credentials from the node's own configuration only.
    #[must_use]
    pub fn from_base(base: &SideConfigRecord) -> Self {
        Self {
            api_key: base.api_key.clone(),
            api_header: base.api_header.clone(),
            username: base.username.clone(),
            password: base.password.clone(),
            verify_cert: base.effective_verify_cert(),
        }
    }

    /// Overlay a side config on top of the current credentials.
    pub fn merge_side_config(&mut self, node: &str, side: &SideConfigRecord) {
        if let (Some(api_key), Some(api_header)) = (&side.api_key, &side.api_header) {
            self.api_key = Some(api_key.clone());
            self.api_header = Some(api_header.clone());
            info!(node, "Loaded API credentials from side config");
        }

        if let (Some(username), Some(password)) = (&side.username, &side.password) {
            self.username = Some(username.clone());
            self.password = Some(password.clone());
            info!(node, "Loaded basic authentication credentials from side config");
        }

        if let Some(verify_cert) = side.verify_cert {
            self.verify_cert = verify_cert;
            info!(node, verify_cert, "Loaded verify cert from side config");
        }
    }

    /// Resolve base configuration plus an optional side config.
    #[must_use]
    pub fn resolve(node: &str, base: &SideConfigRecord, side: Option<&SideConfigRecord>) -> Self {
        let mut creds = Self::from_base(base);
        if let Some(side) = side {
            creds.merge_side_config(node, side);
        }
        creds
    }

    /// Insert `<api_header>: <api_key>` when both are set.
    ///
    /// Returns whether a header was added. The value is marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` if the configured name or key is not a valid
    /// HTTP header name or value.
    pub fn apply_headers(&self, headers: &mut HeaderMap) -> Result<bool, DomainError> {
        let (Some(name), Some(api_key)) = (self.api_header.as_deref(), self.api_key.as_ref()) else {
            return Ok(false);
        };

        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| DomainError::invalid_header(name, e.to_string()))?;
        let mut value = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|e| DomainError::invalid_header(name, e.to_string()))?;
        value.set_sensitive(true);

        headers.insert(header_name, value);
        Ok(true)
    }

    /// Username and password, when both are set.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &SecretString)> {
        match (self.username.as_deref(), self.password.as_ref()) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }
}

/// Re-reads a node's side config on demand (the node's `hup`).
///
/// On a failed read the previously resolved credentials are kept.
pub struct SideConfigReloader {
    node: String,
    key: String,
    store: Arc<dyn ConfigStoreClient>,
    base: SideConfigRecord,
    current: NodeCredentials,
}

impl SideConfigReloader {
    #[must_use]
    pub fn new(
        node: &str,
        key: &str,
        store: Arc<dyn ConfigStoreClient>,
        base: SideConfigRecord,
    ) -> Self {
        let current = NodeCredentials::from_base(&base);
        Self {
            node: node.to_owned(),
            key: key.to_owned(),
            store,
            base,
            current,
        }
    }

    #[must_use]
    pub fn current(&self) -> &NodeCredentials {
        &self.current
    }

    /// Reload the side config and re-resolve credentials.
    pub async fn reload(&mut self) -> &NodeCredentials {
        info!(node = %self.node, "Reloading side config");

        match self.store.get(&self.key).await {
            Ok(stored) => {
                let side = stored.as_ref().and_then(SideConfigRecord::from_stored);
                self.current = NodeCredentials::resolve(&self.node, &self.base, side.as_ref());
            }
            Err(e) => {
                error!(node = %self.node, error = %e, "Error loading side config");
            }
        }

        &self.current
    }
}
