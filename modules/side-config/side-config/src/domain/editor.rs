use side_config_sdk::{
    CollectorRequest, ConfigStoreError, FieldKind, ModalOutcome, SideConfigRecord,
    side_config_key,
};
use tracing::{debug, info, instrument, warn};

use super::error::DomainError;
use super::notices;
use super::ports::HostServices;

/// Result of a field-set or toggle workflow.
#[derive(Debug)]
pub enum FieldUpdate {
    /// Saved, notified, and reloaded.
    Applied,
    /// The operator dismissed the form or declined the prompt.
    Cancelled,
    /// The store rejected the write; the in-memory value stays changed.
    SaveFailed(ConfigStoreError),
}

/// Side config editor for one node-detail activation.
///
/// Holds the record as last loaded (or as modified by a pending workflow).
/// Workflows take `&mut self`, so a single editor never interleaves its own
/// saves; separate editors on the same node are last-write-wins.
pub struct SideConfigEditor {
    node_id: String,
    key: String,
    host: HostServices,
    record: SideConfigRecord,
}

impl SideConfigEditor {
    /// Create an editor with every field unset. Nothing is fetched yet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeName` if `node_id` is blank.
    pub fn new(node_id: &str, key_suffix: &str, host: HostServices) -> Result<Self, DomainError> {
        if node_id.trim().is_empty() {
            return Err(DomainError::invalid_node_name(node_id));
        }

        Ok(Self {
            node_id: node_id.to_owned(),
            key: side_config_key(node_id, key_suffix),
            host,
            record: SideConfigRecord::default(),
        })
    }

    /// Create an editor and load the node's current record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeName` if `node_id` is blank. Load failures are
    /// reported to the operator, not returned.
    pub async fn activate(
        node_id: &str,
        key_suffix: &str,
        host: HostServices,
    ) -> Result<Self, DomainError> {
        let mut editor = Self::new(node_id, key_suffix, host)?;
        editor.load().await;
        Ok(editor)
    }

    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Store key of this node's record.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn record(&self) -> &SideConfigRecord {
        &self.record
    }

    /// Fetch the stored record into the editor.
    ///
    /// Returns the loaded record, or `None` when nothing is stored or the
    /// fetch failed. A falsy stored value leaves the editor untouched.
    #[instrument(skip(self), fields(node = %self.node_id))]
    pub async fn load(&mut self) -> Option<SideConfigRecord> {
        match self.host.store.get(&self.key).await {
            Ok(stored) => {
                let Some(record) = stored.as_ref().and_then(SideConfigRecord::from_stored) else {
                    debug!("No side config stored");
                    return None;
                };
                debug!(
                    api_key = record.is_set(FieldKind::ApiKey),
                    api_header = record.is_set(FieldKind::ApiHeader),
                    username = record.is_set(FieldKind::Username),
                    password = record.is_set(FieldKind::Password),
                    verify_cert = ?record.verify_cert,
                    "Loaded side config"
                );
                self.record = record.clone();
                Some(record)
            }
            Err(e) => {
                warn!(status = e.status(), error = %e, "Failed to load side config");
                self.host.notifier.error(&notices::load_failed(e.status()));
                // Only these two are reset; header and basic-auth fields keep
                // their previous values.
                self.record.api_key = None;
                self.record.verify_cert = None;
                None
            }
        }
    }

    /// Write the set fields as the node's whole record.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged.
    #[instrument(skip(self), fields(node = %self.node_id))]
    pub async fn save(&self) -> Result<(), ConfigStoreError> {
        let payload = self.record.to_stored();
        debug!(
            fields = payload.as_object().map_or(0, serde_json::Map::len),
            "Saving side config"
        );
        self.host.store.put(&self.key, payload).await
    }

    /// Collect one field through its modal form, then save and reload.
    #[instrument(skip(self), fields(node = %self.node_id))]
    pub async fn set_field(&mut self, field: FieldKind) -> FieldUpdate {
        let outcome = self.host.modal.open(CollectorRequest::for_field(field)).await;
        let ModalOutcome::Confirmed(output) = outcome else {
            debug!(field = field.label(), "Collector dismissed");
            return FieldUpdate::Cancelled;
        };

        self.record.assign(field, output);
        self.persist(&notices::field_set(field), |status_text| {
            notices::field_set_failed(field, status_text)
        })
        .await
    }

    /// Flip certificate verification after an explicit confirmation.
    ///
    /// Unset counts as enabled, so the first toggle from unset disables it.
    #[instrument(skip(self), fields(node = %self.node_id))]
    pub async fn toggle_cert_verification(&mut self) -> FieldUpdate {
        let new_value = !self.record.effective_verify_cert();

        let confirmed = self
            .host
            .confirm
            .confirm(
                notices::CERT_VERIFICATION_TITLE,
                &notices::cert_verification_prompt(new_value),
            )
            .await;
        if !confirmed {
            debug!("Certificate verification toggle declined");
            return FieldUpdate::Cancelled;
        }

        self.record.verify_cert = Some(new_value);
        self.persist(notices::CERT_VERIFICATION_TOGGLED, notices::cert_toggle_failed)
            .await
    }

    async fn persist<F>(&mut self, success: &str, failure: F) -> FieldUpdate
    where
        F: FnOnce(&str) -> String,
    {
        match self.save().await {
            Ok(()) => {
                info!(node = %self.node_id, "Side config saved");
                self.host.notifier.success(success);
                self.load().await;
                FieldUpdate::Applied
            }
            Err(e) => {
                warn!(node = %self.node_id, error = %e, "Failed to save side config");
                self.host.notifier.error(&failure(e.status_text()));
                FieldUpdate::SaveFailed(e)
            }
        }
    }
}
