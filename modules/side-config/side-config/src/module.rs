//! Side config module: tab registration and editor factory.

use std::sync::{Arc, OnceLock};

use side_config_sdk::{
    ConfigStoreClient, SideConfigRecord, TabRegistry, ViewHost, side_config_key,
};
use tracing::info;

use crate::config::SideConfigModuleConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::HostServices;
use crate::domain::tabs::{info_view_state, node_detail_tabs};
use crate::domain::{SideConfigEditor, SideConfigReloader};

/// Side config module.
///
/// `init` runs once per instance; later calls fail with
/// [`DomainError::AlreadyInitialized`] and leave the registry untouched.
pub struct SideConfigModule {
    config: SideConfigModuleConfig,
    registered: OnceLock<()>,
}

impl SideConfigModule {
    #[must_use]
    pub fn new(config: SideConfigModuleConfig) -> Self {
        Self {
            config,
            registered: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SideConfigModuleConfig {
        &self.config
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.registered.get().is_some()
    }

    /// Register the INFO view state and the miner node-detail tabs.
    ///
    /// If the host is already showing a node-detail view, it is reloaded so
    /// the new tabs appear.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` on a second call.
    pub fn init(&self, tabs: &dyn TabRegistry, view: &dyn ViewHost) -> anyhow::Result<()> {
        info!("Initializing side_config module");

        self.registered
            .set(())
            .map_err(|()| DomainError::AlreadyInitialized)?;

        view.register_state(info_view_state(&self.config));
        tabs.register_class(&self.config.node_class, node_detail_tabs(&self.config));

        let current = view.current_state();
        if current
            .as_deref()
            .is_some_and(|s| s.starts_with(&self.config.node_detail_prefix))
        {
            info!(state = ?current, "Reloading node-detail view");
            view.reload();
        }

        info!(node_class = %self.config.node_class, "Side config module initialized");
        Ok(())
    }

    /// Editor for `node_id`, nothing loaded yet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeName` if `node_id` is blank.
    pub fn editor(&self, node_id: &str, host: HostServices) -> Result<SideConfigEditor, DomainError> {
        SideConfigEditor::new(node_id, &self.config.key_suffix, host)
    }

    /// Editor for `node_id` with its current record loaded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeName` if `node_id` is blank.
    pub async fn open_editor(
        &self,
        node_id: &str,
        host: HostServices,
    ) -> Result<SideConfigEditor, DomainError> {
        SideConfigEditor::activate(node_id, &self.config.key_suffix, host).await
    }

    /// Reloader resolving a node's request credentials against its side config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeName` if `node_id` is blank.
    pub fn reloader(
        &self,
        node_id: &str,
        store: Arc<dyn ConfigStoreClient>,
        base: SideConfigRecord,
    ) -> Result<SideConfigReloader, DomainError> {
        if node_id.trim().is_empty() {
            return Err(DomainError::invalid_node_name(node_id));
        }
        let key = side_config_key(node_id, &self.config.key_suffix);
        Ok(SideConfigReloader::new(node_id, &key, store, base))
    }
}

impl Default for SideConfigModule {
    fn default() -> Self {
        Self::new(SideConfigModuleConfig::default())
    }
}
