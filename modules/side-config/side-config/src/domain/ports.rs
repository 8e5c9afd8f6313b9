use std::sync::Arc;

use side_config_sdk::{ConfigStoreClient, ConfirmationPrompt, ModalHost, Notifier};

/// Host services an editor works against.
#[derive(Clone)]
pub struct HostServices {
    pub store: Arc<dyn ConfigStoreClient>,
    pub modal: Arc<dyn ModalHost>,
    pub confirm: Arc<dyn ConfirmationPrompt>,
    pub notifier: Arc<dyn Notifier>,
}
