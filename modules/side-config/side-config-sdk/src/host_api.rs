//! Host UI services consumed by the side config editor.
//!
//! These are the narrow seams through which the module talks to the
//! console shell: blocking modal forms, confirmation prompts, toast
//! notices, and the node-detail tab/state registry.

use async_trait::async_trait;

use crate::models::{CollectorRequest, ModalOutcome, NodeDetailTab, ViewState};

/// Presents a blocking single-field input form.
///
/// The call suspends until the operator confirms or dismisses the form.
#[async_trait]
pub trait ModalHost: Send + Sync {
    /// Open a collector form and wait for its outcome.
    async fn open(&self, request: CollectorRequest) -> ModalOutcome;
}

/// Asks the operator for an explicit yes/no decision.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns `true` only when the operator confirmed.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Fire-and-forget user-visible notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Process-wide association of node classes with node-detail tabs.
pub trait TabRegistry: Send + Sync {
    /// Register the tabs shown for nodes of `node_class`.
    fn register_class(&self, node_class: &str, tabs: Vec<NodeDetailTab>);
}

/// The host's view router.
pub trait ViewHost: Send + Sync {
    /// Declare a routable view state.
    fn register_state(&self, state: ViewState);

    /// Name of the state currently displayed, if any.
    fn current_state(&self) -> Option<String>;

    /// Re-activate the current state.
    fn reload(&self);
}
