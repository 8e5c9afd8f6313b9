//! Side Config SDK
//!
//! This crate provides the public contract for the `side_config` module:
//!
//! - [`ConfigStoreClient`] - Host configuration store (named data files)
//! - [`ModalHost`], [`ConfirmationPrompt`], [`Notifier`] - Host UI services
//! - [`TabRegistry`], [`ViewHost`] - Host node-detail shell
//! - [`SideConfigRecord`] - Per-node side-channel credentials
//! - [`ConfigStoreError`] - Error types
//!
//! ## Usage
//!
//! The host hands its service implementations to the module, which builds
//! one editor per node-detail activation:
//!
//! ```ignore
//! use side_config_sdk::{ConfigStoreClient, side_config_key};
//!
//! let stored = store.get(&side_config_key("feedA", "_side_config")).await?;
//! let record = stored.as_ref().and_then(SideConfigRecord::from_stored);
//! ```

pub mod api;
pub mod error;
pub mod host_api;
pub mod models;

// Re-export main types at crate root
pub use api::ConfigStoreClient;
pub use error::ConfigStoreError;
pub use host_api::{ConfirmationPrompt, ModalHost, Notifier, TabRegistry, ViewHost};
pub use models::{
    CollectorKind, CollectorOutput, CollectorRequest, FieldKind, ModalOutcome, NodeDetailTab,
    SideConfigRecord, ViewState, side_config_key,
};
