//! Public API trait for the host configuration store.
//!
//! The host owns the storage and transport of named configuration blobs
//! ("data files"). The module only reads and replaces whole blobs.

use async_trait::async_trait;

use crate::error::ConfigStoreError;

/// Host configuration store.
///
/// Blobs are JSON-like values addressed by a flat string key, e.g.
/// `"feedA_side_config"`.
///
/// ```ignore
/// let current = store.get("feedA_side_config").await?;
/// store.put("feedA_side_config", serde_json::json!({"api_key": "K1"})).await?;
/// ```
#[async_trait]
pub trait ConfigStoreClient: Send + Sync {
    /// Fetch the blob stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored. A stored value may itself
    /// be falsy (`null`, `false`, `""`); callers treat that as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError`] on transport or storage failure; the
    /// error exposes the transport status code.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, ConfigStoreError>;

    /// Replace the blob stored under `key` in full.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError`] on transport or storage failure; the
    /// error exposes the transport status text.
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), ConfigStoreError>;
}
