//! File-backed config store: one YAML document per key under a directory.
//!
//! `<dir>/<key>.yml` holds the record the miner node reads on reload. Writes
//! go through a temp file in the same directory and are renamed into place.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use side_config_sdk::{ConfigStoreClient, ConfigStoreError};
use tracing::{debug, info};

use crate::config::SideConfigModuleConfig;
use crate::domain::error::DomainError;

const EXTENSION: &str = "yml";

#[derive(Debug, Clone)]
pub struct YamlFileConfigStore {
    dir: PathBuf,
}

impl YamlFileConfigStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Build the store from the module's `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config_dir` is not configured.
    pub fn from_config(cfg: &SideConfigModuleConfig) -> anyhow::Result<Self> {
        let dir = cfg
            .config_dir
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("side config: 'config_dir' is required for the file store"))?;
        Ok(Self::new(dir))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` unless the key is a plain file stem.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }

    /// Read the document stored under `key`. Missing or empty files read as `None`.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failures and `Serialization` on malformed YAML.
    pub async fn read(&self, key: &str) -> Result<Option<Value>, DomainError> {
        let path = self.path_for(key)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No side config file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_saphyr::from_str(&content)
            .map_err(|e| DomainError::serialization(format!("{}: {e}", path.display())))?;
        Ok(Some(value))
    }

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written and
    /// `Serialization` if the value cannot be rendered as YAML.
    pub async fn write(&self, key: &str, value: &Value) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        let content =
            serde_saphyr::to_string(value).map_err(|e| DomainError::serialization(e.to_string()))?;
        let dir = self.dir.clone();

        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, content.as_bytes()))
            .await
            .map_err(std::io::Error::other)??;

        debug!(key, "Side config file written");
        Ok(())
    }

    /// Delete the file stored under `key`. Returns whether a file existed.
    ///
    /// Used to garbage-collect the side config of a removed node.
    ///
    /// # Errors
    ///
    /// Returns `Io` on failures other than a missing file.
    pub async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "Removed side config file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_key(key: &str) -> Result<(), DomainError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(DomainError::invalid_key(key))
    }
}

fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl ConfigStoreClient for YamlFileConfigStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigStoreError> {
        Ok(self.read(key).await?)
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), ConfigStoreError> {
        Ok(self.write(key, &value).await?)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileConfigStore::new(dir.path());

        assert!(store.get("feedA_side_config").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_then_get_returns_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileConfigStore::new(dir.path().join("nested"));

        let doc = json!({"api_key": "K1", "verify_cert": false});
        store.put("feedA_side_config", doc.clone()).await.unwrap();

        assert!(dir.path().join("nested/feedA_side_config.yml").exists());
        assert_eq!(store.get("feedA_side_config").await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn put_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileConfigStore::new(dir.path());

        store
            .put("feedA_side_config", json!({"api_key": "K1", "username": "u"}))
            .await
            .unwrap();
        store
            .put("feedA_side_config", json!({"api_key": "K2"}))
            .await
            .unwrap();

        assert_eq!(
            store.get("feedA_side_config").await.unwrap(),
            Some(json!({"api_key": "K2"}))
        );
    }

    #[tokio::test]
    async fn reads_yaml_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("feedA_side_config.yml"),
            "api_header: X-Api-Key\nverify_cert: true\n",
        )
        .unwrap();

        let store = YamlFileConfigStore::new(dir.path());
        assert_eq!(
            store.get("feedA_side_config").await.unwrap(),
            Some(json!({"api_header": "X-Api-Key", "verify_cert": true}))
        );
    }

    #[tokio::test]
    async fn empty_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("feedA_side_config.yml"), "\n").unwrap();

        let store = YamlFileConfigStore::new(dir.path());
        assert!(store.get("feedA_side_config").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_yaml_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("feedA_side_config.yml"), "api_key: [unclosed\n").unwrap();

        let store = YamlFileConfigStore::new(dir.path());
        let err = store.get("feedA_side_config").await.unwrap_err();
        assert_eq!(err.status(), 0);
    }

    #[tokio::test]
    async fn path_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileConfigStore::new(dir.path());

        for key in ["../escape", ".hidden", "a/b", ""] {
            let err = store.put(key, json!({})).await.unwrap_err();
            assert_eq!(err.status(), 400, "key {key:?}");
        }
    }

    #[tokio::test]
    async fn remove_reports_whether_file_existed() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileConfigStore::new(dir.path());

        store.put("feedA_side_config", json!({"api_key": "K1"})).await.unwrap();

        assert!(store.remove("feedA_side_config").await.unwrap());
        assert!(!store.remove("feedA_side_config").await.unwrap());
        assert!(store.get("feedA_side_config").await.unwrap().is_none());
    }

    #[test]
    fn from_config_requires_config_dir() {
        assert!(YamlFileConfigStore::from_config(&SideConfigModuleConfig::default()).is_err());

        let cfg = SideConfigModuleConfig {
            config_dir: Some(PathBuf::from("/opt/minemeld/local/config")),
            ..SideConfigModuleConfig::default()
        };
        let store = YamlFileConfigStore::from_config(&cfg).unwrap();
        assert_eq!(store.dir(), Path::new("/opt/minemeld/local/config"));
    }
}
