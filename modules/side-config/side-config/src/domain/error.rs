use side_config_sdk::ConfigStoreError;
use thiserror::Error;

/// Domain-level errors for side config operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid node name: '{name}'")]
    InvalidNodeName { name: String },

    #[error("Invalid store key: '{key}'")]
    InvalidKey { key: String },

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    #[error("Side config module already initialized")]
    AlreadyInitialized,

    #[error("Store error: {0}")]
    Store(#[from] ConfigStoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DomainError {
    pub fn invalid_node_name(name: impl Into<String>) -> Self {
        Self::InvalidNodeName { name: name.into() }
    }

    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<DomainError> for ConfigStoreError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Store(inner) => inner,
            DomainError::InvalidNodeName { .. }
            | DomainError::InvalidKey { .. }
            | DomainError::InvalidHeader { .. } => Self::http(400, e.to_string()),
            DomainError::AlreadyInitialized
            | DomainError::Io(_)
            | DomainError::Serialization { .. } => Self::internal(e.to_string()),
        }
    }
}
