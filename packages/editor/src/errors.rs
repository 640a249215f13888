//! Error types for the editor

use lovelace_config::ConfigError;
use thiserror::Error;

/// Failure reported by a host's save callback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SaveError(pub String);

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        SaveError(message.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Edit rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("Saving config failed: {0}")]
    Save(#[from] SaveError),
}
