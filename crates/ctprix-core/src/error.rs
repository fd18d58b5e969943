//! Error types for ctprix

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtprixError {
    // Ingestion errors
    #[error("record {index} has no SIRET and cannot be aggregated")]
    MissingSiret { index: usize },

    #[error("export download failed: {reason}")]
    Download { reason: String },

    // Dataset errors
    #[error("dataset not found at {path}. Run 'ctprix fetch' first")]
    DatasetNotFound { path: PathBuf },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CtprixError {
    fn from(err: serde_json::Error) -> Self {
        CtprixError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CtprixError>;
