//! Error types for encoder export operations.

use thiserror::Error;

/// Error type for value-space resolution and feature expansion.
///
/// Every variant is fatal: a malformed parameter snapshot or an incompatible
/// feature graph cannot be repaired by calling again.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Arity mismatch, unparseable mode string or malformed snapshot key.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A resolved category index has no label in an indexed feature.
    #[error("Index out of range: feature '{feature}' has {len} labels, got index {index}")]
    IndexOutOfRange {
        feature: String,
        index: usize,
        len: usize,
    },
    /// The input feature exposes neither indexed labels nor raw numeric values.
    #[error("Unsupported feature kind: feature '{feature}' is {kind}")]
    UnsupportedFeatureKind { feature: String, kind: &'static str },
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExportError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ExportError::Configuration(msg.into())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<bincode::Error> for ExportError {
    fn from(err: bincode::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;
