//! Error types for Holocron Core

use thiserror::Error;

/// Result type alias using Holocron's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Holocron error types
///
/// Absence of an entity is not an error: lookups that tolerate gaps
/// return `Ok(None)` for missing ids. The variants here are hard
/// failures that abort the enclosing resolution.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
