//! Storage error types

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store-specific error types
///
/// Absence of an entity is never an error here; lookups return
/// `Ok(None)`. These variants are hard failures of the backend
/// itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for holocron_core::Error {
    fn from(err: StoreError) -> Self {
        // Hard store failures propagate unchanged through the engine,
        // surfaced under the core taxonomy.
        Self::Storage(err.to_string())
    }
}
