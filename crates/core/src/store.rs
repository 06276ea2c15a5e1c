//! Storage errors reported by repository implementations.

use pocketbook_shared::AppError;
use thiserror::Error;

/// Errors a storage backend can report to the services.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other backend failure (connection, query, decoding).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error from any displayable error.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}
