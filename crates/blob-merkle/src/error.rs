//! Error types for the committer.

use blob_merkle_core::{CoreError, Digest};
use thiserror::Error;

/// Errors that can occur while producing or accepting blob commitments.
#[derive(Debug, Error)]
pub enum CommitError {
    /// Building, encoding or decoding failed.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A base does not regrow into the root it was advertised with.
    #[error("root mismatch: expected {expected}, base produces {actual}")]
    RootMismatch { expected: Digest, actual: Digest },

    /// The committer configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for CommitError {
    fn from(e: std::io::Error) -> Self {
        CommitError::Core(CoreError::Io(e))
    }
}

/// Result type for committer operations.
pub type Result<T> = std::result::Result<T, CommitError>;
