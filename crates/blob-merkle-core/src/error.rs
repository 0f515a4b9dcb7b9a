//! Error types for the blob Merkle core.

use std::io;

use thiserror::Error;

/// Errors that can occur while building, decoding or encoding commitments.
///
/// All of these describe bad input data and are recoverable. Violations of
/// invariants the caller is expected to uphold (an out-of-range level index,
/// extracting a base from a shallow tree) panic instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid leaf count {count}: must be a non-zero power of two no larger than u32::MAX")]
    InvalidLeafCount { count: usize },

    #[error("short read: input ended before the full {what} was read")]
    ShortRead { what: &'static str },

    #[error("refusing to decode a tree {height} levels deep (max {max})")]
    TreeTooDeep { height: u8, max: u8 },

    #[error("invalid sector length: expected {expected} bytes, got {actual}")]
    InvalidSectorLength { expected: usize, actual: usize },

    #[error("invalid sector proof length: expected {expected} bytes, got {actual}")]
    InvalidProofLength { expected: usize, actual: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// Map an I/O error from a fixed-size read, turning EOF into [`CoreError::ShortRead`].
    pub(crate) fn from_read(err: io::Error, what: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CoreError::ShortRead { what }
        } else {
            CoreError::Io(err)
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
