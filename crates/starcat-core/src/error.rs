//! Core error types.

use thiserror::Error;

/// Errors produced by the catalog store.
///
/// `NotFound` and `Conflict` carry the message that is surfaced to API
/// clients unchanged; the remaining variants are storage-level failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An application-level uniqueness or duplicate check failed.
    #[error("{0}")]
    Conflict(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Row encoding error.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The on-disk schema is newer than this build supports.
    #[error("schema version {found} is newer than the latest supported version {supported}")]
    UnsupportedSchemaVersion {
        /// Version recorded in the store.
        found: u32,
        /// Latest version known to this build.
        supported: u32,
    },
}

impl From<sled::transaction::TransactionError<Error>> for Error {
    fn from(err: sled::transaction::TransactionError<Error>) -> Self {
        match err {
            sled::transaction::TransactionError::Abort(e) => e,
            sled::transaction::TransactionError::Storage(e) => Error::Storage(e),
        }
    }
}
