use std::error::Error;
use thiserror::Error;

/// Result alias for game store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend-neutral persistence failure surfaced by every [`GameStore`](super::game_store::GameStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing database could not be reached or rejected the operation.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Description of the failed operation.
        message: String,
        /// Backend error that caused the failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The configured backend is unknown or was not compiled into this binary.
    #[error("storage backend `{backend}` is not available in this build")]
    UnsupportedBackend {
        /// Name of the requested backend.
        backend: String,
    },
}

impl StorageError {
    /// Wrap a backend failure, keeping its error chain.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
