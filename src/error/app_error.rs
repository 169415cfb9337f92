use thiserror::Error;
use uuid::Uuid;

use crate::cache::CacheError;
use crate::store::StoreError;

/// Application-wide error type covering every outcome the service can
/// surface to the HTTP adapter.
///
/// `NotFound`, `EmptyCatalog`, `DuplicateGenres` and `NoGenresRemoved` are
/// expected domain results rather than failures: they are returned, never
/// retried, and map to specific status codes. `Store`, `Cache` and
/// `Internal` are the unexpected failures; they map to a generic 500-class
/// response with no internal detail leaked.
#[derive(Error, Debug)]
pub enum AppError {
    /// No content exists with the given id
    #[error("Content not found: {id}")]
    NotFound { id: Uuid },

    /// The catalog holds no content at all
    #[error("No contents found")]
    EmptyCatalog,

    /// The caller tried to add tags already present on the record; the
    /// whole operation is rejected and every offending name is reported
    #[error("Genres: [{}] already exist", genres.iter().map(|g| format!("'{g}'")).collect::<Vec<_>>().join(", "))]
    DuplicateGenres { genres: Vec<String> },

    /// None of the requested removal tags matched the record's list
    #[error("No genres to remove.")]
    NoGenresRemoved,

    /// Request payload failed validation
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Store call failed unexpectedly
    #[error("Store operation failed: {operation}")]
    Store {
        operation: String,
        #[source]
        source: StoreError,
    },

    /// Cache call failed unexpectedly
    #[error("Cache operation failed: {operation}")]
    Cache {
        operation: String,
        #[source]
        source: CacheError,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
