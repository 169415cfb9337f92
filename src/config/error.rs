//! Errors produced while loading and validating settings.

use thiserror::Error;

/// Failure modes of the layered configuration pipeline.
///
/// `ValidationError` and `MutualExclusivityError` point at mistakes the
/// operator can fix directly; the rest wrap file and parser trouble on
/// the way in.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file the pipeline requires is absent
    #[error("required configuration file missing: {0}")]
    FileNotFound(String),

    /// The file was found but its contents did not deserialize
    #[error("configuration could not be parsed: {0}")]
    ParseError(String),

    /// A loaded value is outside its allowed range
    #[error("invalid setting `{field}`: {message}")]
    ValidationError { field: String, message: String },

    /// An environment variable held an unusable value
    #[error("environment variable error: {0}")]
    EnvVarError(String),

    /// Two configuration sources were set that cannot be combined
    #[error("conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    /// Anything the `config` crate reports that has no mapping above
    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}
