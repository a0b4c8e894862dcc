//! Error types for the texfrag library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by a tabular-to-markup renderer, passed through untouched.
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error raised by an external tabular renderer.
    pub fn collaborator<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Collaborator(err.into())
    }
}

/// Invalid arguments passed to the numeric formatters or the tabular renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Significant digit count must be non-negative, got {0}")]
    NegativeDigits(i32),

    #[error("Header has {given} entries but the table has {expected} columns")]
    HeaderLength { expected: usize, given: usize },
}

/// Errors that occur while loading emitter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML: {0}")]
    Parse(String),
}
