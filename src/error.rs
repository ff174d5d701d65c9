//! Error types for the films vault generator.

use crate::core::schema::SchemaViolation;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the films vault generator.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    TmdbApiKeyMissing,

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    // TMDB errors
    #[error("API Error: {status} ({endpoint})")]
    Api { status: u16, endpoint: String },

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Content errors
    #[error("{path}: {} schema violation(s), first: {}", .violations.len(), first_violation(.violations))]
    Schema {
        path: String,
        violations: Vec<SchemaViolation>,
    },

    #[error("{path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

fn first_violation(violations: &[SchemaViolation]) -> String {
    violations
        .first()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}
