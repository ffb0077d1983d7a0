//! Rate loading error types.

use thiserror::Error;

/// Errors that can occur when loading shipping reference data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read the backing store.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed.
    #[error("Failed to parse rates: {0}")]
    Parse(String),

    /// The data parsed but is not usable.
    #[error("Invalid rate data: {0}")]
    InvalidData(String),

    /// File extension not recognised.
    #[error("Unsupported rate file format: {0}")]
    UnsupportedFormat(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for SourceError {
    fn from(e: toml::de::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}
