//! Error types for duskline

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("time {input:?} does not match format {format:?}: {source}")]
    Format {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("time of day out of range: {hour}:{minute}:{second}")]
    OutOfRange { hour: u32, minute: u32, second: u32 },

    #[error("usage: {0}")]
    Usage(String),

    #[error("sunrise-sunset payload reported status {0:?}")]
    Status(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
