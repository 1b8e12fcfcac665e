// Error types for the ghorg client.
// Covers transport failures, JSON decoding, and nested-map traversal errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhorgError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A key path could not be followed. `step` is the zero-based position
    /// of `key` within the path.
    #[error("missing key {key:?} at step {step}")]
    MissingKey { key: String, step: usize },

    #[error("unexpected JSON at {path}: expected {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GhorgError>;
