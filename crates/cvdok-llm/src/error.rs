//! Error types for the structuring client

use thiserror::Error;

/// Result type for structuring operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while turning raw text into a resume record
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The model reply was not a valid resume record
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model reply contained no text
    #[error("Model returned empty content")]
    EmptyContent,

    /// API key not configured
    #[error("Required environment variable '{0}' is not set")]
    MissingApiKey(&'static str),
}
