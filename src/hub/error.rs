//! Error types for Hub API operations

use thiserror::Error;

/// Errors that can occur talking to the Hub API
#[derive(Debug, Error)]
pub enum HubError {
    /// Missing authentication token
    #[error("Missing HF_TOKEN - set the environment variable or create ~/.huggingface/token")]
    MissingToken,

    /// Invalid repository ID format
    #[error("Invalid repository ID format (expected 'owner/name'): {repo_id}")]
    InvalidRepoId { repo_id: String },

    /// Request-level failure (DNS, timeout, connection reset)
    #[error("Hub request failed: {message}")]
    Http { message: String },

    /// Server answered with a non-success status
    #[error("Hub API returned HTTP {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body did not decode as expected
    #[error("Failed to decode Hub response: {message}")]
    Decode { message: String },
}
