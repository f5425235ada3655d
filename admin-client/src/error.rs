//! Client error types

use shared::validate::FieldError;
use thiserror::Error;

/// Client error type.
///
/// Variants carry rendered messages rather than source errors so the whole
/// enum stays `Clone`: the query cache broadcasts one settled result to every
/// coalesced waiter.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Network or transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid response format
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401); the local session mirror has been cleared
    #[error("authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Rejected client-side or by the server's field validation (400)
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other server-reported failure
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Local IO error (session mirror persistence)
    #[error("io error: {0}")]
    Io(String),

    /// Client misconfiguration
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<FieldError> for ClientError {
    fn from(err: FieldError) -> Self {
        ClientError::Validation(err.to_string())
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
