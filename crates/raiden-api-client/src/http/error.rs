/*
[INPUT]:  Error sources (construction, validation, HTTP status, decoding, transport)
[OUTPUT]: Structured error types with diagnostic context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Raiden API client
#[derive(Error, Debug)]
pub enum RaidenError {
    /// Client construction rejected its configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required argument was empty or non-positive
    #[error("Invalid argument `{parameter}`: {reason}")]
    Validation {
        parameter: &'static str,
        reason: &'static str,
    },

    /// The node answered with a status other than the one the operation expects
    #[error("invalid response: {status} (expected {expected}) from {uri}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        uri: String,
        body: String,
    },

    /// Response body was neither JSON nor text, or did not match the expected shape
    #[error("failed to read response from {uri}: {reason}")]
    Decode { uri: String, reason: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-reqwest transport failed to deliver the request
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RaidenError {
    /// Status code reported by the node, if the error came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RaidenError::UnexpectedStatus { status, .. } => StatusCode::from_u16(*status).ok(),
            RaidenError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the node reported the resource as missing (e.g. token not registered)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Check if the error was raised before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            RaidenError::Validation { .. } | RaidenError::Config(_)
        )
    }

    /// Create a validation error for a named argument
    pub fn invalid_argument(parameter: &'static str, reason: &'static str) -> Self {
        RaidenError::Validation { parameter, reason }
    }
}

/// Result type alias for Raiden API operations
pub type Result<T> = std::result::Result<T, RaidenError>;
