//! Error types for the Prompt Studio SDK.

use thiserror::Error;

/// Message shown when the service fails without saying why
pub(crate) const GENERIC_SERVICE_MESSAGE: &str = "API Error";

/// SDK operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SdkError {
    /// Client misconfiguration (missing or malformed base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, timeout or other transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("Service error (HTTP {status}): {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Response body text, or a generic message when empty
        message: String,
    },

    /// Service answered with a body that is not a design result
    #[error("Decode error: {0}")]
    Decode(String),
}

impl SdkError {
    /// Message suitable for showing to the user
    ///
    /// Service errors surface the body text as-is; everything else uses the
    /// full error description.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Service { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else if e.is_builder() {
            SdkError::Config(e.to_string())
        } else if e.is_timeout() {
            SdkError::Transport(format!("Request timed out: {}", e))
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(format!("JSON parsing error: {}", e))
    }
}
