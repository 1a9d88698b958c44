//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SDK error
    #[error("{0}")]
    Sdk(#[from] promptstudio_sdk::SdkError),

    /// Generation session error
    #[error("Generation failed: {0}")]
    Session(#[from] promptstudio_sdk::SessionError),

    /// Extractor configuration error
    #[error("{0}")]
    Extractor(#[from] promptstudio_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Readline(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No service URL configured
    #[error(
        "No API URL configured. Pass --api-url, set PROMPTSTUDIO_API_URL, or run 'promptstudio config set-url <URL>'."
    )]
    MissingApiUrl,
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        CliError::Readline(e.to_string())
    }
}
