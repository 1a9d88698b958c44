//! Error types for the Extractor
//!
//! Extraction itself cannot fail; only building an extractor from a bad
//! configuration can.

use thiserror::Error;

/// Errors raised while configuring the extractor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
