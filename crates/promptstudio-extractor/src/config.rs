//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Heading that opens the final prompt template ("Role") in the upstream
/// writer agent's output.
pub const DEFAULT_HEADING_MARKER: &str = "# 役割";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Literal marker that introduces the deliverable section when the
    /// reviewer does not fence it. Matched verbatim, case-sensitive.
    #[serde(default = "default_heading_marker")]
    pub heading_marker: String,
}

impl ExtractorConfig {
    /// Configuration with a custom heading marker
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            heading_marker: marker.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        // An empty marker matches at offset 0 and would shadow pass-through
        if self.heading_marker.is_empty() {
            return Err(ExtractorError::Config(
                "heading_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            heading_marker: default_heading_marker(),
        }
    }
}

fn default_heading_marker() -> String {
    DEFAULT_HEADING_MARKER.to_string()
}
