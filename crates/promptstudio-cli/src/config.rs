//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use promptstudio_extractor::{ExtractorConfig, DEFAULT_HEADING_MARKER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Generation service base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Heading that introduces the final prompt in unfenced reviews
    #[serde(default = "default_heading_marker")]
    pub heading_marker: String,

    /// Request timeout in seconds; unset waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// In-memory REPL line history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Prompt body only
    Quiet,
}

impl OutputFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Quiet => "quiet",
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".promptstudio").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the service base URL.
    ///
    /// `flag` already folds in the environment variable (clap reads it), so
    /// the precedence is flag, then environment, then config file.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> Result<String> {
        fn non_blank(url: Option<&str>) -> Option<&str> {
            url.map(str::trim).filter(|url| !url.is_empty())
        }

        non_blank(flag)
            .or_else(|| non_blank(self.api_url.as_deref()))
            .map(str::to_string)
            .ok_or(CliError::MissingApiUrl)
    }

    /// Extractor configuration, with an optional marker override.
    pub fn extractor_config(&self, marker: Option<&str>) -> ExtractorConfig {
        ExtractorConfig::with_marker(marker.unwrap_or(&self.heading_marker))
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            heading_marker: default_heading_marker(),
            timeout_secs: None,
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            history_size: 1000,
        }
    }
}

fn default_heading_marker() -> String {
    DEFAULT_HEADING_MARKER.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_history_size() -> usize {
    1000
}
