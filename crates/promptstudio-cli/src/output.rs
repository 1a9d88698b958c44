//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use promptstudio_sdk::{Extraction, GenerationState};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an extracted prompt.
    pub fn format_extraction(&self, extraction: &Extraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
            OutputFormat::Quiet => Ok(extraction.prompt.clone()),
            OutputFormat::Text => Ok(self.format_extraction_text(extraction)),
        }
    }

    fn format_extraction_text(&self, extraction: &Extraction) -> String {
        if extraction.is_empty() {
            return self.warning("The review contained no prompt text.");
        }

        let header = self.success(&format!("Final prompt ({})", extraction.source));
        format!("{}\n\n{}", header, extraction.prompt)
    }

    /// Format the raw review text.
    pub fn review(&self, review: &str) -> String {
        let header = self.colorize("── review ──", "cyan");
        format!("{}\n{}\n{}", header, review.trim_end(), self.colorize("────────────", "cyan"))
    }

    /// Format the session lifecycle state.
    pub fn state(&self, state: &GenerationState) -> String {
        match state {
            GenerationState::Idle => self.info("idle: no prompt yet"),
            GenerationState::Requesting => self.info("requesting: waiting for the service"),
            GenerationState::Succeeded(prompt) if prompt.is_empty() => {
                self.warning("succeeded: the review contained no prompt text")
            }
            GenerationState::Succeeded(prompt) => self.success(&format!(
                "succeeded: {} character prompt ready to copy",
                prompt.chars().count()
            )),
            GenerationState::Failed(message) => self.error(&format!("failed: {}", message)),
        }
    }

    /// Format the effective configuration as a table.
    pub fn config_table(&self, config: &Config, path: &Path, api_url: Option<&str>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Setting", "Value"]);

        let timeout = config
            .timeout_secs
            .map(|secs| format!("{}s", secs))
            .unwrap_or_else(|| "none".to_string());
        let history_size = config.settings.history_size.to_string();

        builder.push_record(["config file", &path.display().to_string()]);
        builder.push_record(["api_url", api_url.unwrap_or("(not set)")]);
        builder.push_record(["heading_marker", &config.heading_marker]);
        builder.push_record(["timeout", &timeout]);
        builder.push_record(["color", if config.settings.color { "on" } else { "off" }]);
        builder.push_record(["format", config.settings.format.as_str()]);
        builder.push_record(["history_size", &history_size]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a saved-prompt confirmation.
    pub fn prompt_saved(&self, path: &Path) -> String {
        self.success(&format!("Prompt saved to {}", path.display()))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
