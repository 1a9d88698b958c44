//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use promptstudio_sdk::API_URL_ENV;
use std::path::PathBuf;

/// Prompt Studio CLI - Turn a requirement into a ready-to-use prompt.
#[derive(Debug, Parser)]
#[command(name = "promptstudio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the generation service (e.g., http://localhost:8000)
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Heading that introduces the final prompt in unfenced reviews
    #[arg(long, global = true)]
    pub marker: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON object with prompt and source
    Json,
    /// Prompt body only, for piping
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a prompt from a requirement
    Generate(GenerateArgs),

    /// Extract the final prompt from a saved review (no network)
    Extract(ExtractArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Requirement text (words are joined with spaces)
    pub requirement: Vec<String>,

    /// Read the requirement from stdin
    #[arg(long, conflicts_with = "requirement")]
    pub stdin: bool,

    /// Also write the final prompt to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the raw review to stderr as well
    #[arg(long)]
    pub show_review: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File containing review text (reads stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Set the generation service base URL
    SetUrl {
        /// Base URL (e.g., http://localhost:8000)
        url: String,
    },

    /// Set the heading marker used when the review has no fenced block
    SetMarker {
        /// Marker text, matched verbatim
        marker: String,
    },

    /// Set or clear the request timeout
    SetTimeout {
        /// Timeout in seconds; omit to wait indefinitely
        secs: Option<u64>,
    },

    /// Restore default configuration
    Reset,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
