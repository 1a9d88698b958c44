//! Prompt Studio CLI library.
//!
//! This library provides the core functionality for the Prompt Studio
//! command-line interface, including configuration management, command
//! execution, output formatting and the interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
