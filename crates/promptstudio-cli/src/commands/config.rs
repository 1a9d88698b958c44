//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use promptstudio_sdk::{ExtractorConfig, HttpDesignClient};
use std::path::Path;

/// Execute a config management action against the file at `path`.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    api_url: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let resolved = config.resolve_api_url(api_url).ok();
            println!("{}", formatter.config_table(config, path, resolved.as_deref()));
            return Ok(());
        }
        ConfigAction::SetUrl { url } => {
            // Store the normalized form so later loads cannot fail on it
            let client = HttpDesignClient::new(&url)?;
            config.api_url = Some(client.base_url().to_string());
            println!(
                "{}",
                formatter.success(&format!("API URL set to {}", client.base_url()))
            );
        }
        ConfigAction::SetMarker { marker } => {
            ExtractorConfig::with_marker(marker.as_str()).validate()?;
            println!(
                "{}",
                formatter.success(&format!("Heading marker set to '{}'", marker))
            );
            config.heading_marker = marker;
        }
        ConfigAction::SetTimeout { secs: Some(0) } => {
            return Err(CliError::InvalidInput(
                "Timeout must be at least one second".to_string(),
            ));
        }
        ConfigAction::SetTimeout { secs } => {
            config.timeout_secs = secs;
            let message = match secs {
                Some(secs) => format!("Request timeout set to {}s", secs),
                None => "Request timeout cleared".to_string(),
            };
            println!("{}", formatter.success(&message));
        }
        ConfigAction::Reset => {
            *config = Config::default();
            println!("{}", formatter.success("Configuration reset to defaults"));
        }
    }

    config.save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn run(action: ConfigAction, config: &mut Config, path: &Path) -> Result<()> {
        let formatter = Formatter::new(OutputFormat::Text, false);
        execute_config(ConfigArgs { action }, config, path, None, &formatter)
    }

    #[test]
    fn test_set_url_is_normalized_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        run(
            ConfigAction::SetUrl {
                url: "http://localhost:8000/".to_string(),
            },
            &mut config,
            &path,
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_set_url_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        let result = run(
            ConfigAction::SetUrl {
                url: "ftp://example.com".to_string(),
            },
            &mut config,
            &path,
        );
        assert!(matches!(result, Err(CliError::Sdk(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_marker_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        let result = run(
            ConfigAction::SetMarker {
                marker: String::new(),
            },
            &mut config,
            &path,
        );
        assert!(matches!(result, Err(CliError::Extractor(_))));
        assert_eq!(config.heading_marker, "# 役割");
    }

    #[test]
    fn test_set_and_clear_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        run(ConfigAction::SetTimeout { secs: Some(120) }, &mut config, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().timeout_secs, Some(120));

        run(ConfigAction::SetTimeout { secs: None }, &mut config, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().timeout_secs, None);

        assert!(run(ConfigAction::SetTimeout { secs: Some(0) }, &mut config, &path).is_err());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.heading_marker = "## Role".to_string();
        config.api_url = Some("http://localhost:8000".to_string());

        run(ConfigAction::Reset, &mut config, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
