//! Session construction from configuration.

use crate::config::Config;
use crate::error::Result;
use promptstudio_sdk::{Extractor, GenerationSession, HttpDesignClient};
use tracing::info;

/// Build a generation session against the configured service.
///
/// `api_url` is the flag/environment value and wins over the config file;
/// `marker` overrides the configured heading marker.
pub fn connect(
    config: &Config,
    api_url: Option<&str>,
    marker: Option<&str>,
) -> Result<GenerationSession<HttpDesignClient>> {
    let url = config.resolve_api_url(api_url)?;
    let extractor = Extractor::new(config.extractor_config(marker))?;

    let client = match config.timeout() {
        Some(timeout) => HttpDesignClient::with_timeout(&url, timeout)?,
        None => HttpDesignClient::new(&url)?,
    };
    info!(endpoint = %client.endpoint(), "Using generation service");

    Ok(GenerationSession::new(client, extractor))
}
