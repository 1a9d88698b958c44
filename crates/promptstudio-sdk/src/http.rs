//! HTTP client for the prompt generation service
//!
//! Talks to the service's single endpoint:
//!
//! ```text
//! POST {base_url}/design_prompt
//! {"userRequest": "..."}
//! → {"structure": "...", "draftPrompt": "...", "review": "..."}
//! ```
//!
//! Failures are never retried; the caller decides what to do with them.

use crate::client::DesignClient;
use crate::error::{SdkError, GENERIC_SERVICE_MESSAGE};
use async_trait::async_trait;
use promptstudio_domain::DesignResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable holding the service base URL
pub const API_URL_ENV: &str = "PROMPTSTUDIO_API_URL";

/// Path of the generation endpoint, relative to the base URL
pub const DESIGN_PROMPT_PATH: &str = "/design_prompt";

/// Request body for the design endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DesignRequest<'a> {
    user_request: &'a str,
}

/// Response body from the design endpoint
///
/// Only `review` is required. The Python backend spells the draft field
/// `draft_prompt` while the documented contract uses `draftPrompt`; both are
/// accepted.
#[derive(Debug, Deserialize)]
struct DesignResponse {
    #[serde(default)]
    structure: Option<String>,
    #[serde(default, rename = "draftPrompt", alias = "draft_prompt")]
    draft_prompt: Option<String>,
    #[serde(default)]
    review: Option<String>,
}

impl DesignResponse {
    fn into_domain(self) -> Result<DesignResult, SdkError> {
        let review = self
            .review
            .ok_or_else(|| SdkError::Decode("response has no string `review` field".to_string()))?;

        Ok(DesignResult {
            structure: self.structure.unwrap_or_default(),
            draft_prompt: self.draft_prompt.unwrap_or_default(),
            review,
        })
    }
}

/// `reqwest`-backed generation client
#[derive(Debug, Clone)]
pub struct HttpDesignClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDesignClient {
    /// Create a client for the service at `base_url`
    ///
    /// No request timeout is applied; a slow multi-agent run simply takes as
    /// long as it takes.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::build(base_url, None)
    }

    /// Create a client that gives up on requests after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SdkError> {
        Self::build(base_url, Some(timeout))
    }

    /// Create a client from the `PROMPTSTUDIO_API_URL` environment variable
    pub fn from_env() -> Result<Self, SdkError> {
        let base_url = std::env::var(API_URL_ENV)
            .map_err(|_| SdkError::Config(format!("{} is not set", API_URL_ENV)))?;
        Self::new(&base_url)
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, SdkError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the design endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DESIGN_PROMPT_PATH)
    }
}

#[async_trait]
impl DesignClient for HttpDesignClient {
    async fn design_prompt(&self, user_request: &str) -> Result<DesignResult, SdkError> {
        let url = self.endpoint();
        debug!(%url, chars = user_request.chars().count(), "Sending design request");

        let response = self
            .client
            .post(&url)
            .json(&DesignRequest { user_request })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                GENERIC_SERVICE_MESSAGE.to_string()
            } else {
                body
            };
            warn!(status = status.as_u16(), "Design request failed");
            return Err(SdkError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: DesignResponse = serde_json::from_str(&body)?;
        let result = parsed.into_domain()?;
        debug!(review_chars = result.review.chars().count(), "Design request succeeded");
        Ok(result)
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, SdkError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SdkError::Config("API base URL is empty".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(SdkError::Config(format!(
            "API base URL must start with http:// or https://: {}",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}
