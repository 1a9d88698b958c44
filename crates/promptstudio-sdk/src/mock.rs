//! Mock generation client for deterministic testing

use crate::client::DesignClient;
use crate::error::SdkError;
use async_trait::async_trait;
use promptstudio_domain::DesignResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone)]
enum MockReply {
    Review(String),
    Error(SdkError),
}

/// Mock generation client
///
/// Returns pre-configured reviews without making any network calls.
///
/// # Examples
///
/// ```
/// use promptstudio_sdk::{DesignClient, MockDesignClient};
///
/// # tokio_test_block(async {
/// let mut client = MockDesignClient::new("# 役割\nDefault");
/// client.add_response("tutor", "```\nTutor prompt\n```");
///
/// let result = client.design_prompt("tutor").await.unwrap();
/// assert_eq!(result.review, "```\nTutor prompt\n```");
/// assert_eq!(client.call_count(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockDesignClient {
    default_review: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    delay: Option<Duration>,
}

impl MockDesignClient {
    /// Create a mock that answers every request with `review`
    pub fn new(review: impl Into<String>) -> Self {
        Self {
            default_review: review.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    /// Wait `delay` before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a specific review for a given requirement
    pub fn add_response(&mut self, user_request: impl Into<String>, review: impl Into<String>) {
        lock(&self.responses).insert(user_request.into(), MockReply::Review(review.into()));
    }

    /// Configure to fail with `error` for a given requirement
    pub fn add_error(&mut self, user_request: impl Into<String>, error: SdkError) {
        lock(&self.responses).insert(user_request.into(), MockReply::Error(error));
    }

    /// Get the number of times `design_prompt` was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }
}

impl Default for MockDesignClient {
    fn default() -> Self {
        Self::new("# 役割\nDefault mock prompt")
    }
}

#[async_trait]
impl DesignClient for MockDesignClient {
    async fn design_prompt(&self, user_request: &str) -> Result<DesignResult, SdkError> {
        *lock(&self.call_count) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = lock(&self.responses).get(user_request).cloned();
        match reply {
            Some(MockReply::Error(e)) => Err(e),
            Some(MockReply::Review(review)) => Ok(DesignResult::from_review(review)),
            None => Ok(DesignResult::from_review(self.default_review.clone())),
        }
    }
}

// A poisoned mock only means another test thread panicked; keep going.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
