//! Generation service client interface.

use crate::error::SdkError;
use async_trait::async_trait;
use promptstudio_domain::DesignResult;

/// Interface to the prompt generation service
///
/// Implemented by `HttpDesignClient` for the real service and by
/// `MockDesignClient` for tests.
#[async_trait]
pub trait DesignClient: Send + Sync {
    /// Send one user requirement and wait for the design result
    async fn design_prompt(&self, user_request: &str) -> Result<DesignResult, SdkError>;
}

#[async_trait]
impl<T: DesignClient + ?Sized> DesignClient for Box<T> {
    async fn design_prompt(&self, user_request: &str) -> Result<DesignResult, SdkError> {
        (**self).design_prompt(user_request).await
    }
}
