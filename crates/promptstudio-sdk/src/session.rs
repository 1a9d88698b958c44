//! Generation session: request lifecycle plus extraction.

use crate::client::DesignClient;
use crate::error::SdkError;
use promptstudio_domain::{DesignResult, GenerationState, TransitionError};
use promptstudio_extractor::{Extraction, Extractor};
use thiserror::Error;
use tracing::{debug, warn};

/// Session operation errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// A request is already in flight; new requests are rejected, not queued
    #[error("A generation request is already in progress")]
    Busy,

    /// The generation service call failed
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// Internal state machine violation
    #[error("Invalid state transition: {0}")]
    State(#[from] TransitionError),
}

/// What one successful generation produced
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Final prompt isolated from the review
    pub extraction: Extraction,

    /// Full service response, handed over to the caller
    pub design: DesignResult,
}

/// Drives one requirement at a time through the generation service
///
/// Holds the lifecycle as a single [`GenerationState`]. Only the extracted
/// prompt (or the failure message) is kept between calls.
pub struct GenerationSession<C> {
    client: C,
    extractor: Extractor,
    state: GenerationState,
}

impl<C: DesignClient> GenerationSession<C> {
    /// Create an idle session
    pub fn new(client: C, extractor: Extractor) -> Self {
        Self {
            client,
            extractor,
            state: GenerationState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The extractor applied to each review
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Send `requirement` to the service and extract the final prompt
    ///
    /// Returns `Ok(None)` without contacting the service when the requirement
    /// is blank. Returns [`SessionError::Busy`] while another request is in
    /// flight, which can only happen if an earlier call's future was dropped
    /// before completing; call [`clear`](Self::clear) to recover.
    ///
    /// On failure the session moves to `Failed` and the error is returned.
    pub async fn generate(
        &mut self,
        requirement: &str,
    ) -> Result<Option<GenerationOutcome>, SessionError> {
        if requirement.trim().is_empty() {
            debug!("Ignoring blank requirement");
            return Ok(None);
        }

        self.state.start().map_err(|e| match e {
            TransitionError::AlreadyInFlight => SessionError::Busy,
            other => SessionError::State(other),
        })?;
        debug!(state = %self.state, "Generation started");

        match self.client.design_prompt(requirement).await {
            Ok(design) => {
                let extraction = self.extractor.extract(&design.review);
                debug!(
                    source = %extraction.source,
                    chars = extraction.prompt.chars().count(),
                    "Final prompt extracted"
                );
                self.state.succeed(extraction.prompt.clone())?;
                Ok(Some(GenerationOutcome { extraction, design }))
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.state.fail(e.user_message())?;
                Err(SessionError::Sdk(e))
            }
        }
    }

    /// Drop any result or error and return to idle
    pub fn clear(&mut self) {
        self.state.reset();
    }

    /// Text to place on the clipboard, if there is a non-empty prompt
    pub fn copy_text(&self) -> Option<&str> {
        self.state.prompt().filter(|prompt| !prompt.is_empty())
    }
}
