//! Generation state module - lifecycle of one request
//!
//! A single explicit value replaces independent loading/error flags, so a
//! request can never be "loading" and "failed" at the same time.
//!
//! ```text
//!          start            succeed(prompt)
//! Idle ──────────▶ Requesting ─────────────▶ Succeeded(prompt)
//!  ▲                   │
//!  │ reset             │ fail(message)
//!  └───────────────────┴──────────────────▶ Failed(message)
//! ```
//!
//! Only one request may be in flight: `start` while `Requesting` is rejected.

use std::fmt;

/// State of the current generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// Nothing requested yet, or cleared
    #[default]
    Idle,

    /// A request is in flight
    Requesting,

    /// The request finished; holds the extracted prompt (may be empty)
    Succeeded(String),

    /// The request failed; holds the user-facing message
    Failed(String),
}

/// Rejected state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// `start` was called while a request is already in flight
    AlreadyInFlight,

    /// `succeed`/`fail` was called without an in-flight request
    NotRequesting {
        /// Label of the state the machine was in
        current: &'static str,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::AlreadyInFlight => {
                write!(f, "a generation request is already in flight")
            }
            TransitionError::NotRequesting { current } => {
                write!(f, "no request in flight (state: {})", current)
            }
        }
    }
}

impl std::error::Error for TransitionError {}

impl GenerationState {
    /// Begin a new request
    ///
    /// Allowed from every state except `Requesting`. Any previous result or
    /// error is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptstudio_domain::{GenerationState, TransitionError};
    ///
    /// let mut state = GenerationState::default();
    /// state.start().unwrap();
    /// assert_eq!(state.start(), Err(TransitionError::AlreadyInFlight));
    /// ```
    pub fn start(&mut self) -> Result<(), TransitionError> {
        if self.is_in_flight() {
            return Err(TransitionError::AlreadyInFlight);
        }
        *self = GenerationState::Requesting;
        Ok(())
    }

    /// Complete the in-flight request with an extracted prompt
    pub fn succeed(&mut self, prompt: impl Into<String>) -> Result<(), TransitionError> {
        self.ensure_requesting()?;
        *self = GenerationState::Succeeded(prompt.into());
        Ok(())
    }

    /// Complete the in-flight request with a failure message
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.ensure_requesting()?;
        *self = GenerationState::Failed(message.into());
        Ok(())
    }

    /// Return to `Idle` unconditionally
    ///
    /// Also the recovery path when an in-flight future was dropped before it
    /// could report back.
    pub fn reset(&mut self) {
        *self = GenerationState::Idle;
    }

    /// Whether a request is in flight
    pub fn is_in_flight(&self) -> bool {
        matches!(self, GenerationState::Requesting)
    }

    /// Extracted prompt, if the last request succeeded
    pub fn prompt(&self) -> Option<&str> {
        match self {
            GenerationState::Succeeded(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Failure message, if the last request failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name of the state
    pub fn label(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Requesting => "requesting",
            GenerationState::Succeeded(_) => "succeeded",
            GenerationState::Failed(_) => "failed",
        }
    }

    fn ensure_requesting(&self) -> Result<(), TransitionError> {
        if self.is_in_flight() {
            Ok(())
        } else {
            Err(TransitionError::NotRequesting {
                current: self.label(),
            })
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
