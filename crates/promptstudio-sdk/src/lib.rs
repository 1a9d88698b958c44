//! Prompt Studio Rust SDK
//!
//! Client library for the prompt generation service, plus the session that
//! turns a user requirement into a ready-to-use prompt.
//!
//! # Architecture
//!
//! ```text
//! requirement → DesignClient → DesignResult.review → Extractor → final prompt
//! ```
//!
//! - `DesignClient`: injectable async interface to the generation service
//! - `HttpDesignClient`: `reqwest` implementation (`POST {base}/design_prompt`)
//! - `MockDesignClient`: deterministic in-memory client for testing
//! - `GenerationSession`: owns the request lifecycle state and runs extraction
//!
//! # Example
//!
//! ```no_run
//! use promptstudio_extractor::Extractor;
//! use promptstudio_sdk::{GenerationSession, HttpDesignClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpDesignClient::new("http://localhost:8000")?;
//! let mut session = GenerationSession::new(client, Extractor::default());
//!
//! if let Some(outcome) = session.generate("英文を添削するプロンプトを作りたい").await? {
//!     println!("{}", outcome.extraction.prompt);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod http;
mod mock;
mod session;

pub use client::DesignClient;
pub use error::SdkError;
pub use http::{HttpDesignClient, API_URL_ENV, DESIGN_PROMPT_PATH};
pub use mock::MockDesignClient;
pub use session::{GenerationOutcome, GenerationSession, SessionError};

pub use promptstudio_domain::{DesignResult, GenerationState};
pub use promptstudio_extractor::{Extraction, ExtractionSource, Extractor, ExtractorConfig};
