//! Prompt Studio Domain Layer
//!
//! Core value types shared by every other crate in the workspace.
//! It has ZERO external dependencies and holds no I/O: the HTTP client,
//! the extraction engine and the CLI all build on the types defined here.
//!
//! ## Key Concepts
//!
//! - **DesignResult**: The three texts produced by the upstream generation
//!   service for one requirement (structure, draft prompt, review)
//! - **GenerationState**: The lifecycle of a single generation request
//!   (idle → requesting → succeeded | failed)
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure state and value logic only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod design;
pub mod state;

// Re-exports for convenience
pub use design::DesignResult;
pub use state::{GenerationState, TransitionError};
