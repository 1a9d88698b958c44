//! Prompt Studio Extractor
//!
//! Isolates the deliverable prompt body from the reviewer agent's output.
//!
//! # Overview
//!
//! The reviewer returns narrative text: a verdict, a list of remarks and,
//! somewhere inside, the corrected final prompt. Depending on the model's mood
//! that prompt is wrapped in a markdown code fence, introduced by a fixed
//! heading, or is the whole response. The extractor picks the prompt out with a
//! fixed precedence:
//!
//! ```text
//! first fenced block (non-empty) → text from heading marker → whole text
//! ```
//!
//! Every branch trims its result. Extraction is total and pure: any input,
//! including the empty string and unbalanced fences, yields a string and
//! nothing is logged or mutated.
//!
//! # Example Usage
//!
//! ```
//! use promptstudio_extractor::{extract_final_prompt, Extractor, ExtractorConfig, ExtractionSource};
//!
//! let review = "# 1. 評価\nOK\n\n```markdown\n# 役割\nYou are a tutor.\n```\n";
//! assert_eq!(extract_final_prompt(review), "# 役割\nYou are a tutor.");
//!
//! let extractor = Extractor::new(ExtractorConfig::with_marker("## Role")).unwrap();
//! let extraction = extractor.extract("notes\n## Role\nBe terse.");
//! assert_eq!(extraction.prompt, "## Role\nBe terse.");
//! assert_eq!(extraction.source, ExtractionSource::HeadingMarker);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod fence;


pub use config::{ExtractorConfig, DEFAULT_HEADING_MARKER};
pub use error::ExtractorError;
pub use extractor::{extract_final_prompt, Extraction, ExtractionSource, Extractor};
pub use fence::{first_fenced_block, FencedBlock, FENCE};
