//! Final prompt extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fence::first_fenced_block;
use serde::Serialize;
use std::fmt;

/// Which rule produced an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Content of the first fenced block
    FencedBlock,
    /// Text from the heading marker to the end
    HeadingMarker,
    /// The whole review, trimmed
    PassThrough,
}

impl ExtractionSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionSource::FencedBlock => "fenced_block",
            ExtractionSource::HeadingMarker => "heading_marker",
            ExtractionSource::PassThrough => "pass_through",
        }
    }
}

impl fmt::Display for ExtractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of extracting the final prompt from a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Isolated prompt body, trimmed; empty when the review had no content
    pub prompt: String,

    /// Rule that produced `prompt`
    pub source: ExtractionSource,
}

impl Extraction {
    /// Whether nothing usable was found
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty()
    }

    /// Consume the extraction, keeping only the prompt text
    pub fn into_prompt(self) -> String {
        self.prompt
    }
}

/// Isolates the deliverable prompt from reviewer output
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor from a validated configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the final prompt body from `review`
    ///
    /// Rules, first match wins:
    ///
    /// 1. The first fenced block, language tag stripped, trimmed. An empty or
    ///    whitespace-only block does not count and falls through.
    /// 2. The heading marker's first occurrence through the end of the
    ///    review, trimmed.
    /// 3. The whole review, trimmed.
    pub fn extract(&self, review: &str) -> Extraction {
        if let Some(block) = first_fenced_block(review) {
            let body = trim_text(block.content);
            if !body.is_empty() {
                return Extraction {
                    prompt: body.to_string(),
                    source: ExtractionSource::FencedBlock,
                };
            }
        }

        if let Some(idx) = review.find(self.config.heading_marker.as_str()) {
            return Extraction {
                prompt: trim_text(&review[idx..]).to_string(),
                source: ExtractionSource::HeadingMarker,
            };
        }

        Extraction {
            prompt: trim_text(review).to_string(),
            source: ExtractionSource::PassThrough,
        }
    }
}

/// Trim whitespace and byte order marks from both ends
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Extract the final prompt body using the default heading marker
///
/// # Examples
///
/// ```
/// use promptstudio_extractor::extract_final_prompt;
///
/// assert_eq!(extract_final_prompt("noise ```markdown\nBODY\n``` trailing"), "BODY");
/// assert_eq!(extract_final_prompt("intro text # 役割\nDo Y"), "# 役割\nDo Y");
/// assert_eq!(extract_final_prompt("  plain text  "), "plain text");
/// assert_eq!(extract_final_prompt(""), "");
/// ```
pub fn extract_final_prompt(review: &str) -> String {
    Extractor::default().extract(review).into_prompt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_priority() {
        let extraction = Extractor::default().extract("noise ```markdown\nBODY\n``` trailing");
        assert_eq!(extraction.prompt, "BODY");
        assert_eq!(extraction.source, ExtractionSource::FencedBlock);
    }

    #[test]
    fn test_empty_fence_falls_through_to_marker() {
        let extraction = Extractor::default().extract("``` \n \n``` # 役割\nDo X");
        assert_eq!(extraction.prompt, "# 役割\nDo X");
        assert_eq!(extraction.source, ExtractionSource::HeadingMarker);
    }

    #[test]
    fn test_empty_fence_without_marker_passes_through() {
        let extraction = Extractor::default().extract("before ```\n```");
        assert_eq!(extraction.prompt, "before ```\n```");
        assert_eq!(extraction.source, ExtractionSource::PassThrough);
    }

    #[test]
    fn test_byte_order_marks_are_trimmed() {
        assert_eq!(extract_final_prompt("\u{FEFF}BODY\u{FEFF}"), "BODY");
        assert_eq!(extract_final_prompt("```\n\u{FEFF}BODY\n```"), "BODY");
        assert_eq!(extract_final_prompt("\u{FEFF} \u{FEFF}"), "");
    }

    #[test]
    fn test_whitespace_only() {
        let extraction = Extractor::default().extract(" \n\t  ");
        assert!(extraction.is_empty());
        assert_eq!(extraction.source, ExtractionSource::PassThrough);
    }

    #[test]
    fn test_custom_marker() {
        let extractor = Extractor::new(ExtractorConfig::with_marker("ROLE:")).unwrap();
        assert_eq!(extractor.extract("x ROLE: y").prompt, "ROLE: y");
        // Default marker is no longer special
        assert_eq!(extractor.extract("x # 役割 y").source, ExtractionSource::PassThrough);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(Extractor::new(ExtractorConfig::with_marker("")).is_err());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ExtractionSource::HeadingMarker.to_string(), "heading_marker");
        assert_eq!(ExtractionSource::FencedBlock.as_str(), "fenced_block");
    }
}
