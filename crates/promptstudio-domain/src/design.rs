//! Design result module - what the generation service hands back

/// Output of one generation request
///
/// The upstream service runs three agents in sequence and returns the text of
/// each stage. Only `review` feeds the extraction engine; the other two are
/// carried along for display and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignResult {
    /// Prompt outline produced by the structure agent
    pub structure: String,

    /// First full draft produced by the writer agent
    pub draft_prompt: String,

    /// Reviewer output: verdict, remarks and the corrected final prompt
    pub review: String,
}

impl DesignResult {
    /// Create a result that only carries review text
    ///
    /// # Examples
    ///
    /// ```
    /// use promptstudio_domain::DesignResult;
    ///
    /// let result = DesignResult::from_review("# 役割\nYou are a tutor.");
    /// assert!(result.structure.is_empty());
    /// assert_eq!(result.review, "# 役割\nYou are a tutor.");
    /// ```
    pub fn from_review(review: impl Into<String>) -> Self {
        Self {
            review: review.into(),
            ..Self::default()
        }
    }
}
