//! # Generation Request
//!
//! Validated input for one hashtag generation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{MAX_HASHTAG_COUNT, MIN_HASHTAG_COUNT},
    error::HashtagError,
};

/// A title, its custom tags and the number of hashtags wanted.
///
/// Construction guarantees a non-blank title and a count in `1..=500`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    title: String,
    custom_tags: String,
    target_count: usize,
}

impl GenerationRequest {
    /// Validates the input and clamps `count` into range.
    ///
    /// Negative counts are rejected; zero becomes one and anything above
    /// the maximum becomes the maximum.
    pub fn new(
        title: impl Into<String>,
        custom_tags: impl Into<String>,
        count: i64,
    ) -> Result<Self, HashtagError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(HashtagError::EmptyTitle);
        }

        Ok(Self {
            title,
            custom_tags: custom_tags.into(),
            target_count: clamp_count(count)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn custom_tags(&self) -> &str {
        &self.custom_tags
    }

    pub const fn target_count(&self) -> usize {
        self.target_count
    }
}

/// Clamps a requested count into `1..=500`, rejecting negative values.
pub fn clamp_count(count: i64) -> Result<usize, HashtagError> {
    if count < 0 {
        return Err(HashtagError::InvalidCount(count));
    }
    let clamped = count.clamp(MIN_HASHTAG_COUNT, MAX_HASHTAG_COUNT);
    usize::try_from(clamped).map_err(|_| HashtagError::InvalidCount(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = GenerationRequest::new("My Trip", "travel", 50).unwrap();
        assert_eq!(request.title(), "My Trip");
        assert_eq!(request.custom_tags(), "travel");
        assert_eq!(request.target_count(), 50);
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            GenerationRequest::new("", "", 10),
            Err(HashtagError::EmptyTitle)
        );
        assert_eq!(
            GenerationRequest::new(" \t\n ", "tag", 10),
            Err(HashtagError::EmptyTitle)
        );
    }

    #[test]
    fn test_count_clamped() {
        assert_eq!(clamp_count(0), Ok(1));
        assert_eq!(clamp_count(1), Ok(1));
        assert_eq!(clamp_count(500), Ok(500));
        assert_eq!(clamp_count(501), Ok(500));
        assert_eq!(clamp_count(i64::MAX), Ok(500));
    }

    #[test]
    fn test_negative_count_rejected() {
        assert_eq!(clamp_count(-1), Err(HashtagError::InvalidCount(-1)));
        assert_eq!(
            GenerationRequest::new("title", "", -5),
            Err(HashtagError::InvalidCount(-5))
        );
    }
}
