//! # Hashtag Set
//!
//! Insertion-ordered collection of unique hashtags.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashSet;

/// Ordered set of hashtags: the first insertion of a value wins its position,
/// later duplicates are ignored. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct HashtagSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl HashtagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hashtag. Returns `true` if it was not present yet.
    pub fn insert(&mut self, hashtag: impl Into<String>) -> bool {
        let hashtag = hashtag.into();
        if self.seen.contains(&hashtag) {
            return false;
        }
        self.seen.insert(hashtag.clone());
        self.order.push(hashtag);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Freezes the set into a list holding at most `limit` entries.
    pub fn into_vec(mut self, limit: usize) -> Vec<String> {
        self.order.truncate(limit);
        self.order
    }
}

impl<S: Into<String>> Extend<S> for HashtagSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for hashtag in iter {
            self.insert(hashtag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut set = HashtagSet::new();
        assert!(set.insert("#b"));
        assert!(set.insert("#a"));
        assert!(!set.insert("#b"));
        assert_eq!(set.into_vec(10), vec!["#b", "#a"]);
    }

    #[test]
    fn test_case_sensitive() {
        let mut set = HashtagSet::new();
        set.extend(["#rust", "#Rust", "#rust"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(10), vec!["#rust", "#Rust"]);
    }

    #[test]
    fn test_into_vec_truncates() {
        let mut set = HashtagSet::new();
        set.extend(["#one", "#two", "#three"]);
        assert_eq!(set.into_vec(2), vec!["#one", "#two"]);
    }

    #[test]
    fn test_empty() {
        let set = HashtagSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.into_vec(5).is_empty());
    }
}
