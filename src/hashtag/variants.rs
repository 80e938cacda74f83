//! # Variants
//!
//! Deterministic hashtag derivations from a title and custom tag input.
//!
//! ## Rules
//! 1. Custom tags: trim, drop one leading `#`, remove inner whitespace
//! 2. Words longer than two characters: lowercase and capitalized forms
//! 3. Whole title: joined lowercase and joined capitalized forms
//! 4. Context: `Insights`, `Experts`, `Trends` and the acronym
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::{
    CUSTOM_TAG_SEPARATOR, EXPERTS_SUFFIX, HASHTAG_PREFIX, INSIGHTS_SUFFIX, SHORT_WORD_MAX_LEN,
    TRENDS_SUFFIX,
};

/// Lowercases a title and splits it into words on whitespace runs.
///
/// Punctuation stays attached to its word.
///
/// # Example
/// ```
/// use hashtagger::hashtag::variants::tokenize;
/// assert_eq!(tokenize("  Rust, Fast!  "), vec!["rust,", "fast!"]);
/// ```
pub fn tokenize(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Removes every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Prefixes `body` with `#`.
pub fn hashtag(body: &str) -> String {
    let mut tag = String::with_capacity(body.len() + 1);
    tag.push(HASHTAG_PREFIX);
    tag.push_str(body);
    tag
}

/// Normalizes one custom tag. Returns `None` when nothing is left.
///
/// # Example
/// ```
/// use hashtagger::hashtag::variants::clean_custom_tag;
/// assert_eq!(clean_custom_tag(" #Sale "), Some("#Sale".to_string()));
/// assert_eq!(clean_custom_tag("  "), None);
/// ```
pub fn clean_custom_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix(HASHTAG_PREFIX).unwrap_or(trimmed);
    let body = strip_whitespace(body);
    (!body.is_empty()).then(|| hashtag(&body))
}

/// Splits the comma-separated custom tag input and cleans every entry.
pub fn custom_tags(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input
        .split(CUSTOM_TAG_SEPARATOR)
        .filter_map(clean_custom_tag)
        .collect()
}

/// `#word` and `#Word` for every word longer than two characters.
pub fn word_variants(words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.chars().count() > SHORT_WORD_MAX_LEN)
        .flat_map(|word| [hashtag(word), hashtag(&capitalize(word))])
        .collect()
}

/// `#wordsjoined` and `#WordsJoined`.
pub fn concatenation_variants(words: &[String]) -> [String; 2] {
    let joined = words.concat();
    let title_case: String = words.iter().map(|word| capitalize(word)).collect();
    [hashtag(&joined), hashtag(&title_case)]
}

/// Upper-cased first character of every word.
pub fn acronym(words: &[String]) -> String {
    words
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// The four context variants: insights, experts, trends and acronym.
///
/// `title` keeps its original case; `words` come from [`tokenize`].
pub fn context_variants(title: &str, words: &[String]) -> [String; 4] {
    let first = words.first().map_or("", String::as_str);
    let last = words.last().map_or("", String::as_str);
    [
        hashtag(&format!("{}{INSIGHTS_SUFFIX}", strip_whitespace(title))),
        hashtag(&format!("{first}{EXPERTS_SUFFIX}")),
        hashtag(&format!("{last}{TRENDS_SUFFIX}")),
        hashtag(&acronym(words)),
    ]
}
