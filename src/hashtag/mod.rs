//! # Hashtag Generation
//!
//! Builds an ordered list of unique hashtags from a post title and optional
//! custom tags, padded with random variants up to the requested count.
//!
//! ## Order
//! 1. Custom tags, as cleaned
//! 2. Per-word variants (`#word`, `#Word`) for words longer than two chars
//! 3. Joined title (`#wordsjoined`, `#WordsJoined`)
//! 4. Context variants (`Insights`, `Experts`, `Trends`, acronym)
//! 5. Random padding (`#<Title><5 base-36 chars>`)
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base36;
pub mod request;
pub mod set;
pub mod variants;

use std::{thread, time::Duration};

use rand::{rngs::StdRng, Rng, SeedableRng};

pub use self::{request::GenerationRequest, set::HashtagSet};
use crate::{
    constants::{PADDING_ATTEMPTS_PER_SLOT, PADDING_SUFFIX_LEN},
    error::HashtagError,
};

/// Generates the hashtag list for a validated request.
///
/// The result always holds exactly `request.target_count()` entries unless
/// random padding keeps colliding, which fails with
/// [`HashtagError::PaddingExhausted`].
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<String>, HashtagError> {
    let target = request.target_count();
    let words = variants::tokenize(request.title());
    let mut set = HashtagSet::new();

    set.extend(variants::custom_tags(request.custom_tags()));
    set.extend(variants::word_variants(&words));
    set.extend(variants::concatenation_variants(&words));
    set.extend(variants::context_variants(request.title(), &words));

    let derived = set.len();
    let compact_title = variants::strip_whitespace(request.title());
    let max_attempts = target.saturating_mul(PADDING_ATTEMPTS_PER_SLOT);
    let mut attempts = 0;

    while set.len() < target {
        if attempts == max_attempts {
            return Err(HashtagError::PaddingExhausted {
                produced: set.len(),
                requested: target,
            });
        }
        attempts += 1;
        let suffix = base36::random_suffix(rng, PADDING_SUFFIX_LEN);
        set.insert(variants::hashtag(&format!("{compact_title}{suffix}")));
    }

    tracing::debug!(
        derived,
        padded = set.len().saturating_sub(derived),
        attempts,
        target,
        "generated hashtags"
    );

    Ok(set.into_vec(target))
}

/// Lifecycle of a [`HashtagGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// Nothing generated yet, or cleared
    #[default]
    Idle,
    /// A generation is running
    Loading,
    /// The last generation finished with these hashtags
    Done(Vec<String>),
}

/// Stateful front end to [`generate`] holding the random source, an optional
/// cosmetic delay and the last result.
///
/// Generating borrows the generator mutably, so requests are serialized.
#[derive(Debug)]
pub struct HashtagGenerator<R = StdRng> {
    rng: R,
    delay: Duration,
    state: GenerationState,
}

impl HashtagGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a generator with reproducible output for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HashtagGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            delay: Duration::ZERO,
            state: GenerationState::Idle,
        }
    }

    /// Sets a pause applied before each generation.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub const fn state(&self) -> &GenerationState {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, GenerationState::Loading)
    }

    /// Runs a generation and keeps its result.
    ///
    /// Any previous result is discarded first. On failure the generator
    /// returns to `Idle`.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<&[String], HashtagError> {
        self.state = GenerationState::Loading;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        match generate(request, &mut self.rng) {
            Ok(hashtags) => {
                self.state = GenerationState::Done(hashtags);
                Ok(self.hashtags())
            }
            Err(err) => {
                self.state = GenerationState::Idle;
                Err(err)
            }
        }
    }

    /// Hashtags from the last successful generation (empty otherwise).
    pub fn hashtags(&self) -> &[String] {
        match &self.state {
            GenerationState::Done(hashtags) => hashtags,
            GenerationState::Idle | GenerationState::Loading => &[],
        }
    }

    /// Drops the last result.
    pub fn clear(&mut self) {
        self.state = GenerationState::Idle;
    }
}
