//! # Base36 Suffixes
//!
//! Lowercase base-36 strings (`0-9a-z`) used to pad hashtag lists with
//! unique-looking variants.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;

/// Base-36 alphabet, digits first
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random base-36 string of exactly `width` characters.
///
/// # Arguments
/// * `rng` - Source of randomness
/// * `width` - Number of characters to produce
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R, width: usize) -> String {
    (0..width)
        .map(|_| char::from(BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())]))
        .collect()
}
