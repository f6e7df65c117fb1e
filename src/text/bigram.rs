// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character bigram sets.
//!
//! Two representations of the same mathematical object:
//!
//! - [`BigramSet`]: a hash set of `(char, char)` pairs. Works on any string, so
//!   it is what [`bigrams`] returns and what one-off comparisons use.
//! - [`PackedBigrams`]: a 1296-bit bitset indexed by `[0-9a-z] × [0-9a-z]`.
//!   Only meaningful for normalized text, but intersection and union become
//!   21 `AND`/`OR` + `popcount` operations with no allocation. The windowed
//!   matcher scores millions of windows, so it uses this one.
//!
//! The key structural fact both rely on: a bigram never contains whitespace.
//! Tokens are separated by whitespace, so the bigram set of `"a b c"` is exactly
//! `bigrams("a") ∪ bigrams("b") ∪ bigrams("c")`. A window's set is the union of
//! its tokens' sets, which is what makes precomputing per-token sets sound.

use std::collections::HashSet;
use std::fmt;

/// An ordered pair of adjacent, non-whitespace characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram(pub char, pub char);

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Set of character bigrams for an arbitrary string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigramSet {
    grams: HashSet<Bigram>,
}

impl BigramSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn contains(&self, bigram: &Bigram) -> bool {
        self.grams.contains(bigram)
    }

    pub fn insert(&mut self, bigram: Bigram) -> bool {
        self.grams.insert(bigram)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bigram> {
        self.grams.iter()
    }

    /// `|self ∩ other|`, probing the larger set with the smaller one.
    pub fn intersection_len(&self, other: &BigramSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.grams.iter().filter(|g| large.grams.contains(g)).count()
    }

    /// `|self ∪ other|` via inclusion-exclusion.
    pub fn union_len(&self, other: &BigramSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}

impl FromIterator<Bigram> for BigramSet {
    fn from_iter<I: IntoIterator<Item = Bigram>>(iter: I) -> Self {
        Self {
            grams: iter.into_iter().collect(),
        }
    }
}

/// Bigrams of `word`: every adjacent char pair where neither char is whitespace.
///
/// Pure over whatever it receives; normalization is the caller's job. Strings
/// with fewer than two characters give an empty set.
///
/// ```
/// use bigrep::{bigrams, Bigram};
///
/// let set = bigrams("ab cd");
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&Bigram('a', 'b')));
/// assert!(!set.contains(&Bigram('b', ' ')));
/// ```
pub fn bigrams(word: &str) -> BigramSet {
    word.chars()
        .zip(word.chars().skip(1))
        .filter(|(a, b)| !a.is_whitespace() && !b.is_whitespace())
        .map(|(a, b)| Bigram(a, b))
        .collect()
}

// =============================================================================
// PACKED REPRESENTATION
// =============================================================================

/// Size of the normalized alphabet: `0-9` then `a-z`.
pub const ALPHABET_SIZE: usize = 36;

/// Number of distinct bigrams over the normalized alphabet.
pub const BIGRAM_SLOTS: usize = ALPHABET_SIZE * ALPHABET_SIZE;

const WORDS: usize = BIGRAM_SLOTS.div_ceil(64);

#[inline]
fn alphabet_index(byte: u8) -> Option<usize> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as usize),
        b'a'..=b'z' => Some((byte - b'a') as usize + 10),
        _ => None,
    }
}

#[inline]
fn alphabet_char(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    if index < 10 {
        (b'0' + index as u8) as char
    } else {
        (b'a' + (index - 10) as u8) as char
    }
}

/// Bitset of bigrams over `[0-9a-z]`.
///
/// Built from normalized text. Any byte outside the alphabet (whitespace, or
/// anything normalization would have removed) breaks the pair chain the same
/// way whitespace does. For normalized input, `len`, `shared_len` and
/// `union_len` agree exactly with the [`BigramSet`] equivalents.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedBigrams {
    words: [u64; WORDS],
}

impl PackedBigrams {
    pub const EMPTY: PackedBigrams = PackedBigrams { words: [0; WORDS] };

    /// Pack the bigrams of normalized text.
    pub fn from_normalized(text: &str) -> Self {
        let mut set = Self::EMPTY;
        let mut prev: Option<usize> = None;
        for byte in text.bytes() {
            let current = alphabet_index(byte);
            if let (Some(a), Some(b)) = (prev, current) {
                set.insert_slot(a * ALPHABET_SIZE + b);
            }
            prev = current;
        }
        set
    }

    #[inline]
    fn insert_slot(&mut self, slot: usize) {
        self.words[slot / 64] |= 1u64 << (slot % 64);
    }

    /// Add every bigram of `other` to `self`.
    #[inline]
    pub fn union_with(&mut self, other: &PackedBigrams) {
        for (word, theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= theirs;
        }
    }

    /// Number of distinct bigrams.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `|self ∩ other|`
    #[inline]
    pub fn shared_len(&self, other: &PackedBigrams) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// `|self ∪ other|`
    #[inline]
    pub fn union_len(&self, other: &PackedBigrams) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a | b).count_ones() as usize)
            .sum()
    }

    /// Decode back to `Bigram`s, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Bigram> + '_ {
        (0..BIGRAM_SLOTS)
            .filter(|slot| self.words[slot / 64] & (1u64 << (slot % 64)) != 0)
            .map(|slot| {
                Bigram(
                    alphabet_char(slot / ALPHABET_SIZE),
                    alphabet_char(slot % ALPHABET_SIZE),
                )
            })
    }
}

impl Default for PackedBigrams {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for PackedBigrams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|g| g.to_string())).finish()
    }
}
