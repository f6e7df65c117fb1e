// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaccard similarity over character bigrams.
//!
//! # Degenerate inputs
//!
//! `|A ∪ B| = 0` happens whenever neither side has a bigram: empty strings,
//! single characters, or phrases made only of one-letter words (`"a b c"`).
//! The ratio is undefined there. [`similarity`] scores it as 0, which keeps the
//! matcher total: such a window is reported only under a threshold of exactly 0.
//! [`try_similarity`] surfaces the case as [`SimilarityError::Degenerate`] for
//! callers that would rather fail.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::SimilarityError;
use crate::text::{bigrams, PackedBigrams};

use super::Threshold;

/// An exact Jaccard score: `shared / total` bigrams.
///
/// Equality and ordering compare the rational value, so `1/2 == 2/4`. The
/// degenerate score `0/0` compares equal to 0.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Similarity {
    shared: u64,
    total: u64,
}

impl Similarity {
    /// Degenerate score (empty union).
    pub const DEGENERATE: Similarity = Similarity {
        shared: 0,
        total: 0,
    };

    pub fn new(shared: usize, total: usize) -> Self {
        debug_assert!(shared <= total, "intersection larger than union");
        Self {
            shared: shared as u64,
            total: total as u64,
        }
    }

    /// Bigrams present in both inputs.
    pub fn shared(&self) -> u64 {
        self.shared
    }

    /// Bigrams present in either input.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    /// Identical bigram sets (and at least one bigram).
    pub fn is_exact(&self) -> bool {
        self.total > 0 && self.shared == self.total
    }

    /// Numerator and non-zero denominator of the value this score stands for.
    pub fn as_ratio(&self) -> (u64, u64) {
        if self.total == 0 {
            (0, 1)
        } else {
            (self.shared, self.total)
        }
    }

    /// Inclusive comparison against `threshold`, done in integers.
    #[inline]
    pub fn meets(&self, threshold: &Threshold) -> bool {
        let (shared, total) = self.as_ratio();
        threshold.is_met_by(shared, total)
    }

    /// Lossy view for display and sorting in reports. Never used for decisions.
    pub fn to_f64(&self) -> f64 {
        let (shared, total) = self.as_ratio();
        shared as f64 / total as f64
    }
}

impl PartialEq for Similarity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Similarity {}

impl PartialOrd for Similarity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Similarity {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.as_ratio();
        let (c, d) = other.as_ratio();
        (u128::from(a) * u128::from(d)).cmp(&(u128::from(c) * u128::from(b)))
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.4})", self.shared, self.total, self.to_f64())
    }
}

/// Jaccard similarity of the bigram sets of `a` and `b`.
///
/// Commutative, reflexive for any string with at least one bigram, and in
/// `[0, 1]`. A degenerate comparison scores 0.
///
/// ```
/// use bigrep::similarity;
///
/// let score = similarity("machine learning", "deep machine");
/// assert_eq!((score.shared(), score.total()), (6, 15));
/// assert!(similarity("night", "night").is_exact());
/// ```
pub fn similarity(a: &str, b: &str) -> Similarity {
    let left = bigrams(a);
    let right = bigrams(b);
    let shared = left.intersection_len(&right);
    let total = left.len() + right.len() - shared;
    Similarity::new(shared, total)
}

/// Like [`similarity`], but refuses to score a comparison with no bigrams.
pub fn try_similarity(a: &str, b: &str) -> Result<Similarity, SimilarityError> {
    let score = similarity(a, b);
    if score.is_degenerate() {
        Err(SimilarityError::Degenerate)
    } else {
        Ok(score)
    }
}

/// Similarity between two packed sets. Same result as [`similarity`] on the
/// normalized strings the sets were built from.
#[inline]
pub fn packed_similarity(a: &PackedBigrams, b: &PackedBigrams) -> Similarity {
    Similarity::new(a.shared_len(b), a.union_len(b))
}
