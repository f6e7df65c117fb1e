//! Runtime contracts for the matching engine.
//!
//! Debug-mode assertions for the properties the engine relies on. They
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the point an invariant breaks, not three layers later when a
//!    score comes out wrong
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                           |
//! |-----------------------------|----------------------------------------------------|
//! | `check_token_normalized`    | Tokens are non-empty `[a-z0-9]+`                   |
//! | `check_window_in_bounds`    | `offset + width <= total_tokens`                   |
//! | `check_similarity_bounded`  | `0 <= shared <= total`                             |
//! | `check_matches_ordered`     | Match offsets strictly increase                    |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::scoring::MAX_FRACTION_DIGITS;
    use crate::text::{ALPHABET_SIZE, BIGRAM_SLOTS};

    // Normalized alphabet is exactly digits + lowercase ASCII letters.
    assert!(ALPHABET_SIZE == 10 + 26);
    assert!(BIGRAM_SLOTS == ALPHABET_SIZE * ALPHABET_SIZE);

    // 10^MAX_FRACTION_DIGITS must fit in u128 (max ≈ 3.4 × 10^38).
    assert!(MAX_FRACTION_DIGITS <= 38);
};

use crate::scoring::Similarity;
use crate::search::Match;
use crate::text::is_normalized_token;

// ============================================================================
// TOKEN CONTRACTS
// ============================================================================

/// Check that a token is what normalization produces.
///
/// # Panics (debug builds only)
/// Panics on an empty token, whitespace, uppercase, or non-ASCII content.
#[inline]
pub fn check_token_normalized(token: &str) {
    debug_assert!(
        is_normalized_token(token),
        "Contract violation: token {:?} is not normalized",
        token
    );
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check that a window lies entirely inside the token stream.
///
/// # Panics (debug builds only)
/// Panics if `width == 0` or `offset + width > total_tokens`.
#[inline]
pub fn check_window_in_bounds(offset: usize, width: usize, total_tokens: usize) {
    debug_assert!(width > 0, "Contract violation: zero-width window");
    debug_assert!(
        offset + width <= total_tokens,
        "Contract violation: window [{}, {}) crosses end of stream ({} tokens)",
        offset,
        offset + width,
        total_tokens
    );
}

// ============================================================================
// SCORING CONTRACTS
// ============================================================================

/// Check that a score is a valid Jaccard ratio.
///
/// # Panics (debug builds only)
/// Panics if the intersection is larger than the union.
#[inline]
pub fn check_similarity_bounded(score: &Similarity) {
    debug_assert!(
        score.shared() <= score.total(),
        "Contract violation: similarity {}/{} exceeds 1",
        score.shared(),
        score.total()
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that matches are in ascending window order with no repeated offset.
///
/// # Panics (debug builds only)
/// Panics if any match offset is not greater than the previous one.
#[inline]
pub fn check_matches_ordered(matches: &[Match]) {
    debug_assert!(
        matches.windows(2).all(|pair| pair[0].offset < pair[1].offset),
        "Contract violation: matches are not in ascending offset order"
    );
}
