// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text canonicalization: the only place raw input gets touched.
//!
//! Everything downstream (bigrams, windows, scores) assumes tokens are lowercase
//! ASCII alphanumerics with no internal whitespace. This module is what makes
//! that true. Normalization is deliberately dumb: every character that is not
//! `[A-Za-z0-9]` becomes exactly one space. No collapsing, no Unicode folding,
//! so the output has the same number of characters as the input and running it
//! twice changes nothing.
//!
//! ```text
//! "Deep-Learning, 2nd Ed."  →  "deep learning  2nd ed "
//!                                  │              │
//!                  one space per dropped char     tokenize() drops empties
//! ```

pub mod bigram;

pub use bigram::*;

/// Canonical comparable form: lowercase ASCII alphanumerics, everything else a space.
///
/// The replacement is one-to-one per `char`, so `normalize(s).chars().count()`
/// equals `s.chars().count()`. Multi-byte characters collapse to a single
/// ASCII space, so the byte length never grows either.
///
/// ```
/// use bigrep::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "hello  world ");
/// assert_eq!(normalize("café"), "caf ");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Split normalized text into tokens, dropping empty segments.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalize `text` and collect its tokens.
///
/// Convenience for callers holding raw text; the query side of a search goes
/// through this exactly once.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    tokenize(&normalize(text)).map(str::to_owned).collect()
}

/// Is this already a well-formed token? Non-empty, lowercase ASCII alphanumeric.
#[inline]
pub fn is_normalized_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}
