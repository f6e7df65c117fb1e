// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus as one flat, ordered stream of normalized tokens.
//!
//! Tokens are stored back to back in a single buffer, separated by exactly one
//! space, with a span per token. A window of `n` tokens starting at `i` is then
//! just the slice from the start of token `i` to the end of token `i + n - 1`,
//! which is already the "tokens joined with single spaces" text a match reports.
//! No per-window allocation until a window actually matches.
//!
//! ```text
//! text:   "deep machine learning systems"
//! spans:   [0,4) [5,12) [13,21) [22,29)
//! window(1, 2) = text[5..21] = "machine learning"
//! ```
//!
//! Each token's packed bigram set is computed once at construction; a window's
//! set is the union of its tokens' sets.

use std::ops::Range;

use crate::contracts::check_token_normalized;
use crate::text::{normalize, tokenize, PackedBigrams};

/// Ordered, immutable-once-built token stream with precomputed bigram sets.
#[derive(Clone, Debug, Default)]
pub struct TokenStream {
    text: String,
    spans: Vec<Range<usize>>,
    bigrams: Vec<PackedBigrams>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens of a single block of raw text.
    pub fn from_text(text: &str) -> Self {
        let mut stream = Self::new();
        stream.push_text(text);
        stream
    }

    /// Tokens of each line, in order, flattened into one stream.
    ///
    /// Line boundaries carry no meaning: a window may span the end of one line
    /// and the start of the next.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stream = Self::new();
        for line in lines {
            stream.push_text(line.as_ref());
        }
        stream
    }

    /// Normalize `raw` and append its tokens.
    pub fn push_text(&mut self, raw: &str) {
        let normalized = normalize(raw);
        for token in tokenize(&normalized) {
            self.push_token(token);
        }
    }

    fn push_token(&mut self, token: &str) {
        check_token_normalized(token);
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        let start = self.text.len();
        self.text.push_str(token);
        self.spans.push(start..self.text.len());
        self.bigrams.push(PackedBigrams::from_normalized(token));
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Token at `index`.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }

    /// All tokens in stream order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.text[span.clone()])
    }

    /// Number of windows of `width` tokens: `len - width + 1`, or 0 when the
    /// stream is shorter than `width` (or `width` is 0).
    pub fn window_count(&self, width: usize) -> usize {
        if width == 0 || self.len() < width {
            0
        } else {
            self.len() - width + 1
        }
    }

    /// Text of the window `[offset, offset + width)`: tokens joined by single spaces.
    ///
    /// # Panics
    /// Panics if the window runs past the end of the stream or `width` is 0.
    pub fn window_text(&self, offset: usize, width: usize) -> &str {
        let first = &self.spans[offset];
        let last = &self.spans[offset + width - 1];
        &self.text[first.start..last.end]
    }

    /// Bigram set of the window `[offset, offset + width)`.
    pub fn window_bigrams(&self, offset: usize, width: usize) -> PackedBigrams {
        let mut set = PackedBigrams::EMPTY;
        for token in &self.bigrams[offset..offset + width] {
            set.union_with(token);
        }
        set
    }
}
