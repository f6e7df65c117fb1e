// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Windowed phrase matching: slide a query-sized window over the corpus.
//!
//! The query fixes the window width `N` (its token count) and one bigram set.
//! Every offset `i` in `0..=total_tokens - N` is scored, in order, and kept if
//! its similarity meets the threshold. That is the whole algorithm:
//!
//! ```text
//! query  "machine learning"            N = 2
//! tokens  deep machine learning systems are hard
//!         └──┬───┘                                  i=0  6/15  ✗
//!              └────┬─────────┘                     i=1  12/12 ✓
//!                      └──────┬───────┘             i=2  7/18  ✗
//!                                ...
//! ```
//!
//! No index, no pruning. The scan is `O(total_tokens × N)` bitset operations and
//! every window is judged exactly. Overlapping and repeated matches are all
//! reported, one per qualifying offset.
//!
//! With the `parallel` feature the offset range is split into contiguous chunks
//! scored on the rayon pool; chunk results are concatenated in chunk order, so
//! the output is identical to the sequential scan.

#[cfg(feature = "parallel")]
mod parallel;
mod tokens;

pub use tokens::TokenStream;

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::config::MatchConfig;
use crate::contracts::{check_matches_ordered, check_similarity_bounded, check_window_in_bounds};
use crate::scoring::{packed_similarity, Similarity, Threshold};
use crate::text::{normalized_tokens, PackedBigrams};

/// A window whose similarity met the threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Index of the window's first token in the stream.
    pub offset: usize,
    /// Window tokens joined by single spaces.
    pub text: String,
    pub score: Similarity,
}

/// A query prepared for scanning: normalized once, reused for every window.
#[derive(Clone, Debug)]
pub struct WindowedMatcher {
    query: String,
    width: usize,
    query_bigrams: PackedBigrams,
    threshold: Threshold,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    min_parallel_windows: usize,
}

impl WindowedMatcher {
    /// Prepare `query` with the default scan strategy.
    pub fn new(query: &str, threshold: Threshold) -> Self {
        Self::from_config(
            query,
            &MatchConfig {
                threshold,
                ..MatchConfig::default()
            },
        )
    }

    /// Prepare `query` with threshold and strategy from `config`.
    pub fn from_config(query: &str, config: &MatchConfig) -> Self {
        let tokens = normalized_tokens(query);
        let query = tokens.join(" ");
        let query_bigrams = PackedBigrams::from_normalized(&query);
        Self {
            width: tokens.len(),
            query,
            query_bigrams,
            threshold: config.threshold,
            parallel: config.parallel,
            min_parallel_windows: config.min_parallel_windows,
        }
    }

    /// The normalized query, tokens joined by single spaces.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Window width `N`: the number of query tokens.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Score the window starting at `offset` against the query.
    ///
    /// # Panics
    /// Panics if the window runs past the end of `stream`.
    pub fn score_window(&self, stream: &TokenStream, offset: usize) -> Similarity {
        check_window_in_bounds(offset, self.width, stream.len());
        let window = stream.window_bigrams(offset, self.width);
        let score = packed_similarity(&self.query_bigrams, &window);
        check_similarity_bounded(&score);
        score
    }

    /// All matches in `stream`, in ascending offset order.
    ///
    /// Picks the parallel scan when enabled and the stream has at least
    /// `min_parallel_windows` windows; the result is the same either way.
    pub fn find(&self, stream: &TokenStream) -> Vec<Match> {
        let windows = stream.window_count(self.width);

        #[cfg(feature = "parallel")]
        let matches = if self.parallel && windows >= self.min_parallel_windows {
            self.find_parallel(stream)
        } else {
            self.find_sequential(stream)
        };

        #[cfg(not(feature = "parallel"))]
        let matches = self.find_sequential(stream);

        debug!(
            query = %self.query,
            width = self.width,
            tokens = stream.len(),
            windows,
            matches = matches.len(),
            threshold = %self.threshold,
            "scanned corpus"
        );
        matches
    }

    /// Single-threaded scan over every window.
    pub fn find_sequential(&self, stream: &TokenStream) -> Vec<Match> {
        let matches = self.find_in(stream, 0..stream.window_count(self.width));
        check_matches_ordered(&matches);
        matches
    }

    /// Matches among the window offsets in `offsets`, in order.
    ///
    /// `offsets` must lie within `0..stream.window_count(self.width())`.
    pub fn find_in(&self, stream: &TokenStream, offsets: Range<usize>) -> Vec<Match> {
        offsets
            .filter_map(|offset| {
                let score = self.score_window(stream, offset);
                score.meets(&self.threshold).then(|| Match {
                    offset,
                    text: stream.window_text(offset, self.width).to_owned(),
                    score,
                })
            })
            .collect()
    }
}

/// Matching window texts of `corpus_text` for `query`, in document order.
///
/// ```
/// use bigrep::{search, Threshold};
///
/// let hits = search("machine learning", "Deep machine learning systems are hard", Threshold::DEFAULT);
/// assert_eq!(hits, vec!["machine learning"]);
/// ```
pub fn search(query: &str, corpus_text: &str, threshold: Threshold) -> Vec<String> {
    let stream = TokenStream::from_text(corpus_text);
    into_texts(WindowedMatcher::new(query, threshold).find(&stream))
}

/// Like [`search`], over a corpus given as lines.
pub fn search_lines<I, S>(query: &str, lines: I, threshold: Threshold) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stream = TokenStream::from_lines(lines);
    into_texts(WindowedMatcher::new(query, threshold).find(&stream))
}

fn into_texts(matches: Vec<Match>) -> Vec<String> {
    matches.into_iter().map(|m| m.text).collect()
}
