// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate phrase search by character-bigram Jaccard similarity.
//!
//! A query of `N` words is slid across a corpus one token at a time. Every
//! `N`-token window is scored against the query by the Jaccard similarity of
//! their character-bigram sets, and windows at or above a threshold are
//! returned in corpus order. Scores and thresholds are exact fractions, so
//! `0.4` means two fifths and nothing else.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   corpus    │────▶│ search::     │────▶│  search::   │
//! │ (read_corpus│     │ TokenStream  │     │ Windowed-   │
//! │   lines)    │     │ (spans, bits)│     │  Matcher    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  text (normalize, bigrams)   scoring (Similarity,   │
//! │                               Threshold)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `source` sits beside the engine: endpoints, URL encoding, a fetcher
//! contract and an explicit document cache for the bibliographic lookups
//! that feed it. Nothing in this crate performs network I/O.
//!
//! # Usage
//!
//! ```
//! use bigrep::{search, Threshold};
//!
//! let threshold: Threshold = "0.5".parse().unwrap();
//! let hits = search("machine learning", "Deep machine learning systems are hard", threshold);
//! assert_eq!(hits, vec!["machine learning"]);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod scoring;
pub mod search;
pub mod source;
pub mod text;

// Re-exports for public API
pub use config::MatchConfig;
pub use corpus::read_corpus;
pub use error::{
    ConfigError, CorpusError, FetchError, SearchKindError, SimilarityError, ThresholdError,
};
pub use scoring::{packed_similarity, similarity, try_similarity, Similarity, Threshold};
pub use search::{search, search_lines, Match, TokenStream, WindowedMatcher};
pub use text::{bigrams, normalize, normalized_tokens, tokenize, Bigram, BigramSet, PackedBigrams};
