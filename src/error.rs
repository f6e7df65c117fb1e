// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the library surface.
//!
//! The matching engine itself is total: an empty query or an empty corpus is a
//! valid (useless) input and produces an empty result. Errors only come from
//! parsing user-supplied values and from the collaborators that produce text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A threshold literal that could not be turned into an exact ratio in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("threshold is empty")]
    Empty,

    #[error("invalid threshold `{0}`: expected a decimal like 0.75 or a fraction like 3/4")]
    Invalid(String),

    #[error("threshold `{0}` carries more than 30 fractional digits")]
    TooPrecise(String),

    #[error("threshold `{0}` is outside [0, 1]")]
    OutOfRange(String),
}

/// Jaccard similarity is undefined when the union of both bigram sets is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("similarity is undefined: neither input contains a bigram")]
    Degenerate,
}

/// Failure to materialize corpus text.
///
/// Kept distinct from an empty corpus: a directory with no files is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure reported by a document fetcher. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("response from {url} is not a valid document: {message}")]
    Parse { url: String, message: String },
}

/// Unknown search kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search type `{0}`: expected author, venue or publication")]
pub struct SearchKindError(pub String);

/// Failure to load a match configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
