//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use bigrep::{normalized_tokens, similarity, Similarity, Threshold};

// ============================================================================
// FIXTURES
// ============================================================================

/// The corpus every scenario test starts from.
pub const ML_CORPUS: &str = "Deep machine learning systems are hard";

/// Parse a threshold literal, panicking on bad test input.
pub fn threshold(literal: &str) -> Threshold {
    literal
        .parse()
        .unwrap_or_else(|err| panic!("bad threshold {:?}: {}", literal, err))
}

/// Write `files` (name, content) into `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("write fixture file");
    }
}

// ============================================================================
// ORACLE
// ============================================================================

/// Straight-line reference scan: join tokens, score with the set-based
/// similarity, compare as exact fractions.
///
/// Returns `(offset, window text, score)` for every qualifying window.
pub fn oracle_search(
    query: &str,
    lines: &[String],
    threshold: Threshold,
) -> Vec<(usize, String, Similarity)> {
    let query_tokens = normalized_tokens(query);
    let width = query_tokens.len();
    let tokens: Vec<String> = lines
        .iter()
        .flat_map(|line| normalized_tokens(line))
        .collect();
    if width == 0 || tokens.len() < width {
        return Vec::new();
    }

    let query = query_tokens.join(" ");
    let mut hits = Vec::new();
    for offset in 0..=tokens.len() - width {
        let window = tokens[offset..offset + width].join(" ");
        let score = similarity(&query, &window);
        if score.meets(&threshold) {
            hits.push((offset, window, score));
        }
    }
    hits
}
