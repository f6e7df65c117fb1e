//! End-to-end scenarios on small hand-checked corpora.
//!
//! Scores for `ML_CORPUS` against "machine learning" (12 bigrams):
//!
//! | offset | window           | score |
//! |--------|------------------|-------|
//! | 0      | deep machine     | 6/15  |
//! | 1      | machine learning | 12/12 |
//! | 2      | learning systems | 7/18  |
//! | 3      | systems are      | 1/19  |
//! | 4      | are hard         | 1/15  |

use super::common::{threshold, ML_CORPUS};
use bigrep::{search, search_lines, Threshold, TokenStream, WindowedMatcher};

#[test]
fn test_default_threshold_finds_the_phrase() {
    assert_eq!(
        search("machine learning", ML_CORPUS, Threshold::DEFAULT),
        vec!["machine learning"]
    );
}

#[test]
fn test_lower_threshold_admits_neighbor() {
    assert_eq!(
        search("machine learning", ML_CORPUS, threshold("0.4")),
        vec!["deep machine", "machine learning"]
    );
}

#[test]
fn test_scores_match_table() {
    let stream = TokenStream::from_text(ML_CORPUS);
    let matches = WindowedMatcher::new("machine learning", Threshold::ZERO).find(&stream);
    let scores: Vec<(usize, u64, u64)> = matches
        .iter()
        .map(|m| (m.offset, m.score.shared(), m.score.total()))
        .collect();
    assert_eq!(
        scores,
        vec![(0, 6, 15), (1, 12, 12), (2, 7, 18), (3, 1, 19), (4, 1, 15)]
    );
}

#[test]
fn test_query_and_corpus_are_normalized() {
    let hits = search(
        "MACHINE-learning!",
        "Deep, Machine... Learning; systems.",
        Threshold::ONE,
    );
    assert_eq!(hits, vec!["machine learning"]);
}

#[test]
fn test_windows_span_line_breaks() {
    let lines = ["Deep machine", "learning systems", "are hard"];
    assert_eq!(
        search_lines("machine learning", lines, Threshold::ONE),
        vec!["machine learning"]
    );
}

#[test]
fn test_repeated_phrase_reported_each_time() {
    let corpus = "machine learning and machine learning again";
    let stream = TokenStream::from_text(corpus);
    let offsets: Vec<usize> = WindowedMatcher::new("machine learning", Threshold::ONE)
        .find(&stream)
        .iter()
        .map(|m| m.offset)
        .collect();
    assert_eq!(offsets, vec![0, 3]);
}

#[test]
fn test_overlapping_matches_are_kept() {
    let hits = search("ab", "ab ab ab", Threshold::ONE);
    assert_eq!(hits, vec!["ab", "ab", "ab"]);
}

#[test]
fn test_single_token_query() {
    let hits = search("learning", ML_CORPUS, threshold("0.5"));
    assert_eq!(hits, vec!["learning"]);
}
