//! Threshold boundary behavior: inclusivity, exactness, and the two extremes.

use super::common::{threshold, ML_CORPUS};
use bigrep::{search, similarity, Threshold, TokenStream, WindowedMatcher};

#[test]
fn test_threshold_is_inclusive() {
    // "deep machine" scores exactly 6/15 = 0.4
    let hits = search("machine learning", ML_CORPUS, threshold("2/5"));
    assert_eq!(hits, vec!["deep machine", "machine learning"]);
}

#[test]
fn test_threshold_just_above_score_excludes() {
    let hits = search(
        "machine learning",
        ML_CORPUS,
        threshold("0.4000000000000000000001"),
    );
    assert_eq!(hits, vec!["machine learning"]);
}

#[test]
fn test_decimal_and_fraction_agree() {
    assert_eq!(threshold("0.4"), threshold("2/5"));
    assert_eq!(threshold("0.40"), threshold("4/10"));
    assert_eq!(threshold("4e-1"), threshold("0.4"));
}

#[test]
fn test_zero_returns_every_window() {
    let stream = TokenStream::from_text(ML_CORPUS);
    let matches = WindowedMatcher::new("machine learning", Threshold::ZERO).find(&stream);
    assert_eq!(matches.len(), stream.window_count(2));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_zero_includes_windows_without_bigrams() {
    // Single-character tokens have no bigrams; the score is 0 and 0 >= 0.
    let hits = search("a b", "x y z", Threshold::ZERO);
    assert_eq!(hits, vec!["x y", "y z"]);
    assert!(search("a b", "x y z", threshold("0.01")).is_empty());
}

#[test]
fn test_one_requires_equal_bigram_sets() {
    // Same bigrams, different word order: still a perfect score.
    assert_eq!(search("ab cd", "cd ab", Threshold::ONE), vec!["cd ab"]);
    assert!(similarity("ab cd", "cd ab").is_exact());
}

#[test]
fn test_one_rejects_word_boundary_shift() {
    // "abc de" has {ab, bc, de}; "ab cde" has {ab, cd, de}.
    let score = similarity("abc de", "ab cde");
    assert_eq!((score.shared(), score.total()), (2, 4));
    assert!(search("abc de", "ab cde", Threshold::ONE).is_empty());
}

#[test]
fn test_one_rejects_rotation() {
    let score = similarity("abc", "cab");
    assert_eq!((score.shared(), score.total()), (1, 3));
    assert!(search("abc", "cab", Threshold::ONE).is_empty());
}

#[test]
fn test_invalid_thresholds_are_rejected() {
    for literal in ["", "-0.1", "1.0001", "abc", "3/2", "1/0", "0.5.5"] {
        assert!(
            literal.parse::<Threshold>().is_err(),
            "{:?} should not parse",
            literal
        );
    }
}

#[test]
fn test_one_point_zero_is_one() {
    assert_eq!(threshold("1.0"), Threshold::ONE);
    assert_eq!(threshold("0"), Threshold::ZERO);
}
