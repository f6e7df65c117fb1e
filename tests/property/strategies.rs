//! Input generators shared by the property suites.

use proptest::prelude::*;

/// Short lowercase words, the common case.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

/// Raw text with punctuation, case and non-ASCII mixed in.
pub fn raw_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,;:!?'é-]{0,40}").unwrap()
}

/// A phrase of one to four words.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

/// A handful of lines built from a small vocabulary, so matches happen.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    let vocabulary = prop::sample::select(vec![
        "machine", "learning", "deep", "systems", "are", "hard", "ma", "chine", "learn", "ing",
    ]);
    let line = prop::collection::vec(vocabulary, 0..8).prop_map(|words| words.join(" "));
    prop::collection::vec(line, 0..12)
}

/// Thresholds as `n/d` with `n <= d`.
pub fn threshold_strategy() -> impl Strategy<Value = bigrep::Threshold> {
    (1u128..=40)
        .prop_flat_map(|den| (0..=den, Just(den)))
        .prop_map(|(num, den)| bigrep::Threshold::from_ratio(num, den).unwrap())
}
