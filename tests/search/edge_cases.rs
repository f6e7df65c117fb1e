//! Empty inputs, short corpora, and text with nothing to tokenize.

use bigrep::{search, search_lines, Threshold, TokenStream, WindowedMatcher};

#[test]
fn test_empty_corpus() {
    assert!(search("machine learning", "", Threshold::ZERO).is_empty());
    assert!(search_lines("machine learning", Vec::<String>::new(), Threshold::ZERO).is_empty());
}

#[test]
fn test_corpus_of_punctuation() {
    assert!(search("machine learning", "... --- !!!", Threshold::ZERO).is_empty());
}

#[test]
fn test_empty_query() {
    assert!(search("", "machine learning", Threshold::ZERO).is_empty());
    assert!(search("   \t", "machine learning", Threshold::ZERO).is_empty());
    assert!(search("¿¡", "machine learning", Threshold::ZERO).is_empty());
}

#[test]
fn test_corpus_shorter_than_query() {
    assert!(search("a b c", "a b", Threshold::ZERO).is_empty());
}

#[test]
fn test_corpus_exactly_query_length() {
    let hits = search("machine learning", "Machine Learning", Threshold::ONE);
    assert_eq!(hits, vec!["machine learning"]);
}

#[test]
fn test_non_ascii_letters_split_tokens() {
    // "café" normalizes to "caf ", so "naïve" is two tokens
    let stream = TokenStream::from_text("naïve café");
    let tokens: Vec<&str> = stream.tokens().collect();
    assert_eq!(tokens, vec!["na", "ve", "caf"]);
}

#[test]
fn test_blank_lines_contribute_nothing() {
    let lines = ["", "machine", "   ", "learning", ""];
    assert_eq!(
        search_lines("machine learning", lines, Threshold::ONE),
        vec!["machine learning"]
    );
}

#[test]
fn test_matcher_reusable_across_streams() {
    let matcher = WindowedMatcher::new("machine learning", Threshold::ONE);
    let first = TokenStream::from_text("machine learning");
    let second = TokenStream::from_text("no match here");
    assert_eq!(matcher.find(&first).len(), 1);
    assert!(matcher.find(&second).is_empty());
    assert_eq!(matcher.find(&first).len(), 1);
}
