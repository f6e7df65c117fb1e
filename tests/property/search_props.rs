//! Properties of the windowed scan.

use super::common::oracle_search;
use super::strategies::*;
use bigrep::{normalized_tokens, MatchConfig, Threshold, TokenStream, WindowedMatcher};
use proptest::prelude::*;

fn matcher(query: &str, threshold: Threshold, parallel: bool) -> WindowedMatcher {
    WindowedMatcher::from_config(
        query,
        &MatchConfig {
            threshold,
            parallel,
            min_parallel_windows: 0,
        },
    )
}

proptest! {
    /// Offsets strictly increase, stay in range, and every hit meets the bar.
    #[test]
    fn prop_matches_ordered_and_valid(
        query in query_strategy(),
        corpus in corpus_strategy(),
        threshold in threshold_strategy(),
    ) {
        let stream = TokenStream::from_lines(&corpus);
        let m = matcher(&query, threshold, false);
        let matches = m.find(&stream);
        prop_assert!(matches.len() <= stream.window_count(m.width()));
        for pair in matches.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
        for hit in &matches {
            prop_assert!(hit.offset + m.width() <= stream.len());
            prop_assert!(hit.score.meets(&threshold));
            prop_assert_eq!(hit.text.split(' ').count(), m.width());
        }
    }

    /// The bitset scan agrees with a straight-line reference scan.
    #[test]
    fn prop_matches_reference(
        query in query_strategy(),
        corpus in corpus_strategy(),
        threshold in threshold_strategy(),
    ) {
        let stream = TokenStream::from_lines(&corpus);
        let actual: Vec<_> = matcher(&query, threshold, false)
            .find(&stream)
            .into_iter()
            .map(|m| (m.offset, m.text, m.score))
            .collect();
        prop_assert_eq!(actual, oracle_search(&query, &corpus, threshold));
    }

    /// Threshold 0 keeps every window.
    #[test]
    fn prop_zero_threshold_keeps_all(query in query_strategy(), corpus in corpus_strategy()) {
        let stream = TokenStream::from_lines(&corpus);
        let m = matcher(&query, Threshold::ZERO, false);
        prop_assert_eq!(m.find(&stream).len(), stream.window_count(m.width()));
    }

    /// Raising the threshold never adds matches.
    #[test]
    fn prop_threshold_monotone(
        query in query_strategy(),
        corpus in corpus_strategy(),
        low in threshold_strategy(),
        high in threshold_strategy(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let stream = TokenStream::from_lines(&corpus);
        let loose: Vec<usize> = matcher(&query, low, false).find(&stream).iter().map(|m| m.offset).collect();
        let strict: Vec<usize> = matcher(&query, high, false).find(&stream).iter().map(|m| m.offset).collect();
        prop_assert!(strict.iter().all(|offset| loose.contains(offset)));
    }

    /// A normalized corpus that is the query itself matches once, at 0, exactly.
    #[test]
    fn prop_self_search_single_exact_match(query in query_strategy()) {
        let normalized = normalized_tokens(&query).join(" ");
        let stream = TokenStream::from_text(&normalized);
        let matches = matcher(&query, Threshold::ONE, false).find(&stream);
        if bigrams_present(&normalized) {
            prop_assert_eq!(matches.len(), 1);
            prop_assert_eq!(matches[0].offset, 0);
            prop_assert_eq!(&matches[0].text, &normalized);
            prop_assert!(matches[0].score.is_exact());
        } else {
            prop_assert!(matches.is_empty());
        }
    }

    /// Chunked parallel scan returns the sequential answer.
    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_equals_sequential(
        query in query_strategy(),
        corpus in corpus_strategy(),
        threshold in threshold_strategy(),
    ) {
        let stream = TokenStream::from_lines(&corpus);
        let m = matcher(&query, threshold, true);
        prop_assert_eq!(m.find_parallel(&stream), m.find_sequential(&stream));
    }
}

fn bigrams_present(text: &str) -> bool {
    !bigrep::bigrams(text).is_empty()
}
