// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the windowed scan.
//!
//! Arbitrary queries, corpora and thresholds. The scan must not panic, must
//! report offsets in strictly increasing order inside the stream, and the
//! parallel path must agree with the sequential one.

#![no_main]

use arbitrary::Arbitrary;
use bigrep::{MatchConfig, Threshold, TokenStream, WindowedMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    lines: Vec<&'a str>,
    numerator: u8,
    denominator: u8,
}

fuzz_target!(|input: Input| {
    let denominator = u128::from(input.denominator.max(1));
    let numerator = u128::from(input.numerator) % (denominator + 1);
    let Ok(threshold) = Threshold::from_ratio(numerator, denominator) else {
        return;
    };

    let stream = TokenStream::from_lines(input.lines.iter().take(64));
    let matcher = WindowedMatcher::from_config(
        input.query,
        &MatchConfig {
            threshold,
            parallel: true,
            min_parallel_windows: 0,
        },
    );

    let matches = matcher.find_sequential(&stream);

    for pair in matches.windows(2) {
        assert!(pair[0].offset < pair[1].offset, "offsets out of order");
    }
    for hit in &matches {
        assert!(hit.offset + matcher.width() <= stream.len(), "window past end");
        assert!(hit.score.meets(&threshold), "kept a window below threshold");
    }

    assert_eq!(matcher.find_parallel(&stream), matches, "parallel scan diverged");
});
