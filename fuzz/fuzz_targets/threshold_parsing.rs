// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for threshold literals.
//!
//! Parsing arbitrary text must never panic or overflow. Anything that parses
//! lies in [0, 1] and survives a print/parse round trip unchanged.

#![no_main]

use bigrep::Threshold;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(threshold) = text.parse::<Threshold>() else {
        return;
    };

    assert!(threshold.numerator() <= threshold.denominator());
    assert!(Threshold::ZERO <= threshold && threshold <= Threshold::ONE);

    let printed = threshold.to_string();
    let reparsed: Threshold = printed.parse().expect("printed threshold must parse");
    assert_eq!(reparsed, threshold, "round trip changed {:?}", text);
});
