// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for similarity invariants.
//!
//! Scores are exact fractions in [0, 1], symmetric, and the packed bitset
//! agrees with the hash-set scorer on anything the normalizer can produce.

#![no_main]

use bigrep::{normalize, packed_similarity, similarity, PackedBigrams, Threshold};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (a, b) = input;
    let a = normalize(&a.chars().take(512).collect::<String>());
    let b = normalize(b);

    let ab = similarity(&a, &b);
    let ba = similarity(&b, &a);

    // INVARIANT 1: Bounded
    assert!(ab.shared() <= ab.total(), "shared exceeds total: {}", ab);
    assert!(ab.meets(&Threshold::ZERO), "score below zero: {}", ab);

    // INVARIANT 2: Commutative, exactly
    assert_eq!((ab.shared(), ab.total()), (ba.shared(), ba.total()));

    // INVARIANT 3: Packed and generic agree on normalized text
    let packed = packed_similarity(
        &PackedBigrams::from_normalized(&a),
        &PackedBigrams::from_normalized(&b),
    );
    assert_eq!((packed.shared(), packed.total()), (ab.shared(), ab.total()));

    // INVARIANT 4: Reflexive unless degenerate
    let aa = similarity(&a, &a);
    assert!(aa.is_degenerate() || aa.is_exact(), "self-similarity {}", aa);
});
