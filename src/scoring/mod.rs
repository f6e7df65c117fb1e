// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: bigram Jaccard similarity and the threshold it is judged against.
//!
//! Both sides are exact rationals. A score is `shared / total` with integer
//! bigram counts; a threshold is a reduced fraction parsed from its decimal
//! literal. Deciding `score >= threshold` never touches floating point, so a
//! window scoring exactly `2/5` always matches a threshold of `0.4`.

mod core;
mod threshold;

pub use self::core::*;
pub use threshold::*;
