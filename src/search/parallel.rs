// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chunked parallel scan.
//!
//! Window scores depend only on the query and the immutable token stream, so
//! the offset range splits cleanly. We cut it into contiguous chunks, a few per
//! worker so a slow chunk doesn't leave the pool idle, score each chunk with
//! the sequential kernel, and concatenate. Rayon's indexed `collect` keeps the
//! chunk order, which keeps the offset order.

use std::ops::Range;

use rayon::prelude::*;

use crate::contracts::check_matches_ordered;

use super::{Match, TokenStream, WindowedMatcher};

/// Chunks handed to each worker thread.
const CHUNKS_PER_THREAD: usize = 4;

/// Split `0..windows` into at most `chunks` contiguous, non-empty ranges.
pub(crate) fn chunk_ranges(windows: usize, chunks: usize) -> Vec<Range<usize>> {
    if windows == 0 {
        return Vec::new();
    }
    let size = windows.div_ceil(chunks.max(1));
    (0..windows)
        .step_by(size)
        .map(|start| start..(start + size).min(windows))
        .collect()
}

impl WindowedMatcher {
    /// Score windows on the rayon pool. Same output as `find_sequential`.
    pub fn find_parallel(&self, stream: &TokenStream) -> Vec<Match> {
        let windows = stream.window_count(self.width);
        let chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;

        let matches: Vec<Match> = chunk_ranges(windows, chunks)
            .into_par_iter()
            .map(|range| self.find_in(stream, range))
            .collect::<Vec<Vec<Match>>>()
            .into_iter()
            .flatten()
            .collect();

        check_matches_ordered(&matches);
        matches
    }
}
