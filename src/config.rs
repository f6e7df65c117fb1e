// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match configuration.
//!
//! Loaded from a small JSON file; every field is optional and command-line
//! flags override whatever the file says.
//!
//! ```json
//! {
//!   "threshold": "0.35",
//!   "parallel": true,
//!   "minParallelWindows": 4096
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::Threshold;

/// Below this many windows the parallel scan costs more than it saves.
pub const DEFAULT_MIN_PARALLEL_WINDOWS: usize = 4096;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Inclusive similarity lower bound.
    pub threshold: Threshold,
    /// Score windows on the rayon pool (ignored without the `parallel` feature).
    pub parallel: bool,
    pub min_parallel_windows: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            parallel: cfg!(feature = "parallel"),
            min_parallel_windows: DEFAULT_MIN_PARALLEL_WINDOWS,
        }
    }
}

impl MatchConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
