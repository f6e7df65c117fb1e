// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bigrep command-line interface.
//!
//! Three subcommands: `match` to scan a corpus for a phrase, `score` to show
//! the similarity of two strings, and `url` to print the bibliographic search
//! URL for a query. Flags given here override the JSON config file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use bigrep::source::SearchKind;
use bigrep::Threshold;

#[derive(Parser)]
#[command(
    name = "bigrep",
    about = "Approximate phrase search by character-bigram similarity",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find corpus windows similar to a phrase
    Match {
        /// Phrase to look for
        query: String,

        /// Corpus file, or a directory of corpus files
        #[arg(short, long)]
        corpus: PathBuf,

        /// Inclusive similarity bound, as a decimal ("0.4") or fraction ("2/5")
        ///
        /// Overrides the config file. Defaults to 0.5.
        #[arg(short, long)]
        threshold: Option<Threshold>,

        /// JSON match configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Score windows on one thread
        #[arg(long)]
        sequential: bool,

        /// Emit matches as JSON lines
        #[arg(long)]
        json: bool,

        /// Show offset and score next to each match
        #[arg(long)]
        scores: bool,
    },

    /// Print the bigram similarity of two strings
    Score {
        a: String,
        b: String,
    },

    /// Print the search URL for a query
    Url {
        /// What to search for
        #[arg(short, long, value_enum, default_value = "author")]
        kind: KindArg,

        query: String,
    },
}

/// Clap-facing mirror of [`SearchKind`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Author,
    Venue,
    Publication,
}

impl From<KindArg> for SearchKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Author => SearchKind::Author,
            KindArg::Venue => SearchKind::Venue,
            KindArg::Publication => SearchKind::Publication,
        }
    }
}
