// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bigrep::source::{query_url, SearchKind};
use bigrep::{
    normalized_tokens, read_corpus, similarity, MatchConfig, Threshold, TokenStream,
    WindowedMatcher,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Match {
            query,
            corpus,
            threshold,
            config,
            sequential,
            json,
            scores,
        } => run_match(MatchArgs {
            query,
            corpus,
            threshold,
            config,
            sequential,
            json,
            scores,
        }),
        Commands::Score { a, b } => {
            run_score(&a, &b);
            Ok(())
        }
        Commands::Url { kind, query } => {
            println!("{}", query_url(SearchKind::from(kind), &query));
            Ok(())
        }
    };

    if let Err(err) = result {
        display::print_error(&err);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct MatchArgs {
    query: String,
    corpus: PathBuf,
    threshold: Option<Threshold>,
    config: Option<PathBuf>,
    sequential: bool,
    json: bool,
    scores: bool,
}

fn run_match(args: MatchArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if args.sequential {
        config.parallel = false;
    }

    let lines = load_corpus(&args.corpus)
        .with_context(|| format!("cannot load corpus {}", args.corpus.display()))?;
    let stream = TokenStream::from_lines(&lines);
    let matcher = WindowedMatcher::from_config(&args.query, &config);
    let matches = matcher.find(&stream);

    // Everything that can fail has run; only now write to stdout.
    if args.json {
        for m in &matches {
            println!("{}", serde_json::to_string(m)?);
        }
    } else {
        display::print_matches(&matches, &config.threshold, args.scores);
    }
    display::print_summary(
        matches.len(),
        stream.window_count(matcher.width()),
        &config.threshold,
    );
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    use indicatif::{ProgressBar, ProgressStyle};

    if !path.is_dir() || !atty::is(atty::Stream::Stderr) {
        return Ok(read_corpus(path)?);
    }

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )
        .context("invalid progress template")?
        .progress_chars("━━╸"),
    );
    progress.set_prefix("Loading");
    progress.set_message("files...");
    let lines = bigrep::corpus::read_corpus_with_progress(path, &progress);
    match &lines {
        Ok(lines) => progress.finish_with_message(format!("{} lines", lines.len())),
        Err(_) => progress.abandon(),
    }
    Ok(lines?)
}

#[cfg(not(feature = "parallel"))]
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    Ok(read_corpus(path)?)
}

/// Both sides normalized the way a query and a window would be.
fn run_score(a: &str, b: &str) {
    let a = normalized_tokens(a).join(" ");
    let b = normalized_tokens(b).join(" ");
    println!("{}", similarity(&a, &b));
}
