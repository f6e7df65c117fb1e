// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: turn a file or a directory of text files into lines.
//!
//! A directory is read one level deep. Entries starting with `.` or `_` are
//! skipped (editor droppings, `_SUCCESS` markers from batch jobs), as are
//! subdirectories. Files are read in parallel and concatenated in path order,
//! so the token stream is the same on every run.
//!
//! A read failure is an error, never an empty corpus. An empty directory is
//! `Ok(vec![])`; callers can tell "nothing to search" from "could not look".

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::CorpusError;

/// Lines of the corpus at `path` (a file or a directory of files).
#[cfg(feature = "parallel")]
pub fn read_corpus(path: &Path) -> Result<Vec<String>, CorpusError> {
    read_corpus_with_progress(path, &ProgressBar::hidden())
}

/// Lines of the corpus at `path` (a file or a directory of files).
#[cfg(not(feature = "parallel"))]
pub fn read_corpus(path: &Path) -> Result<Vec<String>, CorpusError> {
    let files = corpus_files(path)?;
    let per_file = files
        .iter()
        .map(|file| read_lines(file))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(concat(path, files.len(), per_file))
}

/// Like [`read_corpus`], advancing `progress` once per file.
#[cfg(feature = "parallel")]
pub fn read_corpus_with_progress(
    path: &Path,
    progress: &ProgressBar,
) -> Result<Vec<String>, CorpusError> {
    let files = corpus_files(path)?;
    progress.set_length(files.len() as u64);

    let per_file = files
        .par_iter()
        .map(|file| {
            let lines = read_lines(file)?;
            progress.inc(1);
            Ok(lines)
        })
        .collect::<Result<Vec<_>, CorpusError>>()?;

    Ok(concat(path, files.len(), per_file))
}

fn concat(path: &Path, file_count: usize, per_file: Vec<Vec<String>>) -> Vec<String> {
    let lines: Vec<String> = per_file.into_iter().flatten().collect();
    info!(
        path = %path.display(),
        files = file_count,
        lines = lines.len(),
        "loaded corpus"
    );
    lines
}

/// The files that make up the corpus at `path`, in the order they are read.
pub fn corpus_files(path: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let metadata = fs::metadata(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_err = |source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let entry_path = entry.path();
        if is_hidden(&entry_path) {
            debug!(path = %entry_path.display(), "skipping hidden entry");
            continue;
        }
        // Follows symlinks, so a link to a directory is skipped too.
        if entry_path.is_dir() {
            warn!(path = %entry_path.display(), "skipping subdirectory in corpus");
            continue;
        }
        files.push(entry_path);
    }
    files.sort();
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.as_encoded_bytes().first().copied())
        .is_some_and(|first| first == b'.' || first == b'_')
}

fn read_lines(path: &Path) -> Result<Vec<String>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_owned).collect())
}
