// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-line summaries of search hits, as the report prints them.
//!
//! Extracting these fields from a response document is the parser's job; these
//! types only fix the derived statistics and the line format.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::SearchKind;

/// An author hit with publication and distinct co-author counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub name: String,
    pub publications: usize,
    pub coauthors: usize,
}

impl AuthorSummary {
    /// Co-authors are counted once per distinct trimmed, non-empty name.
    pub fn new<'a, I>(name: &str, publications: usize, coauthors: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: HashSet<&str> = coauthors
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        Self {
            name: name.trim().to_string(),
            publications,
            coauthors: distinct.len(),
        }
    }
}

impl fmt::Display for AuthorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} publications with {} co-authors.",
            self.name, self.publications, self.coauthors
        )
    }
}

/// A publication hit with its author count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicationSummary {
    pub title: String,
    pub authors: usize,
}

impl PublicationSummary {
    pub fn new(title: &str, authors: usize) -> Self {
        Self {
            title: title.trim().to_string(),
            authors,
        }
    }
}

impl fmt::Display for PublicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (number of authors: {})", self.title, self.authors)
    }
}

/// A venue hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub name: String,
}

impl VenueSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

impl fmt::Display for VenueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Any summary line, tagged by the kind of search that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchRecord {
    Author(AuthorSummary),
    Venue(VenueSummary),
    Publication(PublicationSummary),
}

impl SearchRecord {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchRecord::Author(_) => SearchKind::Author,
            SearchRecord::Venue(_) => SearchKind::Venue,
            SearchRecord::Publication(_) => SearchKind::Publication,
        }
    }
}

impl fmt::Display for SearchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchRecord::Author(author) => fmt::Display::fmt(author, f),
            SearchRecord::Venue(venue) => fmt::Display::fmt(venue, f),
            SearchRecord::Publication(publication) => fmt::Display::fmt(publication, f),
        }
    }
}
