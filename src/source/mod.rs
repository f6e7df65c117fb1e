// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bibliographic search glue: endpoints, fetcher contract, document cache.
//!
//! The matching engine never talks to the network. This module pins down the
//! narrow contracts around it: which DBLP endpoint a search kind queries, how
//! a query becomes a URL, what a fetcher promises, and how fetched documents
//! are cached. The transport and the document format are the caller's: plug an
//! HTTP client and an XML parser in behind [`Fetch`].

mod cache;
mod records;

pub use cache::*;
pub use records::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchKindError;

/// What a DBLP query searches for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Author,
    Venue,
    Publication,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [
        SearchKind::Author,
        SearchKind::Venue,
        SearchKind::Publication,
    ];

    /// Search API endpoint, ready for the encoded query to be appended.
    pub fn endpoint(self) -> &'static str {
        match self {
            SearchKind::Author => "https://dblp.org/search/author/api?format=xml&c=0&h=40&q=",
            SearchKind::Venue => "https://dblp.org/search/venue/api?format=xml&c=0&h=40&q=",
            SearchKind::Publication => "https://dblp.org/search/publ/api?format=xml&c=0&h=40&q=",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Author => "author",
            SearchKind::Venue => "venue",
            SearchKind::Publication => "publication",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = SearchKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(SearchKind::Author),
            "venue" => Ok(SearchKind::Venue),
            "publication" => Ok(SearchKind::Publication),
            other => Err(SearchKindError(other.to_string())),
        }
    }
}

/// Request URL for `query` against the endpoint of `kind`.
///
/// ```
/// use bigrep::source::{query_url, SearchKind};
///
/// assert_eq!(
///     query_url(SearchKind::Venue, "neural nets & AI"),
///     "https://dblp.org/search/venue/api?format=xml&c=0&h=40&q=neural+nets+%26+AI"
/// );
/// ```
pub fn query_url(kind: SearchKind, query: &str) -> String {
    let mut url = String::from(kind.endpoint());
    url.push_str(&form_urlencode(query));
    url
}

/// Machine-readable record page for a person URL returned in search hits.
pub fn record_url(person_url: &str) -> String {
    format!("{}.xml", person_url.trim())
}

/// `application/x-www-form-urlencoded` encoding of `value`.
///
/// Space becomes `+`; `[A-Za-z0-9]` and `.-*_` pass through; every other
/// UTF-8 byte becomes `%XX` with uppercase hex.
pub fn form_urlencode(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' | b'*' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    out
}
