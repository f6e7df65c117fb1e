// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fetcher contract and the URL-keyed document cache.
//!
//! The cache is an ordinary value: construct one per process (or per session),
//! hand it to whatever fetches, `clear` it when you want fresh data. Nothing
//! global. Documents are stored behind `Arc` so a hit is a refcount bump and
//! repeated lookups of one URL hand back the very same document.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::FetchError;

/// Something that turns a URL into a parsed document.
pub trait Fetch {
    type Document;

    fn fetch(&self, url: &str) -> Result<Self::Document, FetchError>;
}

/// Parsed documents keyed by exact URL string.
#[derive(Debug)]
pub struct DocumentCache<D> {
    entries: RwLock<HashMap<String, Arc<D>>>,
}

impl<D> Default for DocumentCache<D> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<D> DocumentCache<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Arc<D>> {
        self.entries.read().get(url).cloned()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.read().contains_key(url)
    }

    /// Store `document` under `url`. An existing entry wins, so concurrent
    /// fetches of one URL still agree on a single document.
    pub fn insert(&self, url: &str, document: D) -> Arc<D> {
        let mut entries = self.entries.write();
        Arc::clone(
            entries
                .entry(url.to_string())
                .or_insert_with(|| Arc::new(document)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached document.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// A fetcher in front of a cache: each URL is fetched at most once while
/// it stays cached. Errors pass through and are not cached.
pub struct CachedFetcher<F: Fetch> {
    fetcher: F,
    cache: DocumentCache<F::Document>,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: DocumentCache::new(),
        }
    }

    pub fn get(&self, url: &str) -> Result<Arc<F::Document>, FetchError> {
        if let Some(document) = self.cache.get(url) {
            debug!(url, "document cache hit");
            return Ok(document);
        }
        debug!(url, "document cache miss");
        let document = self.fetcher.fetch(url)?;
        Ok(self.cache.insert(url, document))
    }

    pub fn cache(&self) -> &DocumentCache<F::Document> {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
