// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types produced by the live document search.
//!
//! # Invariants
//!
//! - **ResultSet**: `results.len() <= max_results` and
//!   `more_results == (total_matches > results.len())`.
//!   Status `Inactive` implies `results.is_empty() && total_matches == 0`.
//!
//! - **SearchResult**: `raw_text` contains the query case-insensitively and
//!   `snippet` is a window of `raw_text` around the first occurrence.
//!
//! Results are recomputed wholesale on every query change; nothing here is
//! ever patched incrementally.

use serde::Serialize;

/// What a `ResultSet` represents.
///
/// `Inactive` and `NoMatches` both have zero results but need different UI:
/// one says "keep typing", the other says "nothing found for ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStatus {
    /// Query too short after normalization; no scan was performed.
    Inactive,
    /// Scan ran and found nothing.
    NoMatches,
    /// Scan found at least one result.
    Matches,
}

/// One live search hit.
///
/// `node` is a handle into a tree this crate does not own. It is only valid
/// for as long as the caller's tree keeps that element alive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<N> {
    /// Trimmed text content of the element.
    pub raw_text: String,
    pub node: N,
    /// Context window around the first match, with `...` where truncated.
    pub snippet: String,
}

/// Output of one live search evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet<N> {
    /// The normalized query this set was computed for.
    pub query: String,
    pub status: SearchStatus,
    /// Capped results in document scan order.
    pub results: Vec<SearchResult<N>>,
    /// Deduplicated match count before the cap.
    pub total_matches: usize,
    /// True when matches were dropped by the cap.
    pub more_results: bool,
}

impl<N> ResultSet<N> {
    /// Empty set for a query too short to search.
    pub fn inactive(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            status: SearchStatus::Inactive,
            results: Vec::new(),
            total_matches: 0,
            more_results: false,
        }
    }

    /// Whether the results panel should be visible at all.
    pub fn is_active(&self) -> bool {
        self.status != SearchStatus::Inactive
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult<N>> {
        self.results.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult<N>> {
        self.results.iter()
    }
}

impl<N> Default for ResultSet<N> {
    fn default() -> Self {
        Self::inactive(String::new())
    }
}
