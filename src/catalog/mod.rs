// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, filter and paginate small fixed catalogs.
//!
//! The resource pages (reports, affiliations, tenders) each own a handful of
//! records fixed at page load. Searching them is a case-insensitive substring
//! test against one or more named fields; the filtered list is then cut into
//! fixed-size pages. The free functions here are pure; `CatalogPaginator`
//! wraps them with the query/page state and the reset-to-page-1 rule.

pub mod paginator;
pub mod window;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::contains_ignore_case;

pub use paginator::{CatalogPaginator, CatalogView};
pub use window::{compute_page_window, PageToken, PageWindow, MAX_WINDOW_TOKENS};

/// A catalog entry with a stable identity and named text fields.
pub trait CatalogRecord {
    /// Stable identity used for selection and display (an id or title).
    fn identity(&self) -> &str;

    /// Value of a named text field, `None` when the record lacks it.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Generic record: an id plus string fields, as loaded from JSON.
///
/// ```json
/// { "id": "ICA-2019-045", "title": "International Copper Association", "type": "Industry Association" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl CatalogRecord for Record {
    fn identity(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return Some(&self.id);
        }
        self.fields.get(name).map(String::as_str)
    }
}

/// Parse a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of records from disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_records(&json)
}

/// True when any of `fields` contains `query`, ignoring case.
/// An empty query matches every record.
pub fn record_matches<R, F>(record: &R, query: &str, fields: &[F]) -> bool
where
    R: CatalogRecord + ?Sized,
    F: AsRef<str>,
{
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|name| {
        record
            .field(name.as_ref())
            .is_some_and(|value| contains_ignore_case(value, query))
    })
}

/// Records matching `query` on any of `fields`, in original order.
pub fn filter<'a, R, F>(catalog: &'a [R], query: &str, fields: &[F]) -> Vec<&'a R>
where
    R: CatalogRecord,
    F: AsRef<str>,
{
    catalog
        .iter()
        .filter(|record| record_matches(*record, query, fields))
        .collect()
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// The items on 1-based `current_page`.
///
/// Does not clamp: a page past the end (or page 0) yields an empty slice.
/// Callers reset to page 1 when the filtered set changes.
pub fn paginate<T>(filtered: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    if current_page == 0 || items_per_page == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(items_per_page);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(filtered.len());
    &filtered[start..end]
}
