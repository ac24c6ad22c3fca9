// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and page state for one catalog.
//!
//! **Invariant**: `current_page ∈ [1, total_pages]`, or `1` when there are no
//! pages. Every query change resets to page 1 before the next filter/paginate
//! cycle, which is what keeps a stale page index from pointing past the end of
//! a freshly shrunk result set. Page requests outside the range are rejected
//! rather than clamped.

use serde::Serialize;
use tracing::debug;

use super::window::{compute_page_window, PageWindow};
use super::{paginate, record_matches, total_pages, CatalogRecord};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};

/// Everything a pagination UI renders for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView<'a, R> {
    /// Size of the unfiltered catalog ("Showing X of **Y**").
    pub total_count: usize,
    /// Records matching the query ("Showing **X** of Y").
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Records on the current page, in catalog order.
    pub records: Vec<&'a R>,
    pub window: PageWindow,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<R> CatalogView<'_, R> {
    /// The filter emptied the catalog; the UI should offer a reset.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Stateful filter + paginate over a fixed catalog.
#[derive(Debug, Clone)]
pub struct CatalogPaginator<R> {
    catalog: Vec<R>,
    fields: Vec<String>,
    items_per_page: usize,
    query: String,
    current_page: usize,
    /// Indices into `catalog` of the records matching `query`.
    filtered: Vec<usize>,
}

impl<R: CatalogRecord> CatalogPaginator<R> {
    pub fn new(catalog: Vec<R>, config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let filtered = (0..catalog.len()).collect();
        Ok(Self {
            catalog,
            fields: config.fields.clone(),
            items_per_page: config.items_per_page,
            query: String::new(),
            current_page: 1,
            filtered,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.items_per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Replace the query, refilter, and go back to page 1.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.current_page = 1;
        self.filtered = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, record)| record_matches(*record, &self.query, &self.fields))
            .map(|(idx, _)| idx)
            .collect();
        debug!(
            query = %self.query,
            filtered = self.filtered.len(),
            total = self.catalog.len(),
            "catalog query changed"
        );
    }

    /// Reset affordance: empty query, full catalog, page 1.
    pub fn clear(&mut self) {
        self.set_query("");
    }

    /// Jump to a 1-based page.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let total = self.total_pages();
        if page == 0 || (page > total && page != 1) {
            return Err(Error::PageOutOfRange {
                page,
                total_pages: total,
            });
        }
        self.current_page = page;
        debug!(page, total, "catalog page changed");
        Ok(())
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page if possible.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&R> {
        paginate(&self.filtered, self.current_page, self.items_per_page)
            .iter()
            .map(|&idx| &self.catalog[idx])
            .collect()
    }

    pub fn page_window(&self) -> PageWindow {
        compute_page_window(self.current_page, self.total_pages())
    }

    pub fn view(&self) -> CatalogView<'_, R> {
        CatalogView {
            total_count: self.total_count(),
            filtered_count: self.filtered_count(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            records: self.page_records(),
            window: self.page_window(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}
