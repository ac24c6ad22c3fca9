// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side content search for static sites.
//!
//! Two independent features share one text layer:
//!
//! - **Live document search**: as the visitor types, scan the rendered page's
//!   text-bearing elements, keep those containing the query, and return a
//!   capped, deduplicated list of hits with context snippets. Selecting a hit
//!   scrolls to it and briefly tints it.
//! - **Catalog search**: filter a small fixed list of records (reports,
//!   affiliations) by substring on named fields and paginate the result, with
//!   a compact page-number window for the controls.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   util::     │────▶│    text      │────▶│      live        │
//! │  normalize   │     │ (matching,   │     │ (LiveSearch,     │
//! │ (FoldedText) │     │  snippet,    │     │  SearchSession,  │
//! └──────────────┘     │  highlight)  │     │  emphasis)       │
//!                      └──────────────┘     └──────────────────┘
//!                             │                      ▲
//!                             ▼                      │ TextNodeSource
//!                      ┌──────────────┐     ┌──────────────────┐
//!                      │   catalog    │     │ html (native) /  │
//!                      │ (filter,     │     │ runtime::wasm    │
//!                      │  paginator,  │     │ (DOM)            │
//!                      │  window)     │     └──────────────────┘
//!                      └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use scour::{HtmlDocument, LiveSearch, SearchStatus};
//!
//! let page = HtmlDocument::parse(
//!     "<main><p>Our copper smelter has run since 1972.</p></main>",
//! ).unwrap();
//! let results = LiveSearch::default().evaluate("Copper", &page, None);
//!
//! assert_eq!(results.status, SearchStatus::Matches);
//! assert_eq!(results.results[0].snippet, "Our copper smelter has run since 1972.");
//! ```
//!
//! ```
//! use scour::{compute_page_window, CatalogPaginator, CatalogConfig, Record};
//!
//! let reports: Vec<Record> = (1..=8)
//!     .map(|i| Record::new(format!("R-{i}")).with("title", format!("Report {i}")))
//!     .collect();
//! let mut paginator = CatalogPaginator::new(reports, &CatalogConfig::default()).unwrap();
//! assert_eq!(paginator.total_pages(), 2);
//! paginator.set_query("report 8");
//! assert_eq!(paginator.filtered_count(), 1);
//!
//! assert_eq!(compute_page_window(5, 10).to_string(), "1 … 4 5 6 … 10");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod html;
pub mod live;
pub mod runtime;
pub mod testing;
pub mod text;
pub mod types;
pub mod util;

// Re-exports for public API
pub use catalog::{
    compute_page_window, filter, paginate, total_pages, CatalogPaginator, CatalogRecord,
    CatalogView, PageToken, PageWindow, Record, MAX_WINDOW_TOKENS,
};
pub use config::{CatalogConfig, Config, EmphasisConfig, LiveSearchConfig};
pub use error::{Error, Result};
pub use html::{HtmlDocument, NodeId};
pub use live::{
    pulse, ListenerRegistry, LiveSearch, ManualScheduler, PanelState, Scheduler, SearchSession,
    StyleProperty, TextNodeSource,
};
pub use text::{
    contains_ignore_case, extract_snippet, highlight_match, Highlight, SnippetWindow, ELLIPSIS,
};
pub use types::{ResultSet, SearchResult, SearchStatus};
pub use util::normalize::normalize_query;

#[cfg(feature = "wasm")]
pub use runtime::wasm::{ScourCatalog, ScourSearch};
