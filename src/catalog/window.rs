// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compact page-index windows for pagination controls.
//!
//! Up to seven pages are listed in full. Past that, the window always shows
//! the first and last page and the neighborhood of the current one, with an
//! ellipsis standing in for each collapsed run:
//!
//! ```text
//! current ≤ 3          1 2 3 4 … N
//! current ≥ N-2        1 … N-3 N-2 N-1 N
//! otherwise            1 … c-1 c c+1 … N
//! ```
//!
//! **Invariants**: at most 7 tokens; first, last and current page present;
//! no two adjacent ellipses; page numbers strictly increasing.

use std::fmt;

use serde::Serialize;

/// Largest page count shown without collapsing.
pub const MAX_WINDOW_TOKENS: usize = 7;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "page")]
pub enum PageToken {
    /// A clickable 1-based page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

impl PageToken {
    pub fn page(self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Ordered page tokens for one `(current, total)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageWindow(Vec<PageToken>);

impl PageWindow {
    pub fn tokens(&self) -> &[PageToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Page numbers in the window, ellipses skipped.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|t| t.page())
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|p| p == page)
    }

    pub fn into_tokens(self) -> Vec<PageToken> {
        self.0
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Compute the page window for `current_page` of `total_pages`.
///
/// Zero pages still renders as `[1]`: an empty list shows a single page.
pub fn compute_page_window(current_page: usize, total_pages: usize) -> PageWindow {
    use PageToken::{Ellipsis, Page};

    if total_pages <= MAX_WINDOW_TOKENS {
        return PageWindow((1..=total_pages.max(1)).map(Page).collect());
    }

    let last = total_pages;
    let tokens = if current_page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(last)]
    } else if current_page >= last - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(last - 3),
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(last),
        ]
    };
    PageWindow(tokens)
}
