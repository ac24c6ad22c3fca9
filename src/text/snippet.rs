// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context snippets around the first match.
//!
//! A snippet is the match plus a bounded amount of text on each side, with
//! `...` markers on whichever ends were cut. The window is asymmetric by
//! default (30 before, 50 after) because readers scan forward from the match.

use serde::{Deserialize, Serialize};

use crate::util::normalize::{char_slice, normalize_query, FoldedText};

/// Marker added where a snippet was truncated.
pub const ELLIPSIS: &str = "...";

/// How much context to keep around a match, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetWindow {
    /// Characters kept before the match start.
    pub before: usize,
    /// Characters kept after the match end.
    pub after: usize,
}

impl SnippetWindow {
    pub const fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }
}

impl Default for SnippetWindow {
    fn default() -> Self {
        Self {
            before: 30,
            after: 50,
        }
    }
}

/// Extract a snippet of `text` around the first case-insensitive occurrence
/// of `query`.
///
/// Returns `None` when the query is empty or does not occur.
///
/// ```ignore
/// let s = extract_snippet("The quick brown fox jumps", "fox", SnippetWindow::new(4, 5));
/// assert_eq!(s.as_deref(), Some("...own fox jump..."));
/// ```
pub fn extract_snippet(text: &str, query: &str, window: SnippetWindow) -> Option<String> {
    let folded = FoldedText::new(text);
    snippet_in(&folded, &normalize_query(query), window)
}

/// Snippet extraction over an already-folded text and folded query.
pub(crate) fn snippet_in(
    text: &FoldedText<'_>,
    folded_query: &str,
    window: SnippetWindow,
) -> Option<String> {
    let span = text.find(folded_query)?;
    let total = text.original_len();

    let start = span.start.saturating_sub(window.before);
    let end = (span.end + window.after).min(total);

    let body = char_slice(text.original(), start, end);
    let mut snippet = String::with_capacity(body.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(body);
    if end < total {
        snippet.push_str(ELLIPSIS);
    }
    Some(snippet)
}
