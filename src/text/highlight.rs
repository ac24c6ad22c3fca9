// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split a text around its first match for emphasis rendering.

use serde::Serialize;

use crate::util::normalize::{byte_offset, fold_case, FoldedText};

/// A text split around the first case-insensitive occurrence of a query.
///
/// Borrowed from the input, so rendering a result list allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Highlight<'a> {
    Split {
        prefix: &'a str,
        matched: &'a str,
        suffix: &'a str,
    },
    Unmatched { text: &'a str },
}

impl<'a> Highlight<'a> {
    /// The matched segment, if any.
    pub fn matched(&self) -> Option<&'a str> {
        match self {
            Highlight::Split { matched, .. } => Some(matched),
            Highlight::Unmatched { .. } => None,
        }
    }

    /// Reassemble the original text.
    pub fn to_text(&self) -> String {
        match self {
            Highlight::Split {
                prefix,
                matched,
                suffix,
            } => format!("{prefix}{matched}{suffix}"),
            Highlight::Unmatched { text } => (*text).to_string(),
        }
    }
}

/// Split `text` into `(prefix, match, suffix)` around the first
/// case-insensitive occurrence of `query`.
///
/// The query is case-folded but not trimmed, so the emphasized segment is
/// exactly what the user typed. An empty query never splits.
pub fn highlight_match<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    let folded = FoldedText::new(text);
    let Some(span) = folded.find(&fold_case(query)) else {
        return Highlight::Unmatched { text };
    };

    let start = byte_offset(text, span.start);
    let end = byte_offset(text, span.end);
    Highlight::Split {
        prefix: &text[..start],
        matched: &text[start..end],
        suffix: &text[end..],
    }
}
