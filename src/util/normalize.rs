// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization and case-folded text views.
//!
//! Case folding is per-character `char::to_lowercase` ([`fold_case`]),
//! applied the same way to queries and texts; never `str::to_lowercase`,
//! whose final-sigma rule folds a word-final 'Σ' to 'ς'. No diacritic
//! stripping, no stemming.
//!
//! Lowercasing can change the number of characters ('İ' becomes "i̇", two
//! scalars), so a match position found in the folded text is not automatically a valid position in the original.
//! `FoldedText` keeps a map from every folded character back to the
//! original character it came from, which is what snippet extraction and
//! highlighting slice with.

/// Normalize a query: trim surrounding whitespace, then case-fold.
///
/// ```ignore
/// assert_eq!(normalize_query("  Copper Mine "), "copper mine");
/// ```
pub fn normalize_query(raw: &str) -> String {
    fold_case(raw.trim())
}

/// Case-fold `s` one character at a time, without context-sensitive rules.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Number of characters (Unicode scalar values) in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `char_idx`-th character, or `s.len()` past the end.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Slice `s` by character positions `[start, end)`.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(s, start);
    let to = byte_offset(s, end.max(start));
    &s[from..to]
}

/// Leading `n` characters of `s` (all of it when shorter).
pub fn char_prefix(s: &str, n: usize) -> &str {
    &s[..byte_offset(s, n)]
}

/// A match location, in characters of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Case-folded view of a text that can translate folded positions back.
#[derive(Debug, Clone)]
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// For each folded char, the index of the original char that produced it.
    origin: Vec<usize>,
    original_chars: usize,
}

impl<'a> FoldedText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut original_chars = 0;

        for (idx, c) in original.chars().enumerate() {
            for lower in c.to_lowercase() {
                folded.push(lower);
                origin.push(idx);
            }
            original_chars = idx + 1;
        }

        Self {
            original,
            folded,
            origin,
            original_chars,
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Length of the original text in characters.
    pub fn original_len(&self) -> usize {
        self.original_chars
    }

    /// First occurrence of an already-folded `query`, mapped onto the original.
    ///
    /// Returns `None` for an empty query.
    pub fn find(&self, folded_query: &str) -> Option<MatchSpan> {
        if folded_query.is_empty() {
            return None;
        }
        let byte = self.folded.find(folded_query)?;
        let first = self.folded[..byte].chars().count();
        let last = first + folded_query.chars().count() - 1;

        Some(MatchSpan {
            start: self.origin[first],
            end: self.origin[last] + 1,
        })
    }
}
