// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring matching.

use crate::util::normalize::fold_case;

/// True iff `query` is a non-empty substring of `text`.
///
/// Both arguments must already be case-folded. This is the hot path of the
/// live scan: the query is folded once per evaluation, each candidate once.
#[inline]
pub fn matches(text: &str, query: &str) -> bool {
    !query.is_empty() && text.contains(query)
}

/// Case-insensitive containment with catalog semantics: an empty query
/// matches everything.
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fold_case(text).contains(&fold_case(query))
}
