// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-matching primitives: containment, snippets, highlighting.
//!
//! These are the leaves everything else sits on. All pure, deterministic and
//! linear in the text length. Matching is exact substring matching after
//! case folding - no fuzzy matching, no stemming, no ranking.

pub mod highlight;
pub mod matching;
pub mod snippet;

pub use highlight::{highlight_match, Highlight};
pub use matching::{contains_ignore_case, matches};
pub use snippet::{extract_snippet, SnippetWindow, ELLIPSIS};
