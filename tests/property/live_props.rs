//! Live search result-set invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::common::{live_search, MemoryTree};
use scour::util::normalize::{char_prefix, normalize_query};
use scour::{extract_snippet, highlight_match, SearchStatus, SnippetWindow, ELLIPSIS};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word pool with repeats so generated pages share text and queries hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "copper", "cobalt", "Kolwezi", "smelter", "ore", "SAFETY", "report", "mine", "the",
        "of", "Énergie", "straße",
    ])
    .prop_map(str::to_string)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..40).prop_map(|words| words.join(" "))
}

/// A flat page of paragraphs and list items.
fn page_strategy() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), text_strategy()), 0..30)
}

fn build(page: &[(bool, String)]) -> MemoryTree {
    let tree = MemoryTree::new();
    for (is_item, text) in page {
        tree.push(if *is_item { "li" } else { "p" }, text, None);
    }
    tree
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        "[a-zA-Z ]{0,6}",
        word_strategy().prop_map(|w| format!("  {}  ", w.to_uppercase())),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_result_set_shape(page in page_strategy(), query in query_strategy()) {
        let tree = build(&page);
        let set = live_search().evaluate(&query, &tree, None);
        let normalized = normalize_query(&query);

        prop_assert!(set.len() <= 8);
        prop_assert_eq!(set.more_results, set.total_matches > set.len());

        if normalized.chars().count() < 2 {
            prop_assert_eq!(set.status, SearchStatus::Inactive);
            prop_assert_eq!(set.total_matches, 0);
        } else if set.is_empty() {
            prop_assert_eq!(set.status, SearchStatus::NoMatches);
        } else {
            prop_assert_eq!(set.status, SearchStatus::Matches);
        }
    }

    #[test]
    fn prop_every_result_contains_query(page in page_strategy(), query in query_strategy()) {
        let tree = build(&page);
        let set = live_search().evaluate(&query, &tree, None);

        for result in set.iter() {
            prop_assert!(result.raw_text.to_lowercase().contains(&set.query));
            let len = result.raw_text.chars().count();
            prop_assert!(len > 10 && len < 300);
            prop_assert_eq!(result.raw_text.trim(), result.raw_text.as_str());
        }
    }

    #[test]
    fn prop_results_in_document_order(page in page_strategy(), query in word_strategy()) {
        let tree = build(&page);
        let set = live_search().evaluate(&query, &tree, None);
        let nodes: Vec<usize> = set.iter().map(|r| r.node).collect();
        prop_assert!(nodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_no_two_results_share_dedup_key(page in page_strategy(), query in word_strategy()) {
        let tree = build(&page);
        let set = live_search().evaluate(&query, &tree, None);

        let mut keys = HashSet::new();
        for result in set.iter() {
            prop_assert!(keys.insert(char_prefix(&result.raw_text, 100).to_string()));
        }
    }

    #[test]
    fn prop_evaluation_is_deterministic(page in page_strategy(), query in query_strategy()) {
        let tree = build(&page);
        let first = live_search().evaluate(&query, &tree, None);
        let second = live_search().evaluate(&query, &tree, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_snippet_is_bounded_window(text in text_strategy(), query in word_strategy()) {
        let window = SnippetWindow::default();
        if let Some(snippet) = extract_snippet(&text, &query, window) {
            let body = snippet
                .strip_prefix(ELLIPSIS)
                .unwrap_or(&snippet);
            let body = body.strip_suffix(ELLIPSIS).unwrap_or(body);

            prop_assert!(text.contains(body));
            prop_assert!(body.to_lowercase().contains(&normalize_query(&query)));
            prop_assert!(
                body.chars().count() <= window.before + query.chars().count() + window.after
            );
        }
    }

    #[test]
    fn prop_highlight_reassembles(text in text_strategy(), query in query_strategy()) {
        let highlight = highlight_match(&text, &query);
        prop_assert_eq!(highlight.to_text(), text.clone());
        if let Some(matched) = highlight.matched() {
            prop_assert_eq!(matched.to_lowercase(), query.to_lowercase());
        }
    }
}
