//! Page-window invariants for every reachable `(current, total)` pair.

use proptest::prelude::*;

use scour::{compute_page_window, MAX_WINDOW_TOKENS};

fn position() -> impl Strategy<Value = (usize, usize)> {
    (1usize..500).prop_flat_map(|total| (1..=total, Just(total)))
}

proptest! {
    #[test]
    fn prop_window_bounded_and_anchored((current, total) in position()) {
        let window = compute_page_window(current, total);
        let pages: Vec<usize> = window.pages().collect();

        prop_assert!(window.len() <= MAX_WINDOW_TOKENS);
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        prop_assert!(window.contains_page(current));
    }

    #[test]
    fn prop_window_pages_strictly_increase((current, total) in position()) {
        let window = compute_page_window(current, total);
        let pages: Vec<usize> = window.pages().collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_ellipsis_stands_for_a_gap((current, total) in position()) {
        let tokens = compute_page_window(current, total).into_tokens();

        prop_assert!(!tokens.first().is_some_and(|t| t.is_ellipsis()));
        prop_assert!(!tokens.last().is_some_and(|t| t.is_ellipsis()));
        for w in tokens.windows(3) {
            prop_assert!(!(w[0].is_ellipsis() && w[1].is_ellipsis()));
            if w[1].is_ellipsis() {
                // Neighbors of an ellipsis are pages with at least one page skipped
                let (Some(before), Some(after)) = (w[0].page(), w[2].page()) else {
                    return Err(TestCaseError::fail("ellipsis next to a non-page"));
                };
                prop_assert!(after > before + 1);
            }
        }
        if total > MAX_WINDOW_TOKENS {
            prop_assert!(tokens.iter().any(|t| t.is_ellipsis()));
        } else {
            prop_assert_eq!(tokens.len(), total);
        }
    }
}
