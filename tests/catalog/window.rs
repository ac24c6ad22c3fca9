//! Page-window shapes at the boundaries between layouts.

use scour::{compute_page_window, PageToken, MAX_WINDOW_TOKENS};
use scour::PageToken::{Ellipsis, Page};

#[test]
fn test_seven_pages_never_collapse() {
    for current in 1..=7 {
        let window = compute_page_window(current, 7);
        assert_eq!(window.len(), MAX_WINDOW_TOKENS);
        assert!(window.tokens().iter().all(|t| !t.is_ellipsis()));
    }
}

#[test]
fn test_eight_pages_layouts() {
    assert_eq!(compute_page_window(3, 8).to_string(), "1 2 3 4 … 8");
    assert_eq!(compute_page_window(4, 8).to_string(), "1 … 3 4 5 … 8");
    assert_eq!(compute_page_window(5, 8).to_string(), "1 … 4 5 6 … 8");
    assert_eq!(compute_page_window(6, 8).to_string(), "1 … 5 6 7 8");
}

#[test]
fn test_window_at_last_page() {
    assert_eq!(
        compute_page_window(20, 20).tokens(),
        &[Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
    );
}

#[test]
fn test_window_serializes_as_tagged_tokens() {
    let json = serde_json::to_value(compute_page_window(1, 8)).unwrap();
    assert_eq!(json[0], serde_json::json!({ "kind": "page", "page": 1 }));
    assert_eq!(json[4], serde_json::json!({ "kind": "ellipsis" }));
}

#[test]
fn test_token_accessors() {
    assert_eq!(PageToken::Page(4).page(), Some(4));
    assert_eq!(PageToken::Ellipsis.page(), None);
    let window = compute_page_window(10, 30);
    assert!(window.contains_page(10));
    assert!(!window.contains_page(12));
    assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 9, 10, 11, 30]);
}
