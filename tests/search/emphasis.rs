//! Navigate-to-result emphasis: style writes and their timed restore.

use std::time::Duration;

use crate::common::MemoryTree;
use scour::{
    pulse, EmphasisConfig, HtmlDocument, ManualScheduler, StyleProperty, TextNodeSource,
};

#[test]
fn test_pulse_timeline_restores_both_properties() {
    let tree = MemoryTree::new();
    let node = tree.push("p", "Copper cathode output rose.", None);
    tree.set_style(&node, StyleProperty::BackgroundColor, "white");

    let config = EmphasisConfig::default();
    let scheduler = ManualScheduler::new();
    pulse(&tree, &node, &config, &scheduler);

    assert_eq!(tree.scrolled(), vec![node]);
    assert_eq!(tree.style(&node, StyleProperty::BackgroundColor), "#FEE2E2");
    assert_eq!(
        tree.style(&node, StyleProperty::Transition),
        "background-color 0.3s ease"
    );

    scheduler.advance(Duration::from_millis(1999));
    assert_eq!(tree.style(&node, StyleProperty::BackgroundColor), "#FEE2E2");

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(tree.style(&node, StyleProperty::BackgroundColor), "white");
    // Transition stays so the fade-out animates
    assert_eq!(
        tree.style(&node, StyleProperty::Transition),
        "background-color 0.3s ease"
    );

    scheduler.advance(Duration::from_millis(300));
    assert_eq!(tree.style(&node, StyleProperty::Transition), "");
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_pulse_restores_inline_styles_from_markup() {
    let page = HtmlDocument::parse(
        r#"<p style="background-color: #fafafa; transition: opacity 1s">Smelter expansion completed on schedule.</p>"#,
    )
    .unwrap();
    let node = page.select_first("p").unwrap();
    let scheduler = ManualScheduler::new();

    pulse(&page, &node, &EmphasisConfig::default(), &scheduler);
    assert_eq!(scheduler.run_all(), 2);

    assert_eq!(page.style(&node, StyleProperty::BackgroundColor), "#fafafa");
    assert_eq!(page.style(&node, StyleProperty::Transition), "opacity 1s");
    assert_eq!(page.scrolled(), vec![node]);
}

#[test]
fn test_custom_emphasis_timings() {
    let tree = MemoryTree::new();
    let node = tree.push("p", "Cobalt hydroxide shipments resumed.", None);
    let config = EmphasisConfig {
        background: "yellow".to_string(),
        dwell_ms: 500,
        settle_ms: 0,
        ..EmphasisConfig::default()
    };
    let scheduler = ManualScheduler::new();

    pulse(&tree, &node, &config, &scheduler);
    assert_eq!(tree.style(&node, StyleProperty::BackgroundColor), "yellow");

    assert_eq!(scheduler.advance(Duration::from_millis(500)), 2);
    assert_eq!(tree.style(&node, StyleProperty::BackgroundColor), "");
    assert_eq!(tree.style(&node, StyleProperty::Transition), "");
}

#[test]
fn test_overlapping_pulses_touch_only_their_own_node() {
    let tree = MemoryTree::new();
    let first = tree.push("p", "First paragraph about copper.", None);
    let second = tree.push("p", "Second paragraph about copper.", None);
    let scheduler = ManualScheduler::new();
    let config = EmphasisConfig::default();

    pulse(&tree, &first, &config, &scheduler);
    scheduler.advance(Duration::from_millis(1000));
    pulse(&tree, &second, &config, &scheduler);

    scheduler.advance(Duration::from_millis(1000));
    assert_eq!(tree.style(&first, StyleProperty::BackgroundColor), "");
    assert_eq!(tree.style(&second, StyleProperty::BackgroundColor), "#FEE2E2");

    scheduler.run_all();
    assert_eq!(tree.style(&second, StyleProperty::BackgroundColor), "");
}
