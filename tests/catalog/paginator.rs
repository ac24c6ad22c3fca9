//! Stateful catalog paging as the resource pages drive it.

use crate::common::{affiliations, make_reports, REPORTS_JSON};
use scour::catalog::parse_records;
use scour::{CatalogConfig, CatalogPaginator, CatalogRecord, Error};

fn reports_paginator() -> CatalogPaginator<scour::Record> {
    CatalogPaginator::new(parse_records(REPORTS_JSON).unwrap(), &CatalogConfig::default()).unwrap()
}

#[test]
fn test_initial_view() {
    let paginator = reports_paginator();
    let view = paginator.view();
    assert_eq!(view.total_count, 8);
    assert_eq!(view.filtered_count, 8);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.records.len(), 6);
    assert!(!view.has_prev);
    assert!(view.has_next);
    assert_eq!(view.window.to_string(), "1 2");
}

#[test]
fn test_second_page_has_remainder() {
    let mut paginator = reports_paginator();
    assert!(paginator.next_page());
    let ids: Vec<_> = paginator.page_records().iter().map(|r| r.identity()).collect();
    assert_eq!(ids, vec!["CR-2023", "WR-2023"]);
    assert!(!paginator.has_next());
}

#[test]
fn test_query_resets_to_first_page() {
    let mut paginator = reports_paginator();
    paginator.go_to_page(2).unwrap();

    paginator.set_query("report");
    assert_eq!(paginator.current_page(), 1);
    // Annual x2, Sustainability x2, Tax Transparency, Water Stewardship
    assert_eq!(paginator.filtered_count(), 6);
    assert_eq!(paginator.total_pages(), 1);
    assert!(!paginator.has_next());
}

#[test]
fn test_secondary_field_search() {
    let config = CatalogConfig {
        fields: vec!["title".to_string(), "type".to_string()],
        ..CatalogConfig::default()
    };
    let mut paginator = CatalogPaginator::new(affiliations(), &config).unwrap();
    paginator.set_query("sustainability network");
    let ids: Vec<_> = paginator.page_records().iter().map(|r| r.identity()).collect();
    assert_eq!(ids, vec!["UNG", "RMI"]);
}

#[test]
fn test_no_matches_then_clear() {
    let mut paginator = reports_paginator();
    paginator.set_query("uranium");

    let view = paginator.view();
    assert!(view.is_empty());
    assert_eq!(view.filtered_count, 0);
    assert_eq!(view.total_count, 8);
    assert!(!view.has_prev && !view.has_next);

    paginator.clear();
    assert_eq!(paginator.view().records.len(), 6);
}

#[test]
fn test_out_of_range_page_keeps_state() {
    let mut paginator = reports_paginator();
    paginator.go_to_page(2).unwrap();

    let err = paginator.go_to_page(9).unwrap_err();
    assert!(matches!(err, Error::PageOutOfRange { page: 9, total_pages: 2 }));
    assert_eq!(paginator.current_page(), 2);
    assert_eq!(err.to_string(), "page 9 is out of range (1..=2)");
}

#[test]
fn test_page_one_always_valid() {
    let mut paginator = reports_paginator();
    paginator.set_query("uranium");
    assert!(paginator.go_to_page(1).is_ok());
}

#[test]
fn test_many_pages_window_follows_current() {
    let config = CatalogConfig {
        items_per_page: 2,
        ..CatalogConfig::default()
    };
    let mut paginator = CatalogPaginator::new(make_reports(40), &config).unwrap();
    assert_eq!(paginator.total_pages(), 20);

    paginator.go_to_page(10).unwrap();
    assert_eq!(paginator.page_window().to_string(), "1 … 9 10 11 … 20");

    let ids: Vec<_> = paginator.page_records().iter().map(|r| r.identity()).collect();
    assert_eq!(ids, vec!["R-19", "R-20"]);
}
