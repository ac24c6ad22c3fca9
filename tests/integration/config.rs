//! Config files: partial overrides, validation and their effect on search.

use std::fs;

use tempfile::TempDir;

use crate::common::company_page;
use scour::{CatalogPaginator, Config, Error, LiveSearch};

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scour.json");
    fs::write(
        &path,
        r#"{ "live": { "maxResults": 2, "emphasis": { "dwellMs": 1500 } }, "catalog": { "itemsPerPage": 4 } }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.live.max_results, 2);
    assert_eq!(config.live.min_query_chars, 2);
    assert_eq!(config.live.emphasis.dwell_ms, 1500);
    assert_eq!(config.live.emphasis.settle_ms, 300);
    assert_eq!(config.catalog.items_per_page, 4);
    assert_eq!(config.catalog.fields, vec!["title".to_string()]);
}

#[test]
fn test_config_changes_search_behavior() {
    let config = Config::from_json_str(r#"{ "live": { "maxResults": 2, "excludedRegions": [] } }"#)
        .unwrap();
    let set = LiveSearch::new(config.live).evaluate("copper", &company_page(), None);
    assert_eq!(set.len(), 2);
    assert!(set.more_results);
}

#[test]
fn test_invalid_values_rejected() {
    let err = Config::from_json_str(r#"{ "live": { "minTextChars": 400 } }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "minTextChars", .. }));

    let err = Config::from_json_str(r#"{ "catalog": { "fields": [] } }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "fields", .. }));
}

#[test]
fn test_malformed_config_is_json_error() {
    let err = Config::from_json_str(r#"{ "live": { "maxResults": "eight" } }"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_catalog_config_drives_page_size() {
    let config = Config::from_json_str(r#"{ "catalog": { "itemsPerPage": 3 } }"#).unwrap();
    let paginator =
        CatalogPaginator::new(crate::common::make_reports(8), &config.catalog).unwrap();
    assert_eq!(paginator.total_pages(), 3);
}
