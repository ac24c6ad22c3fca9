//! Substring filtering over named record fields.

use crate::common::{affiliations, make_record, make_reports, REPORTS_JSON};
use scour::catalog::parse_records;
use scour::{filter, paginate, total_pages, CatalogRecord};

fn ids<'a, R: CatalogRecord>(records: &[&'a R]) -> Vec<&'a str> {
    records.iter().map(|r| r.identity()).collect()
}

#[test]
fn test_title_and_type_filter() {
    let catalog = affiliations();

    let by_title = filter(&catalog, "institute", &["title"]);
    assert_eq!(ids(&by_title), vec!["CDI"]);

    // "Industry" appears in EIT's title and in four types
    let title_only = filter(&catalog, "industr", &["title"]);
    assert_eq!(ids(&title_only), vec!["EIT"]);
    let both = filter(&catalog, "industr", &["title", "type"]);
    assert_eq!(ids(&both), vec!["ICA", "CDI", "CMC", "EIT", "ICM"]);
}

#[test]
fn test_filter_is_case_insensitive_and_untrimmed() {
    let catalog = affiliations();
    assert_eq!(filter(&catalog, "COBALT", &["title"]).len(), 1);
    // Catalog queries are not trimmed: a trailing space must match literally
    assert_eq!(ids(&filter(&catalog, "cobalt ", &["title"])), vec!["CDI"]);
    assert!(filter(&catalog, "institute ", &["title"]).is_empty());
}

#[test]
fn test_empty_query_returns_everything() {
    let catalog = affiliations();
    assert_eq!(filter(&catalog, "", &["title"]).len(), catalog.len());
}

#[test]
fn test_filter_over_parsed_json() {
    let reports = parse_records(REPORTS_JSON).unwrap();
    assert_eq!(reports.len(), 8);

    let annual = filter(&reports, "annual", &["title"]);
    assert_eq!(ids(&annual), vec!["AR-2023", "AR-2022"]);

    let web = filter(&reports, "web", &["type"]);
    assert_eq!(ids(&web), vec!["CR-2023", "WR-2023"]);

    let by_id = filter(&reports, "sr-", &["id"]);
    assert_eq!(by_id.len(), 2);
}

#[test]
fn test_eight_reports_make_two_pages() {
    let reports = make_reports(8);
    let all = filter(&reports, "", &["title"]);
    assert_eq!(total_pages(all.len(), 6), 2);
    assert_eq!(paginate(&all, 1, 6).len(), 6);
    assert_eq!(ids(paginate(&all, 2, 6)), vec!["R-7", "R-8"]);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(parse_records(r#"[{ "title": "missing id" }]"#).is_err());
    assert!(parse_records("not json").is_err());
}

#[test]
fn test_filter_final_sigma() {
    let catalog = vec![
        make_record("GR-1", "ΝΟΜΟΣ ΜΕΤΑΛΛΩΝ", "PDF"),
        make_record("GR-2", "Annual Report", "PDF"),
    ];
    assert_eq!(ids(&filter(&catalog, "ΝΟΜΟΣ", &["title"])), vec!["GR-1"]);
    assert_eq!(ids(&filter(&catalog, "νομοσ", &["title"])), vec!["GR-1"]);
}
