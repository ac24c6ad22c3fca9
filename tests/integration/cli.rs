//! End-to-end runs of the `scour` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

use crate::common::{COMPANY_PAGE, REPORTS_JSON};

fn scour(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scour"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("scour binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn fixture(name: &str, contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn test_window_command() {
    let output = scour(&["window", "5", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1 … 4 [5] 6 … 10");
}

#[test]
fn test_search_command_json() {
    let (_dir, page) = fixture("index.html", COMPANY_PAGE);
    let output = scour(&["search", &page, "kolwezi", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "matches");
    assert_eq!(json["totalMatches"], 1);
    assert_eq!(json["tags"][0], "p");
    assert_eq!(json["moreResults"], false);
}

#[test]
fn test_search_command_text_output() {
    let (_dir, page) = fixture("index.html", COMPANY_PAGE);

    let output = scour(&["search", &page, "Cobalt"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[cobalt]"), "{text}");

    let output = scour(&["search", &page, "uranium"]);
    assert!(stdout(&output).contains("No results found for \"uranium\""));

    let output = scour(&["search", &page, "u"]);
    assert!(stdout(&output).contains("Type at least 2 characters"));
}

#[test]
fn test_search_limit_reports_more() {
    let (_dir, page) = fixture("index.html", COMPANY_PAGE);
    let output = scour(&["search", &page, "copper", "--limit", "2"]);
    assert!(stdout(&output).contains("Showing top 2 results"));
}

#[test]
fn test_catalog_command() {
    let (_dir, catalog) = fixture("reports.json", REPORTS_JSON);

    let output = scour(&["catalog", &catalog, "--page", "2"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Showing 8 of 8"));
    assert!(text.contains("Water Stewardship Report"));
    assert!(!text.contains("Annual Report 2023"));

    let output = scour(&["catalog", &catalog, "annual", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["filteredCount"], 2);
    assert_eq!(json["records"][0]["id"], "AR-2023");
}

#[test]
fn test_catalog_bad_page_fails() {
    let (_dir, catalog) = fixture("reports.json", REPORTS_JSON);
    let output = scour(&["catalog", &catalog, "--page", "7"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_missing_file_fails() {
    let output = scour(&["search", "/definitely/not/here.html", "copper"]);
    assert!(!output.status.success());
}
