// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use scour::catalog::load_records;
use scour::{
    compute_page_window, highlight_match, CatalogPaginator, CatalogRecord, Config, HtmlDocument,
    LiveSearch, NodeId, PageWindow, Record, ResultSet, SearchStatus,
};

mod cli;
use cli::display::{self, heading, highlighted, index_badge, muted, pad_right, warning};
use cli::logging::initialize_logging;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = initialize_logging(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            container,
            config,
            limit,
            json,
        } => run_search(&file, &query, container.as_deref(), config.as_deref(), limit, json),
        Commands::Catalog {
            file,
            query,
            page,
            per_page,
            fields,
            config,
            json,
        } => run_catalog(
            &file,
            query.as_deref().unwrap_or(""),
            page,
            per_page,
            fields,
            config.as_deref(),
            json,
        ),
        Commands::Window { current, total } => {
            let window = compute_page_window(current, total);
            println!("{}", display::page_window(&window, current));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

// ============================================================================
// SEARCH
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput<'a> {
    #[serde(flatten)]
    set: &'a ResultSet<NodeId>,
    /// Tag name per result, in result order.
    tags: Vec<&'a str>,
}

fn run_search(
    file: &Path,
    query: &str,
    container: Option<&str>,
    config: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config)?.live;
    if let Some(limit) = limit {
        config.max_results = limit;
    }
    config.validate()?;

    let page = HtmlDocument::load(file).with_context(|| format!("reading {}", file.display()))?;
    debug!(elements = page.len(), "page parsed");

    let container = match container {
        Some(selector) => Some(
            page.select_first(selector)
                .with_context(|| format!("no element matches container selector {selector:?}"))?,
        ),
        None => None,
    };

    let min_chars = config.min_query_chars;
    let set = LiveSearch::new(config).evaluate(query, &page, container.as_ref());

    if json {
        let output = SearchOutput {
            set: &set,
            tags: set.iter().map(|r| page.tag(r.node)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match set.status {
        SearchStatus::Inactive => {
            println!(
                "{}",
                muted(&format!("Type at least {min_chars} characters to search."))
            );
        }
        SearchStatus::NoMatches => {
            println!("{}", warning(&format!("No results found for \"{}\"", query.trim())));
        }
        SearchStatus::Matches => {
            println!("{}", heading(&format!("RESULTS FOR \"{}\"", set.query)));
            for (i, result) in set.iter().enumerate() {
                let snippet = highlighted(&highlight_match(&result.snippet, query.trim()));
                println!(
                    "{} {} {}",
                    index_badge(i),
                    snippet,
                    muted(&format!("<{}>", page.tag(result.node)))
                );
            }
            if set.more_results {
                println!("{}", muted(&format!("Showing top {} results", set.len())));
            }
        }
    }
    Ok(())
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogOutput<'a> {
    query: &'a str,
    total_count: usize,
    filtered_count: usize,
    current_page: usize,
    total_pages: usize,
    records: Vec<&'a Record>,
    window: PageWindow,
}

fn run_catalog(
    file: &Path,
    query: &str,
    page: usize,
    per_page: Option<usize>,
    fields: Vec<String>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config)?.catalog;
    if let Some(per_page) = per_page {
        config.items_per_page = per_page;
    }
    if !fields.is_empty() {
        config.fields = fields;
    }

    let records =
        load_records(file).with_context(|| format!("reading catalog {}", file.display()))?;
    let mut paginator = CatalogPaginator::new(records, &config)?;
    paginator.set_query(query);
    paginator.go_to_page(page)?;
    let view = paginator.view();

    if json {
        let output = CatalogOutput {
            query,
            total_count: view.total_count,
            filtered_count: view.filtered_count,
            current_page: view.current_page,
            total_pages: view.total_pages,
            records: view.records,
            window: view.window,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        muted(&format!(
            "Showing {} of {}",
            view.filtered_count, view.total_count
        ))
    );

    if view.is_empty() {
        println!("{}", warning("No records match. Clear the search to see everything."));
        return Ok(());
    }

    let id_width = view
        .records
        .iter()
        .map(|r| r.identity().chars().count())
        .max()
        .unwrap_or(0);
    let primary = config.fields.first().map(String::as_str).unwrap_or("title");
    for record in &view.records {
        println!(
            "  {}  {}",
            pad_right(&muted(record.identity()), id_width),
            record.field(primary).unwrap_or("")
        );
    }

    println!();
    let mut controls = display::page_window(&view.window, view.current_page);
    if view.has_prev {
        controls = format!("‹ {controls}");
    }
    if view.has_next {
        controls = format!("{controls} ›");
    }
    println!("{}", controls);
    Ok(())
}
