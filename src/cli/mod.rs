// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scour command-line interface.
//!
//! Three subcommands: `search` runs the live search over a saved HTML page
//! (what the header search would show for that query), `catalog` filters and
//! pages a JSON record list, and `window` prints the pagination window for a
//! page count. Every command accepts `--json` except `window`, which is
//! already one line.

pub mod display;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scour",
    about = "Live page search, snippets and catalog pagination",
    version
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the text of an HTML page the way the live search panel does
    Search {
        /// Path to an .html file
        file: PathBuf,

        /// Search query (trimmed and case-folded)
        query: String,

        /// Selector of the search UI; its contents never match
        #[arg(long)]
        container: Option<String>,

        /// JSON config file (`{ "live": {...}, "catalog": {...} }`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the result cap
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the result set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter and paginate a JSON catalog
    Catalog {
        /// Path to a JSON array of `{ "id": ..., "<field>": ... }` records
        file: PathBuf,

        /// Filter query; omit to list everything
        query: Option<String>,

        /// 1-based page to show
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Override records per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Field to match the query against (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the page-number window for a pagination control
    Window {
        /// Current 1-based page
        current: usize,

        /// Total number of pages
        total: usize,
    },
}

impl Commands {
    /// Whether the command writes machine-readable output.
    pub fn is_json(&self) -> bool {
        match self {
            Commands::Search { json, .. } | Commands::Catalog { json, .. } => *json,
            Commands::Window { .. } => false,
        }
    }
}
