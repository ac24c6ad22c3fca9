// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for live search, result emphasis and catalog pagination.
//!
//! Every field has a default matching the behavior of the site this crate
//! was built for, so `Config::default()` is a working configuration and a
//! config file only needs the keys it changes:
//!
//! ```json
//! { "live": { "excludedRegions": ["header", "nav"] }, "catalog": { "itemsPerPage": 9 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::SnippetWindow;

/// Element selectors treated as text-bearing leaves by default.
pub const DEFAULT_SELECTORS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "li", "a", "td", "th", "label",
];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub live: LiveSearchConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.live.validate()?;
        self.catalog.validate()
    }
}

/// Live document search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiveSearchConfig {
    /// Selectors of text-bearing elements to scan, in any order; results
    /// always come back in document order.
    pub selectors: Vec<String>,
    /// Regions whose contents never match (page chrome, navigation).
    pub excluded_regions: Vec<String>,
    /// Normalized queries shorter than this leave the search inactive.
    pub min_query_chars: usize,
    /// Cap on returned results.
    pub max_results: usize,
    /// Candidate texts must be strictly longer than this.
    pub min_text_chars: usize,
    /// Candidate texts must be strictly shorter than this.
    pub max_text_chars: usize,
    /// Length of the text prefix used as the deduplication key.
    pub dedup_key_chars: usize,
    pub snippet: SnippetWindow,
    pub emphasis: EmphasisConfig,
}

impl Default for LiveSearchConfig {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
            excluded_regions: vec!["header".to_string()],
            min_query_chars: 2,
            max_results: 8,
            min_text_chars: 10,
            max_text_chars: 300,
            dedup_key_chars: 100,
            snippet: SnippetWindow::default(),
            emphasis: EmphasisConfig::default(),
        }
    }
}

impl LiveSearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.selectors.is_empty() {
            return Err(Error::invalid_config("selectors", "must not be empty"));
        }
        if self.min_query_chars == 0 {
            return Err(Error::invalid_config("minQueryChars", "must be at least 1"));
        }
        if self.max_results == 0 {
            return Err(Error::invalid_config("maxResults", "must be at least 1"));
        }
        if self.min_text_chars >= self.max_text_chars {
            return Err(Error::invalid_config(
                "minTextChars",
                format!(
                    "({}) must be below maxTextChars ({})",
                    self.min_text_chars, self.max_text_chars
                ),
            ));
        }
        if self.dedup_key_chars == 0 {
            return Err(Error::invalid_config("dedupKeyChars", "must be at least 1"));
        }
        Ok(())
    }

    /// True when a trimmed candidate of `len` characters is worth scanning.
    #[inline]
    pub fn accepts_text_len(&self, len: usize) -> bool {
        len > self.min_text_chars && len < self.max_text_chars
    }
}

/// Transient background pulse applied to a selected result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmphasisConfig {
    pub background: String,
    pub transition: String,
    /// How long the emphasis stays before the background is restored.
    pub dwell_ms: u64,
    /// Delay between restoring the background and restoring the transition.
    pub settle_ms: u64,
    /// Delay before focusing the search input after the panel opens.
    pub focus_delay_ms: u64,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            background: "#FEE2E2".to_string(),
            transition: "background-color 0.3s ease".to_string(),
            dwell_ms: 2000,
            settle_ms: 300,
            focus_delay_ms: 100,
        }
    }
}

/// Catalog filtering and pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub items_per_page: usize,
    /// Record fields the query is matched against.
    pub fields: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: 6,
            fields: vec!["title".to_string()],
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(Error::invalid_config("itemsPerPage", "must be at least 1"));
        }
        if self.fields.is_empty() {
            return Err(Error::invalid_config("fields", "must name at least one field"));
        }
        Ok(())
    }
}
