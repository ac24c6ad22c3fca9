// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live search over a rendered document.
//!
//! Every query edit re-runs a full scan: collect the text-bearing elements,
//! drop the ones inside the search UI or page chrome, keep the ones whose
//! trimmed text is a sensible length and contains the query, deduplicate,
//! cut a snippet, cap at eight. There is no index and no incremental update.
//! A page has a few hundred candidate elements at most and the two-character
//! minimum keeps single keystrokes from triggering a scan, so a full rescan
//! is cheaper than any bookkeeping would be.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ TextNodeSource │────▶│  LiveSearch  │────▶│ ResultCollector  │
//! │ (DOM, HTML,    │     │  (evaluate)  │     │ (dedup + cap)    │
//! │  test double)  │     └──────────────┘     └──────────────────┘
//! └────────────────┘            ▲
//!         ▲                     │
//!         │              ┌──────────────┐     ┌──────────────────┐
//!         └──────────────│SearchSession │────▶│ emphasis::pulse  │
//!                        │ (panel FSM)  │     │ (Scheduler)      │
//!                        └──────────────┘     └──────────────────┘
//! ```

pub mod dedup;
pub mod emphasis;
pub mod session;
pub mod source;

use tracing::{debug, trace};

use crate::config::LiveSearchConfig;
use crate::text::matches;
use crate::text::snippet::snippet_in;
use crate::types::{ResultSet, SearchResult};
use crate::util::normalize::{char_len, normalize_query, FoldedText};

pub use dedup::ResultCollector;
pub use emphasis::{pulse, ManualScheduler, Scheduler};
pub use session::{ListenerRegistry, NoListeners, PanelState, SearchSession};
pub use source::{StyleProperty, TextNodeSource};

/// Query evaluator for live document search.
#[derive(Debug, Clone, Default)]
pub struct LiveSearch {
    config: LiveSearchConfig,
}

impl LiveSearch {
    pub fn new(config: LiveSearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LiveSearchConfig {
        &self.config
    }

    /// Whether an already-normalized query is long enough to scan for.
    pub fn is_searchable(&self, normalized: &str) -> bool {
        char_len(normalized) >= self.config.min_query_chars
    }

    /// Evaluate `query` against the current state of `source`.
    ///
    /// `container` is the search UI itself. Elements inside it, and elements
    /// that contain it, never match, so the search cannot echo its own input
    /// or result list back.
    pub fn evaluate<S: TextNodeSource>(
        &self,
        query: &str,
        source: &S,
        container: Option<&S::Node>,
    ) -> ResultSet<S::Node> {
        let query = normalize_query(query);
        if !self.is_searchable(&query) {
            trace!(query = %query, "query below minimum length, search inactive");
            return ResultSet::inactive(query);
        }

        let excluded = if self.config.excluded_regions.is_empty() {
            Vec::new()
        } else {
            source.query_all(&self.config.excluded_regions)
        };

        let mut collector = ResultCollector::new(self.config.dedup_key_chars);
        let mut scanned = 0usize;

        for node in source.query_all(&self.config.selectors) {
            scanned += 1;

            if let Some(container) = container {
                if source.contains(container, &node) || source.contains(&node, container) {
                    continue;
                }
            }
            if excluded.iter().any(|region| source.contains(region, &node)) {
                continue;
            }

            let content = source.text(&node);
            let text = content.trim();
            if !self.config.accepts_text_len(char_len(text)) {
                continue;
            }

            let folded = FoldedText::new(text);
            if !matches(folded.folded(), &query) || collector.is_seen(text) {
                continue;
            }

            let Some(snippet) = snippet_in(&folded, &query, self.config.snippet) else {
                continue;
            };
            collector.offer(SearchResult {
                raw_text: text.to_string(),
                node,
                snippet,
            });
        }

        let set = collector.into_result_set(query, self.config.max_results);
        debug!(
            query = %set.query,
            scanned,
            matched = set.total_matches,
            returned = set.len(),
            "live search evaluated"
        );
        set
    }
}
