// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search panel as an explicit state machine.
//!
//! ```text
//!            open / toggle / query_change
//!   Closed ───────────────────────────────▶ Open ◀─────┐
//!     ▲                                      │          │ query_change (short)
//!     │                                      │ query_change (≥ 2 chars)
//!     │ escape / outside_click /             ▼          │
//!     │ select / toggle (blank query)   OpenWithResults ┘
//!     └──────────────────────────────────────┘
//! ```
//!
//! Global listeners (outside click, Escape) exist only while the panel is not
//! `Closed`. They are held as a guard from a `ListenerRegistry`: opening
//! acquires it, every path into `Closed` drops it, so a listener can never
//! outlive the panel that needed it.

use serde::Serialize;
use tracing::debug;

use super::emphasis::{pulse, Scheduler};
use super::source::TextNodeSource;
use super::LiveSearch;
use crate::types::ResultSet;

/// Visible state of the search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelState {
    Closed,
    /// Input visible, no results panel (query empty or too short).
    Open,
    /// Results panel visible: matches or a "no results" message.
    OpenWithResults,
}

/// Source of global event listeners scoped to an open panel.
///
/// Dropping the guard must unregister whatever `acquire` registered.
pub trait ListenerRegistry {
    type Guard;

    fn acquire(&self) -> Self::Guard;
}

/// Registry for hosts that route dismissal events themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoListeners;

impl ListenerRegistry for NoListeners {
    type Guard = ();

    fn acquire(&self) {}
}

/// Live search session: query, results and panel state over one document.
pub struct SearchSession<S: TextNodeSource, L: ListenerRegistry = NoListeners> {
    search: LiveSearch,
    source: S,
    container: Option<S::Node>,
    listeners: L,
    guard: Option<L::Guard>,
    state: PanelState,
    query: String,
    results: ResultSet<S::Node>,
}

impl<S: TextNodeSource> SearchSession<S, NoListeners> {
    /// Session without managed listeners.
    pub fn new(search: LiveSearch, source: S, container: Option<S::Node>) -> Self {
        Self::with_listeners(search, source, container, NoListeners)
    }
}

impl<S: TextNodeSource, L: ListenerRegistry> SearchSession<S, L> {
    pub fn with_listeners(
        search: LiveSearch,
        source: S,
        container: Option<S::Node>,
        listeners: L,
    ) -> Self {
        Self {
            search,
            source,
            container,
            listeners,
            guard: None,
            state: PanelState::Closed,
            query: String::new(),
            results: ResultSet::default(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The query as typed (not normalized).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultSet<S::Node> {
        &self.results
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn search(&self) -> &LiveSearch {
        &self.search
    }

    /// Whether global listeners are currently registered.
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    /// Open the panel. No-op when already open.
    pub fn open(&mut self) {
        if self.state != PanelState::Closed {
            return;
        }
        self.guard = Some(self.listeners.acquire());
        self.state = PanelState::Open;
        debug!("search panel opened");
    }

    /// Search button: opens a closed panel, closes an open one whose query is
    /// blank, and leaves an open panel with a query alone.
    pub fn toggle(&mut self) {
        match self.state {
            PanelState::Closed => self.open(),
            _ if self.query.trim().is_empty() => self.close(),
            _ => {}
        }
    }

    /// Re-evaluate for a new query. Typing into a closed panel opens it.
    pub fn query_change(&mut self, query: &str) -> &ResultSet<S::Node> {
        self.open();
        self.query = query.to_string();
        self.results = self
            .search
            .evaluate(query, &self.source, self.container.as_ref());
        self.state = if self.results.is_active() {
            PanelState::OpenWithResults
        } else {
            PanelState::Open
        };
        &self.results
    }

    /// Navigate to result `index`, then close the panel.
    ///
    /// The session is cleared before this returns; only the emphasis restore
    /// is deferred. Returns `false` when there is no such result.
    pub fn select<K>(&mut self, index: usize, scheduler: &K) -> bool
    where
        S: Clone + 'static,
        S::Node: 'static,
        K: Scheduler + ?Sized,
    {
        let Some(result) = self.results.get(index) else {
            return false;
        };
        let node = result.node.clone();
        debug!(index, "search result selected");

        pulse(&self.source, &node, &self.search.config().emphasis, scheduler);
        self.close();
        true
    }

    /// Escape key. Returns whether the panel was open.
    pub fn escape(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    /// Pointer press somewhere on the page. Closes the panel when `target`
    /// lies outside the search container. Without a container there is no
    /// "outside", so nothing closes.
    pub fn outside_click(&mut self, target: &S::Node) -> bool {
        if !self.is_open() {
            return false;
        }
        match &self.container {
            Some(container) if !self.source.contains(container, target) => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Close the panel and discard query and results.
    pub fn close(&mut self) {
        self.query.clear();
        self.results = ResultSet::default();
        self.state = PanelState::Closed;
        if self.guard.take().is_some() {
            debug!("search panel closed, listeners released");
        }
    }
}
