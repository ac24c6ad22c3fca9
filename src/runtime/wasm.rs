// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for scour.
//!
//! This is the browser-facing API. `ScourSearch` drives the header search
//! panel over the live DOM; `ScourCatalog` backs a resource page's filter and
//! pagination controls. Results cross the boundary as plain objects via
//! serde-wasm-bindgen; DOM elements stay on the Rust side and are addressed
//! by result index.
//!
//! # Live search
//!
//! ```js
//! const search = new ScourSearch("#site-search");
//! input.addEventListener("input", (e) => render(search.queryChange(e.target.value)));
//! button.addEventListener("click", () => search.toggle());
//! list.addEventListener("click", (e) => search.select(Number(e.target.dataset.index)));
//! ```
//!
//! Outside clicks and Escape are handled internally: the document listeners
//! exist only while the panel is open.
//!
//! # Catalog
//!
//! ```js
//! const reports = new ScourCatalog(records, { itemsPerPage: 6, fields: ["title"] });
//! render(reports.setQuery("annual"));
//! render(reports.goToPage(2));
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent,
    Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::catalog::{CatalogPaginator, PageWindow, Record};
use crate::config::{CatalogConfig, LiveSearchConfig};
use crate::live::{
    ListenerRegistry, LiveSearch, PanelState, Scheduler, SearchSession, StyleProperty,
    TextNodeSource,
};
use crate::text::{highlight_match, Highlight};
use crate::types::{ResultSet, SearchStatus};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

// ============================================================================
// DOM SOURCE
// ============================================================================

/// `TextNodeSource` over the page's live DOM.
#[derive(Clone)]
pub struct DomSource {
    document: Document,
}

impl DomSource {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl TextNodeSource for DomSource {
    type Node = Element;

    fn query_all(&self, selectors: &[String]) -> Vec<Element> {
        if selectors.is_empty() {
            return Vec::new();
        }
        // A selector group already yields each element once, in document order.
        let group = selectors.join(", ");
        let list = match self.document.query_selector_all(&group) {
            Ok(list) => list,
            Err(err) => {
                warn!(selectors = %group, ?err, "invalid selector group");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn contains(&self, container: &Element, node: &Element) -> bool {
        let node: &Node = node;
        container.contains(Some(node))
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn style(&self, node: &Element, prop: StyleProperty) -> String {
        node.dyn_ref::<HtmlElement>()
            .and_then(|el| el.style().get_property_value(prop.css_name()).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, node: &Element, prop: StyleProperty, value: &str) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let outcome = if value.is_empty() {
            style.remove_property(prop.css_name()).map(|_| ())
        } else {
            style.set_property(prop.css_name(), value)
        };
        if let Err(err) = outcome {
            warn!(property = %prop, ?err, "failed to write inline style");
        }
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// `Scheduler` backed by `window.setTimeout`.
pub struct TimeoutScheduler {
    window: Window,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(task);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            warn!(?err, "setTimeout failed, deferred task dropped");
        }
    }
}

// ============================================================================
// DOCUMENT LISTENERS
// ============================================================================

/// Document-level `mousedown` and `keydown` handlers, registered only while
/// a guard is alive.
pub struct DocumentListeners {
    target: EventTarget,
    on_mousedown: Closure<dyn FnMut(MouseEvent)>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DocumentListeners {
    pub fn new(
        document: &Document,
        on_mousedown: impl FnMut(MouseEvent) + 'static,
        on_keydown: impl FnMut(KeyboardEvent) + 'static,
    ) -> Self {
        Self {
            target: document.clone().unchecked_into(),
            on_mousedown: Closure::wrap(Box::new(on_mousedown) as Box<dyn FnMut(MouseEvent)>),
            on_keydown: Closure::wrap(Box::new(on_keydown) as Box<dyn FnMut(KeyboardEvent)>),
        }
    }
}

/// Removes the document listeners when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    mousedown: Function,
    keydown: Function,
}

impl ListenerRegistry for DocumentListeners {
    type Guard = ListenerGuard;

    fn acquire(&self) -> ListenerGuard {
        let guard = ListenerGuard {
            target: self.target.clone(),
            mousedown: self.on_mousedown.as_ref().unchecked_ref::<Function>().clone(),
            keydown: self.on_keydown.as_ref().unchecked_ref::<Function>().clone(),
        };
        for (event, handler) in [("mousedown", &guard.mousedown), ("keydown", &guard.keydown)] {
            if let Err(err) = self.target.add_event_listener_with_callback(event, handler) {
                warn!(event, ?err, "failed to register document listener");
            }
        }
        guard
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for (event, handler) in [("mousedown", &self.mousedown), ("keydown", &self.keydown)] {
            if let Err(err) = self.target.remove_event_listener_with_callback(event, handler) {
                warn!(event, ?err, "failed to remove document listener");
            }
        }
    }
}

// ============================================================================
// LIVE SEARCH BINDING
// ============================================================================

type DomSession = SearchSession<DomSource, DocumentListeners>;

/// One result for JavaScript. `index` is what `select()` takes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult<'a> {
    index: usize,
    raw_text: &'a str,
    snippet: &'a str,
    /// The snippet split around the typed query, for `<mark>` rendering.
    highlight: Highlight<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResultSet<'a> {
    query: &'a str,
    status: SearchStatus,
    panel: PanelState,
    results: Vec<JsSearchResult<'a>>,
    total_matches: usize,
    more_results: bool,
}

impl<'a> JsResultSet<'a> {
    fn new(set: &'a ResultSet<Element>, typed: &str, panel: PanelState) -> Self {
        Self {
            query: &set.query,
            status: set.status,
            panel,
            results: set
                .iter()
                .enumerate()
                .map(|(index, r)| JsSearchResult {
                    index,
                    raw_text: &r.raw_text,
                    snippet: &r.snippet,
                    highlight: highlight_match(&r.snippet, typed.trim()),
                })
                .collect(),
            total_matches: set.total_matches,
            more_results: set.more_results,
        }
    }
}

/// Header search panel over the live document.
#[wasm_bindgen]
pub struct ScourSearch {
    session: Rc<RefCell<DomSession>>,
    scheduler: Rc<TimeoutScheduler>,
    input: Option<HtmlInputElement>,
    focus_delay: Duration,
}

#[wasm_bindgen]
impl ScourSearch {
    /// Create a search bound to the document.
    ///
    /// `container` is a selector for the search UI (input plus results
    /// panel); its first `<input>` receives focus when the panel opens.
    /// `config` is an optional `LiveSearchConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Option<String>, config: JsValue) -> Result<ScourSearch, JsValue> {
        let config: LiveSearchConfig = if config.is_undefined() || config.is_null() {
            LiveSearchConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        config.validate().map_err(js_err)?;

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let container = match container {
            Some(selector) => document.query_selector(&selector)?,
            None => None,
        };
        let input = container
            .as_ref()
            .and_then(|c| c.query_selector("input").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        let focus_delay = Duration::from_millis(config.emphasis.focus_delay_ms);
        let source = DomSource::new(document.clone());

        let session = Rc::new_cyclic(|weak: &Weak<RefCell<DomSession>>| {
            let on_click = weak.clone();
            let on_key = weak.clone();
            let listeners = DocumentListeners::new(
                &document,
                move |event: MouseEvent| {
                    let Some(target) = event_element(&event) else {
                        return;
                    };
                    if let Some(session) = on_click.upgrade() {
                        if let Ok(mut session) = session.try_borrow_mut() {
                            session.outside_click(&target);
                        }
                    }
                },
                move |event: KeyboardEvent| {
                    if event.key() != "Escape" {
                        return;
                    }
                    if let Some(session) = on_key.upgrade() {
                        if let Ok(mut session) = session.try_borrow_mut() {
                            session.escape();
                        }
                    }
                },
            );
            RefCell::new(SearchSession::with_listeners(
                LiveSearch::new(config),
                source,
                container,
                listeners,
            ))
        });

        Ok(ScourSearch {
            session,
            scheduler: Rc::new(TimeoutScheduler::new(window)),
            input,
            focus_delay,
        })
    }

    /// Current panel state: `"closed"`, `"open"` or `"openWithResults"`.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.borrow().state()).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn open(&self) {
        let was_open = self.session.borrow().is_open();
        self.session.borrow_mut().open();
        if !was_open {
            self.focus_input();
        }
    }

    /// Search button behavior.
    #[wasm_bindgen]
    pub fn toggle(&self) {
        let was_open = self.session.borrow().is_open();
        self.session.borrow_mut().toggle();
        if !was_open && self.session.borrow().is_open() {
            self.focus_input();
        }
    }

    /// Re-run the search for a new input value.
    #[wasm_bindgen(js_name = "queryChange")]
    pub fn query_change(&self, query: &str) -> Result<JsValue, JsValue> {
        let mut session = self.session.borrow_mut();
        session.query_change(query);
        let view = JsResultSet::new(session.results(), query, session.state());
        to_value(&view).map_err(js_err)
    }

    /// Navigate to result `index` and close the panel.
    #[wasm_bindgen]
    pub fn select(&self, index: usize) -> bool {
        let scheduler = Rc::clone(&self.scheduler);
        self.session.borrow_mut().select(index, scheduler.as_ref())
    }

    #[wasm_bindgen]
    pub fn close(&self) {
        self.session.borrow_mut().close();
    }

    fn focus_input(&self) {
        let Some(input) = self.input.clone() else {
            return;
        };
        self.scheduler.schedule(
            self.focus_delay,
            Box::new(move || {
                if let Err(err) = input.focus() {
                    warn!(?err, "failed to focus search input");
                }
            }),
        );
    }
}

fn event_element(event: &MouseEvent) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element(),
    }
}

// ============================================================================
// CATALOG BINDING
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCatalogView<'a> {
    query: &'a str,
    total_count: usize,
    filtered_count: usize,
    current_page: usize,
    total_pages: usize,
    records: Vec<&'a Record>,
    window: PageWindow,
    has_prev: bool,
    has_next: bool,
}

/// Filter and pagination state for one resource page.
#[wasm_bindgen]
pub struct ScourCatalog {
    paginator: CatalogPaginator<Record>,
}

#[wasm_bindgen]
impl ScourCatalog {
    /// `records` is an array of `{ id, ...fields }` objects; `config` an
    /// optional `CatalogConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue, config: JsValue) -> Result<ScourCatalog, JsValue> {
        let records: Vec<Record> = serde_wasm_bindgen::from_value(records)
            .map_err(|e| JsValue::from_str(&format!("Invalid records: {}", e)))?;
        let config: CatalogConfig = if config.is_undefined() || config.is_null() {
            CatalogConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        let paginator = CatalogPaginator::new(records, &config).map_err(js_err)?;
        Ok(ScourCatalog { paginator })
    }

    /// Current view without changing state.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = self.paginator.view();
        let js = JsCatalogView {
            query: self.paginator.query(),
            total_count: view.total_count,
            filtered_count: view.filtered_count,
            current_page: view.current_page,
            total_pages: view.total_pages,
            records: view.records,
            window: view.window,
            has_prev: view.has_prev,
            has_next: view.has_next,
        };
        to_value(&js).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "setQuery")]
    pub fn set_query(&mut self, query: &str) -> Result<JsValue, JsValue> {
        self.paginator.set_query(query);
        self.view()
    }

    /// Reset affordance behind "Clear Search".
    #[wasm_bindgen]
    pub fn clear(&mut self) -> Result<JsValue, JsValue> {
        self.paginator.clear();
        self.view()
    }

    #[wasm_bindgen(js_name = "goToPage")]
    pub fn go_to_page(&mut self, page: usize) -> Result<JsValue, JsValue> {
        self.paginator.go_to_page(page).map_err(js_err)?;
        self.view()
    }

    #[wasm_bindgen(js_name = "nextPage")]
    pub fn next_page(&mut self) -> Result<JsValue, JsValue> {
        self.paginator.next_page();
        self.view()
    }

    #[wasm_bindgen(js_name = "prevPage")]
    pub fn prev_page(&mut self) -> Result<JsValue, JsValue> {
        self.paginator.prev_page();
        self.view()
    }
}
