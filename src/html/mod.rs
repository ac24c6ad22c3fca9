// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static HTML pages as a searchable element tree.
//!
//! `HtmlDocument` is the off-browser `TextNodeSource`: it parses a page once
//! into an arena of elements and answers the same questions a live DOM would.
//! Scroll requests and inline style writes are recorded so callers (the CLI,
//! tests) can observe what navigation would have done.
//!
//! Selectors are single compound selectors: a tag name, `#id`, `.class`, or a
//! tag followed by any of those (`div.search-box`). `*` matches any element.
//! Combinators and attribute selectors are not supported.

mod parse;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::live::{StyleProperty, TextNodeSource};

/// Handle to an element in an `HtmlDocument`, valid for that document only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Child {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<Child>,
}

struct DocumentInner {
    elements: Vec<ElementData>,
    styles: RefCell<HashMap<(NodeId, StyleProperty), String>>,
    scrolled: RefCell<Vec<NodeId>>,
}

/// A parsed HTML page. Clones share the same tree and style state.
#[derive(Clone)]
pub struct HtmlDocument {
    inner: Rc<DocumentInner>,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Result<Self> {
        let parsed = parse::parse_html(html)?;
        let styles = parsed
            .styles
            .into_iter()
            .map(|(node, prop, value)| ((node, prop), value))
            .collect();
        Ok(Self {
            inner: Rc::new(DocumentInner {
                elements: parsed.elements,
                styles: RefCell::new(styles),
                scrolled: RefCell::new(Vec::new()),
            }),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&html)
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.inner.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.elements.is_empty()
    }

    /// Elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        (0..self.len())
            .map(NodeId)
            .filter(|&id| selector.matches(self.element(id)))
            .collect()
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        (0..self.len())
            .map(NodeId)
            .find(|&id| selector.matches(self.element(id)))
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.element(node).tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).parent
    }

    /// Every element handed to `scroll_into_view`, oldest first.
    pub fn scrolled(&self) -> Vec<NodeId> {
        self.inner.scrolled.borrow().clone()
    }

    fn element(&self, node: NodeId) -> &ElementData {
        &self.inner.elements[node.0]
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        for child in &self.element(node).children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(id) => self.collect_text(*id, out),
            }
        }
    }
}

impl fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("elements", &self.len())
            .finish()
    }
}

impl TextNodeSource for HtmlDocument {
    type Node = NodeId;

    fn query_all(&self, selectors: &[String]) -> Vec<NodeId> {
        let selectors: Vec<Selector> = selectors.iter().filter_map(|s| Selector::parse(s)).collect();
        (0..self.len())
            .map(NodeId)
            .filter(|&id| {
                let element = self.element(id);
                selectors.iter().any(|s| s.matches(element))
            })
            .collect()
    }

    fn contains(&self, container: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *container {
                return true;
            }
            current = self.element(id).parent;
        }
        false
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.collect_text(*node, &mut out);
        out
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.inner.scrolled.borrow_mut().push(*node);
    }

    fn style(&self, node: &NodeId, prop: StyleProperty) -> String {
        self.inner
            .styles
            .borrow()
            .get(&(*node, prop))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, node: &NodeId, prop: StyleProperty, value: &str) {
        let mut styles = self.inner.styles.borrow_mut();
        if value.is_empty() {
            styles.remove(&(*node, prop));
        } else {
            styles.insert((*node, prop), value.to_string());
        }
    }
}

/// One compound selector: optional tag, optional id, any classes.
#[derive(Debug, Default)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut selector = Selector::default();
        let tag_end = input.find(['#', '.']).unwrap_or(input.len());
        let tag = &input[..tag_end];
        if !tag.is_empty() && tag != "*" {
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &input[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' => selector.id = Some(name.to_string()),
                _ => selector.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }
        Some(selector)
    }

    fn matches(&self, element: &ElementData) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == element.tag)
            && self
                .id
                .as_ref()
                .is_none_or(|id| element.id.as_deref() == Some(id))
            && self
                .classes
                .iter()
                .all(|c| element.classes.iter().any(|have| have == c))
    }
}
