// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the in-memory document tree and listener registry the live
//! search tests run against, so no test needs a browser.

#![doc(hidden)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::catalog::Record;
use crate::live::{ListenerRegistry, StyleProperty, TextNodeSource};

#[derive(Debug)]
struct MemoryNode {
    tag: String,
    text: String,
    parent: Option<usize>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    nodes: RefCell<Vec<MemoryNode>>,
    styles: RefCell<HashMap<(usize, StyleProperty), String>>,
    scrolled: RefCell<Vec<usize>>,
}

/// Hand-built element tree. Nodes are `usize` ids in insertion order, which
/// is treated as document order. Selectors match tag names only.
///
/// Clones share the same tree, which is what the emphasis pulse needs to
/// restore styles from a scheduled task.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    inner: Rc<MemoryInner>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. `text` is its own text; `text()` also includes
    /// the text of descendants pushed later.
    pub fn push(&self, tag: &str, text: &str, parent: Option<usize>) -> usize {
        let mut nodes = self.inner.nodes.borrow_mut();
        nodes.push(MemoryNode {
            tag: tag.to_string(),
            text: text.to_string(),
            parent,
        });
        nodes.len() - 1
    }

    /// Convenience for a flat page of `(tag, text)` elements.
    pub fn from_flat(elements: &[(&str, &str)]) -> Self {
        let tree = Self::new();
        for (tag, text) in elements {
            tree.push(tag, text, None);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.inner.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every node passed to `scroll_into_view`, oldest first.
    pub fn scrolled(&self) -> Vec<usize> {
        self.inner.scrolled.borrow().clone()
    }

    fn is_descendant(&self, ancestor: usize, node: usize) -> bool {
        let nodes = self.inner.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes.get(id).and_then(|n| n.parent);
        }
        false
    }
}

impl TextNodeSource for MemoryTree {
    type Node = usize;

    fn query_all(&self, selectors: &[String]) -> Vec<usize> {
        self.inner
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| selectors.iter().any(|s| s.eq_ignore_ascii_case(&n.tag)))
            .map(|(id, _)| id)
            .collect()
    }

    fn contains(&self, container: &usize, node: &usize) -> bool {
        self.is_descendant(*container, *node)
    }

    fn text(&self, node: &usize) -> String {
        let len = self.len();
        let mut out = String::new();
        for id in *node..len {
            if self.is_descendant(*node, id) {
                out.push_str(&self.inner.nodes.borrow()[id].text);
            }
        }
        out
    }

    fn scroll_into_view(&self, node: &usize) {
        self.inner.scrolled.borrow_mut().push(*node);
    }

    fn style(&self, node: &usize, prop: StyleProperty) -> String {
        self.inner
            .styles
            .borrow()
            .get(&(*node, prop))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, node: &usize, prop: StyleProperty, value: &str) {
        let mut styles = self.inner.styles.borrow_mut();
        if value.is_empty() {
            styles.remove(&(*node, prop));
        } else {
            styles.insert((*node, prop), value.to_string());
        }
    }
}

/// Listener registry that counts live guards.
#[derive(Debug, Clone, Default)]
pub struct CountingListeners {
    active: Rc<Cell<usize>>,
    acquired: Rc<Cell<usize>>,
}

impl CountingListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guards currently alive.
    pub fn active(&self) -> usize {
        self.active.get()
    }

    /// Guards ever handed out.
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }
}

/// Decrements the active count on drop.
#[derive(Debug)]
pub struct CountingGuard {
    active: Rc<Cell<usize>>,
}

impl Drop for CountingGuard {
    fn drop(&mut self) {
        self.active.set(self.active.get() - 1);
    }
}

impl ListenerRegistry for CountingListeners {
    type Guard = CountingGuard;

    fn acquire(&self) -> CountingGuard {
        self.active.set(self.active.get() + 1);
        self.acquired.set(self.acquired.get() + 1);
        CountingGuard {
            active: Rc::clone(&self.active),
        }
    }
}

/// Create a catalog record with a title and type.
pub fn make_record(id: &str, title: &str, kind: &str) -> Record {
    Record::new(id).with("title", title).with("type", kind)
}

/// `n` reports titled "Report 1".."Report n".
pub fn make_reports(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| make_record(&format!("R-{i}"), &format!("Report {i}"), "PDF"))
        .collect()
}
