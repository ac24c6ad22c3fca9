// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seam between the search core and whatever tree it scans.
//!
//! The core never creates, destroys or restructures nodes. It reads text,
//! tests containment, scrolls, and flips two inline style properties on one
//! element at a time. That is the whole capability surface, so a real DOM,
//! a parsed static page and a test double all fit behind it.

use std::fmt;

/// Inline style properties the emphasis pulse touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    BackgroundColor,
    Transition,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Transition => "transition",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Read access to a tree of text-bearing elements, plus the two visual side
/// effects navigation needs.
///
/// Mutating methods take `&self`: the tree is shared with normal page
/// rendering and owned elsewhere, implementations use whatever interior
/// mutability their backing store has.
pub trait TextNodeSource {
    /// Non-owning element handle. Cloning must be cheap.
    type Node: Clone;

    /// Every element matching any of `selectors`, in document order, each
    /// element at most once.
    fn query_all(&self, selectors: &[String]) -> Vec<Self::Node>;

    /// True if `node` is `container` or one of its descendants.
    fn contains(&self, container: &Self::Node, node: &Self::Node) -> bool;

    /// Flattened text content of `node` (all descendant text, untrimmed).
    fn text(&self, node: &Self::Node) -> String;

    /// Smoothly scroll `node` to the vertical center of the viewport.
    fn scroll_into_view(&self, node: &Self::Node);

    /// Current inline value of `prop`, empty when unset.
    fn style(&self, node: &Self::Node, prop: StyleProperty) -> String;

    /// Set the inline value of `prop`; an empty value clears it.
    fn set_style(&self, node: &Self::Node, prop: StyleProperty, value: &str);
}
