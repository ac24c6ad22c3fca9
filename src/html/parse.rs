// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lenient HTML to element-arena conversion.
//!
//! quick-xml does the tokenizing with end-name checks turned off; this module
//! supplies the HTML knowledge it lacks:
//!
//! - a `<` that cannot open a tag is text, and `<!…>`/`<?…>` forms other
//!   than comments and doctypes are bogus comments (see [`repair_markup`]);
//! - void elements never take children;
//! - starting a `p`, `li`, `td`, `th`, `tr`, `option` (and friends) closes
//!   the open element it implicitly ends;
//! - a stray close tag pops back to its nearest open match;
//! - entities are decoded with the HTML table;
//! - `<script>`/`<style>` bodies are not text.
//!
//! A tokenizer error keeps everything parsed before it. Elements are stored
//! in the order their start tags appear, which is document order.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::warn;

use super::{Child, ElementData, NodeId};
use crate::error::{Error, Result};
use crate::live::StyleProperty;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose body is not document text.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements an open `p` is not closed across.
const SCOPE_BOUNDARIES: &[&str] = &[
    "applet", "button", "caption", "html", "marquee", "object", "table", "td", "template", "th",
];

/// Start tags that close an open `p`.
const PARAGRAPH_CLOSERS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "menu", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// `(closes, stops at)` for a start tag that ends an open sibling.
fn implied_end(tag: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match tag {
        "li" => Some((&["li"], &["ul", "ol", "menu", "table"])),
        "dd" | "dt" => Some((&["dd", "dt"], &["dl"])),
        "td" | "th" => Some((&["td", "th"], &["tr", "table"])),
        "tr" => Some((&["tr"], &["table", "tbody", "thead", "tfoot"])),
        "tbody" | "thead" | "tfoot" => Some((&["tbody", "thead", "tfoot"], &["table"])),
        "option" => Some((&["option"], &["select", "datalist", "optgroup"])),
        "optgroup" => Some((&["optgroup", "option"], &["select"])),
        _ => None,
    }
}

pub(super) struct ParsedDocument {
    pub elements: Vec<ElementData>,
    /// Inline styles found in `style` attributes.
    pub styles: Vec<(NodeId, StyleProperty, String)>,
}

pub(super) fn parse_html(html: &str) -> Result<ParsedDocument> {
    let html = repair_markup(html);
    let mut reader = Reader::from_str(&html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut doc = ParsedDocument {
        elements: Vec::new(),
        styles: Vec::new(),
    };
    let mut open: Vec<NodeId> = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) if doc.elements.is_empty() => {
                return Err(Error::Html {
                    position: reader.error_position(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                warn!(
                    position = reader.error_position(),
                    error = %e,
                    "malformed HTML, keeping the elements parsed so far"
                );
                break;
            }
        };

        match event {
            Event::Start(start) => {
                let tag = lowercase_name(start.name().as_ref());
                close_implied(&mut open, &doc.elements, &tag);
                let is_void = VOID_ELEMENTS.contains(&tag.as_str());
                let node = push_element(&mut doc, &open, tag, &start);
                if !is_void {
                    open.push(node);
                }
            }
            Event::Empty(start) => {
                let tag = lowercase_name(start.name().as_ref());
                close_implied(&mut open, &doc.elements, &tag);
                push_element(&mut doc, &open, tag, &start);
            }
            Event::End(end) => {
                let name = lowercase_name(end.name().as_ref());
                if let Some(pos) = open
                    .iter()
                    .rposition(|id| doc.elements[id.0].tag == name)
                {
                    open.truncate(pos);
                }
            }
            Event::Text(text) => {
                let raw = String::from_utf8_lossy(&text);
                push_text(&mut doc, &open, &html_escape::decode_html_entities(&raw));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

/// What a `<` in the source starts.
#[derive(Debug, PartialEq, Eq)]
enum Markup {
    /// A tag, end tag, comment or doctype; left for quick-xml.
    Tag,
    /// Dropped through the next `>`.
    BogusComment,
    /// A literal `<`.
    Text,
}

fn classify(after_lt: &[u8]) -> Markup {
    match after_lt {
        [c, ..] if c.is_ascii_alphabetic() => Markup::Tag,
        [b'/', c, ..] if c.is_ascii_alphabetic() => Markup::Tag,
        [b'!', b'-', b'-', ..] => Markup::Tag,
        [b'!', rest @ ..] if rest.len() >= 7 && rest[..7].eq_ignore_ascii_case(b"doctype") => {
            Markup::Tag
        }
        [b'!' | b'?' | b'/', ..] => Markup::BogusComment,
        _ => Markup::Text,
    }
}

/// Rewrite the input so quick-xml only ever sees markup it can tokenize the
/// way a browser would: stray `<` become `&lt;` and bogus comments
/// (`<![endif]>`, `<?php ... >`, `</ >`) are removed. Borrowed when nothing
/// needed rewriting.
fn repair_markup(html: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(found) = html[cursor..].find('<') {
        let at = cursor + found;
        match classify(&html.as_bytes()[at + 1..]) {
            Markup::Tag => cursor = at + 1,
            Markup::BogusComment => {
                out.push_str(&html[copied..at]);
                let end = html[at..].find('>').map_or(html.len(), |gt| at + gt + 1);
                copied = end;
                cursor = end;
            }
            Markup::Text => {
                out.push_str(&html[copied..at]);
                out.push_str("&lt;");
                copied = at + 1;
                cursor = at + 1;
            }
        }
    }

    if copied == 0 {
        return Cow::Borrowed(html);
    }
    out.push_str(&html[copied..]);
    Cow::Owned(out)
}

/// Pop the open element that starting `tag` implicitly ends, if any.
fn close_implied(open: &mut Vec<NodeId>, elements: &[ElementData], tag: &str) {
    if PARAGRAPH_CLOSERS.contains(&tag) {
        close_nearest(open, elements, &["p"], SCOPE_BOUNDARIES);
    }
    if let Some((closes, stops)) = implied_end(tag) {
        close_nearest(open, elements, closes, stops);
    }
}

fn close_nearest(open: &mut Vec<NodeId>, elements: &[ElementData], closes: &[&str], stops: &[&str]) {
    for pos in (0..open.len()).rev() {
        let tag = elements[open[pos].0].tag.as_str();
        if closes.contains(&tag) {
            open.truncate(pos);
            return;
        }
        if stops.contains(&tag) {
            return;
        }
    }
}

fn lowercase_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).to_ascii_lowercase()
}

fn push_element(
    doc: &mut ParsedDocument,
    open: &[NodeId],
    tag: String,
    start: &BytesStart<'_>,
) -> NodeId {
    let node = NodeId(doc.elements.len());
    let parent = open.last().copied();
    let mut element = ElementData {
        tag,
        id: None,
        classes: Vec::new(),
        parent,
        children: Vec::new(),
    };

    for attr in start.html_attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        let value = html_escape::decode_html_entities(&value);
        match attr.key.as_ref() {
            b"id" => element.id = Some(value.trim().to_string()),
            b"class" => {
                element.classes = value.split_whitespace().map(str::to_string).collect();
            }
            b"style" => doc.styles.extend(
                parse_inline_style(&value)
                    .into_iter()
                    .map(|(prop, v)| (node, prop, v)),
            ),
            _ => {}
        }
    }

    if let Some(parent) = parent {
        doc.elements[parent.0].children.push(Child::Element(node));
    }
    doc.elements.push(element);
    node
}

fn push_text(doc: &mut ParsedDocument, open: &[NodeId], text: &str) {
    let Some(&parent) = open.last() else {
        return;
    };
    if text.is_empty() || RAW_TEXT_ELEMENTS.contains(&doc.elements[parent.0].tag.as_str()) {
        return;
    }
    let children = &mut doc.elements[parent.0].children;
    // Adjacent text (split by comments or entities) is merged.
    if let Some(Child::Text(prev)) = children.last_mut() {
        prev.push_str(text);
    } else {
        children.push(Child::Text(text.to_string()));
    }
}

/// The inline declarations the emphasis pulse cares about.
fn parse_inline_style(style: &str) -> Vec<(StyleProperty, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let prop = match name.trim().to_ascii_lowercase().as_str() {
                "background-color" => StyleProperty::BackgroundColor,
                "transition" => StyleProperty::Transition,
                _ => return None,
            };
            Some((prop, value.trim().to_string()))
        })
        .collect()
}
