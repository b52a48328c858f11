//! Markup serialization
//!
//! Recursive string emission of a node and its subtree. No
//! pretty-printing: output is a flat concatenation matching
//! construction order. Attribute order is fixed: identifier
//! attribute first, then valued attributes in insertion order, then
//! deduplicated flags.

use crate::node::{Child, Element, Text};

/// Attribute carrying the node's stable identifier.
pub const DATA_ID_ATTR: &str = "data-id";

/// Elements whose text content is emitted verbatim, never escaped.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

pub(crate) fn render_node(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

pub(crate) fn render_text(text: &Text) -> String {
    let mut out = String::new();
    write_text(text, &mut out);
    out
}

pub(crate) fn write_element(element: &Element, out: &mut String) {
    if element.is_self_closing() {
        write_tag_prefix(element, out);
        out.push_str("/>");
        return;
    }
    write_open_tag(element, out);
    write_children(element, out);
    write_close_tag(element, out);
}

pub(crate) fn write_open_tag(element: &Element, out: &mut String) {
    write_tag_prefix(element, out);
    out.push('>');
}

pub(crate) fn write_children(element: &Element, out: &mut String) {
    let raw = RAW_TEXT_TAGS.contains(&element.tag());
    for child in element.children() {
        match child {
            Child::Element(child) => write_element(child, out),
            Child::Text(text) if raw => out.push_str(text.content()),
            Child::Text(text) => write_text(text, out),
        }
    }
}

pub(crate) fn write_close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_tag_prefix(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    out.push(' ');
    out.push_str(DATA_ID_ATTR);
    out.push_str("=\"");
    out.push_str(element.uid());
    out.push('"');
    for (name, value) in element.attrs().iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attribute(value, out);
        out.push('"');
    }
    for flag in element.attrs().flags() {
        out.push(' ');
        out.push_str(flag);
    }
}

fn write_text(text: &Text, out: &mut String) {
    if text.is_escaped() {
        escape_text(text.content(), out);
    } else {
        out.push_str(text.content());
    }
}

/// Escape CDATA text content.
fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape an attribute value.
fn escape_attribute(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
