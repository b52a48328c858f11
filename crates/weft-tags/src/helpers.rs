//! Construction helpers
//!
//! Shorthand factories covering the common attribute-plus-content
//! patterns, built on top of the raw catalogue.

use weft_dom::{data_id, Block, Container, InlineNode, ListElt, ListNode, Markup, SelectNode};

use crate::tags;

/// Create an image with its source and alternative text.
pub fn img(src: &str, alt: &str) -> InlineNode {
    tags::img().attr("src", src).attr("alt", alt)
}

/// Wrap any block-level node in a list item.
pub fn list_item(node: impl Block) -> ListElt {
    tags::li().append(node)
}

/// Create an unordered list from pre-built items.
pub fn unordered_list(items: impl IntoIterator<Item = ListElt>) -> ListNode {
    items.into_iter().fold(tags::ul(), |list, item| list.append(item))
}

/// Create an ordered list from pre-built items.
pub fn ordered_list(items: impl IntoIterator<Item = ListElt>) -> ListNode {
    items.into_iter().fold(tags::ol(), |list, item| list.append(item))
}

/// Create a named input field.
pub fn input_field(kind: &str, name: &str, value: &str) -> InlineNode {
    tags::input()
        .attr("type", kind)
        .attr("name", name)
        .attr("value", value)
}

/// Create a named select from `(value, label)` pairs.
pub fn select_from<'a>(
    name: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> SelectNode {
    options
        .into_iter()
        .fold(tags::select().attr("name", name), |select, (value, label)| {
            select.append(tags::option().attr("value", value).append(tags::pcdata(label)))
        })
}

/// Create a text input backed by a datalist of suggestions, wrapped in
/// a span so the pair travels as one inline node.
pub fn completable_input<'a>(
    name: &str,
    suggestions: impl IntoIterator<Item = &'a str>,
) -> InlineNode {
    let list_id = data_id("list");
    let datalist = suggestions
        .into_iter()
        .fold(tags::datalist().attr("id", &list_id), |list, suggestion| {
            list.append(tags::option().attr("value", suggestion).append(tags::pcdata(suggestion)))
        });
    let field = tags::input()
        .attr("type", "text")
        .attr("name", name)
        .attr("list", &list_id);
    tags::span().append(field).append(datalist)
}
