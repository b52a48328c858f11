//! Concrete node kinds
//!
//! One newtype per content-model shape; the categories a kind belongs
//! to are fixed by which marker traits it implements. The tag
//! constructor catalogue (`weft-tags`) picks the right kind per tag.

use crate::category::{
    Block, Container, Inline, ListItem, MapArea, Metadata, OptionContent, OptionItem,
};
use crate::error::DomError;
use crate::node::{Child, Element, IntoChild, Markup, Text};

macro_rules! markup_impls {
    ($name:ident) => {
        impl Markup for $name {
            fn element(&self) -> &Element {
                &self.0
            }

            fn element_mut(&mut self) -> &mut Element {
                &mut self.0
            }

            fn from_element(element: Element) -> Self {
                Self(element)
            }
        }

        impl IntoChild for $name {
            fn into_child(self) -> Child {
                Child::Element(self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_html())
            }
        }
    };
}

/// Generic block-level container (div, p, section, form, ...).
#[derive(Debug)]
pub struct BlockNode(Element);

impl BlockNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(BlockNode);
impl Block for BlockNode {}
impl<N: Block> Container<N> for BlockNode {}

/// Generic inline container (span, em, button, ...).
#[derive(Debug)]
pub struct InlineNode(Element);

impl InlineNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(InlineNode);
impl Block for InlineNode {}
impl Inline for InlineNode {}
impl<N: Inline> Container<N> for InlineNode {}

/// Self-closing element with no content (br, hr, wbr).
#[derive(Debug)]
pub struct Leaf(Element);

impl Leaf {
    pub fn new(tag: &str) -> Self {
        Self(Element::leaf(tag))
    }
}

markup_impls!(Leaf);
impl Block for Leaf {}
impl Inline for Leaf {}

/// Element holding only text (title, abbr, var, time).
#[derive(Debug)]
pub struct Plain(Element);

impl Plain {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(Plain);
impl Block for Plain {}
impl Inline for Plain {}
impl Metadata for Plain {}
impl Container<Text> for Plain {}

/// Self-closing head element (base, link, meta).
#[derive(Debug)]
pub struct MetadataLeaf(Element);

impl MetadataLeaf {
    pub fn new(tag: &str) -> Self {
        Self(Element::leaf(tag))
    }
}

markup_impls!(MetadataLeaf);
impl Metadata for MetadataLeaf {}

/// Text-bearing metadata element (script, style, noscript), also
/// placeable in body content.
#[derive(Debug)]
pub struct MetadataNode(Element);

impl MetadataNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(MetadataNode);
impl Block for MetadataNode {}
impl Inline for MetadataNode {}
impl Metadata for MetadataNode {}
impl Container<Text> for MetadataNode {}

/// The `template` element: inert, accepts any node.
#[derive(Debug)]
pub struct Template(Element);

impl Template {
    pub fn new() -> Self {
        Self(Element::new("template"))
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

markup_impls!(Template);
impl Block for Template {}
impl Inline for Template {}
impl Metadata for Template {}
impl<N: IntoChild> Container<N> for Template {}

/// Ordered or unordered list; accepts list items only.
#[derive(Debug)]
pub struct ListNode(Element);

impl ListNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(ListNode);
impl Block for ListNode {}
impl<N: ListItem> Container<N> for ListNode {}

/// A list item; holds block content.
#[derive(Debug)]
pub struct ListElt(Element);

impl ListElt {
    pub fn new() -> Self {
        Self(Element::new("li"))
    }
}

impl Default for ListElt {
    fn default() -> Self {
        Self::new()
    }
}

markup_impls!(ListElt);
impl ListItem for ListElt {}
impl<N: Block> Container<N> for ListElt {}

/// Select-like container (select, datalist); accepts option items only.
#[derive(Debug)]
pub struct SelectNode(Element);

impl SelectNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(SelectNode);
impl Block for SelectNode {}
impl Inline for SelectNode {}
impl<N: OptionItem> Container<N> for SelectNode {}

/// An option or option group; holds text or nested option items.
#[derive(Debug)]
pub struct OptionNode(Element);

impl OptionNode {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(OptionNode);
impl OptionItem for OptionNode {}
impl OptionContent for OptionNode {}
impl<N: OptionContent> Container<N> for OptionNode {}

/// Image map container; accepts map-area-eligible nodes only.
#[derive(Debug)]
pub struct MapNode(Element);

impl MapNode {
    pub fn new() -> Self {
        Self(Element::new("map"))
    }
}

impl Default for MapNode {
    fn default() -> Self {
        Self::new()
    }
}

markup_impls!(MapNode);
impl Block for MapNode {}
impl Inline for MapNode {}
impl<N: MapArea> Container<N> for MapNode {}

/// Anchor-like element (a, area): inline content that is also
/// eligible inside an image map.
#[derive(Debug)]
pub struct MapElement(Element);

impl MapElement {
    pub fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }
}

markup_impls!(MapElement);
impl Block for MapElement {}
impl Inline for MapElement {}
impl MapArea for MapElement {}
impl<N: Inline> Container<N> for MapElement {}

/// The document head; accepts metadata content only.
#[derive(Debug)]
pub struct Header(Element);

impl Header {
    pub fn new() -> Self {
        Self(Element::new("head"))
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

markup_impls!(Header);
impl<N: Metadata> Container<N> for Header {}

/// The document body; accepts any node.
#[derive(Debug)]
pub struct Body(Element);

impl Body {
    pub fn new() -> Self {
        Self(Element::new("body"))
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

markup_impls!(Body);
impl<N: IntoChild> Container<N> for Body {}

/// Escape hatch: a container belonging to every category, bypassing
/// the content-model checks for tags the catalogue does not model.
#[derive(Debug)]
pub struct UnsafeNode(Element);

impl UnsafeNode {
    pub fn new(tag: &str) -> Result<Self, DomError> {
        validate_tag_name(tag)?;
        Ok(Self(Element::new(tag)))
    }
}

markup_impls!(UnsafeNode);
impl Block for UnsafeNode {}
impl Inline for UnsafeNode {}
impl Metadata for UnsafeNode {}
impl ListItem for UnsafeNode {}
impl OptionItem for UnsafeNode {}
impl OptionContent for UnsafeNode {}
impl MapArea for UnsafeNode {}
impl<N: IntoChild> Container<N> for UnsafeNode {}

/// Escape hatch counterpart of [`Leaf`], belonging to every category.
#[derive(Debug)]
pub struct UnsafeLeaf(Element);

impl UnsafeLeaf {
    pub fn new(tag: &str) -> Result<Self, DomError> {
        validate_tag_name(tag)?;
        Ok(Self(Element::leaf(tag)))
    }
}

markup_impls!(UnsafeLeaf);
impl Block for UnsafeLeaf {}
impl Inline for UnsafeLeaf {}
impl Metadata for UnsafeLeaf {}
impl ListItem for UnsafeLeaf {}
impl OptionItem for UnsafeLeaf {}
impl OptionContent for UnsafeLeaf {}
impl MapArea for UnsafeLeaf {}

// Text composes wherever content flows, and inside options.
impl Block for Text {}
impl Inline for Text {}
impl OptionContent for Text {}

/// Tag names may only enter the model through the unsafe escape
/// hatches; everything else is fixed by the catalogue.
fn validate_tag_name(name: &str) -> Result<(), DomError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DomError::InvalidTagName { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_accepts_items_in_order() {
        let list = ListNode::new("ul")
            .append(ListElt::new().append(BlockNode::new("div")))
            .append(ListElt::new());

        assert_eq!(list.element().children().len(), 2);
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut div = BlockNode::new("div");
        div.push(BlockNode::new("p"));
        div.push_front(BlockNode::new("h1"));

        let Child::Element(first) = &div.element().children()[0] else {
            panic!("expected element child");
        };
        assert_eq!(first.tag(), "h1");
    }

    #[test]
    fn test_unsafe_tag_name_validation() {
        assert!(UnsafeNode::new("custom-widget").is_ok());
        assert!(UnsafeNode::new("").is_err());
        assert!(UnsafeNode::new("<script>").is_err());
        assert!(UnsafeLeaf::new("1up").is_err());
    }

    #[test]
    fn test_duplicate_preserves_kind_and_attrs() {
        let anchor = MapElement::new("a").attr("href", "/home").colorize();
        let copy = anchor.duplicate();

        assert_eq!(copy.get_attribute("href"), Some("/home"));
        assert!(copy.is_colored());
        assert_ne!(copy.uid(), anchor.uid());
    }
}
