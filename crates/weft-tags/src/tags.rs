//! Tag constructor catalogue
//!
//! One factory per HTML tag, returning the correctly-categorized node
//! kind. Composition mistakes (a `li` outside a list, a `meta` in the
//! body) fail to compile.

use weft_dom::{
    BlockNode, Body, Container, Document, DomError, Header, InlineNode, Leaf, ListElt,
    ListNode, MapElement, MapNode, Markup, MetadataLeaf, MetadataNode, OptionNode, Plain,
    SelectNode, Template, Text, UnsafeLeaf, UnsafeNode,
};

fn block(tag: &str) -> BlockNode {
    BlockNode::new(tag)
}

fn inline(tag: &str) -> InlineNode {
    InlineNode::new(tag)
}

fn leaf(tag: &str) -> Leaf {
    Leaf::new(tag)
}

/// Create a document with easy access to head and body. Charset and
/// language default to `utf-8` / `en`.
pub fn document(title: &str) -> Document {
    Document::new(title)
}

/// Create a detached head element.
pub fn head() -> Header {
    Header::new()
}

/// Create a detached body element.
pub fn body() -> Body {
    Body::new()
}

pub fn base() -> MetadataLeaf {
    MetadataLeaf::new("base")
}

pub fn link() -> MetadataLeaf {
    MetadataLeaf::new("link")
}

pub fn meta() -> MetadataLeaf {
    MetadataLeaf::new("meta")
}

pub fn noscript() -> MetadataNode {
    MetadataNode::new("noscript")
}

pub fn script() -> MetadataNode {
    MetadataNode::new("script")
}

pub fn style() -> MetadataNode {
    MetadataNode::new("style")
}

pub fn template() -> Template {
    Template::new()
}

/// Create a title element holding the given text.
pub fn title(value: &str) -> Plain {
    Plain::new("title").append(pcdata(value))
}

pub fn a() -> MapElement {
    MapElement::new("a")
}

pub fn area() -> MapElement {
    MapElement::new("area")
}

/// Create an abbreviation element with its expansion.
pub fn abbr(content: &str, full: &str) -> Plain {
    Plain::new("abbr").attr("title", full).append(pcdata(content))
}

pub fn var(content: &str) -> Plain {
    Plain::new("var").append(pcdata(content))
}

pub fn time(content: &str) -> Plain {
    Plain::new("time").append(pcdata(content))
}

pub fn address() -> BlockNode {
    block("address")
}

pub fn map() -> MapNode {
    MapNode::new()
}

pub fn article() -> BlockNode {
    block("article")
}

pub fn aside() -> BlockNode {
    block("aside")
}

pub fn div() -> BlockNode {
    block("div")
}

pub fn audio() -> InlineNode {
    inline("audio")
}

pub fn video() -> InlineNode {
    inline("video")
}

pub fn sup() -> InlineNode {
    inline("sup")
}

pub fn sub() -> InlineNode {
    inline("sub")
}

pub fn b() -> InlineNode {
    inline("b")
}

pub fn strong() -> InlineNode {
    inline("strong")
}

pub fn span() -> InlineNode {
    inline("span")
}

pub fn bdi() -> InlineNode {
    inline("bdi")
}

pub fn bdo() -> InlineNode {
    inline("bdo")
}

pub fn blockquote() -> BlockNode {
    block("blockquote")
}

pub fn br() -> Leaf {
    leaf("br")
}

pub fn wbr() -> Leaf {
    leaf("wbr")
}

pub fn hr() -> Leaf {
    leaf("hr")
}

pub fn button() -> InlineNode {
    inline("button")
}

pub fn canvas() -> InlineNode {
    inline("canvas")
}

pub fn cite() -> InlineNode {
    inline("cite")
}

pub fn code() -> InlineNode {
    inline("code")
}

/// Create a data element carrying a machine-readable value.
pub fn data(value: &str) -> Leaf {
    leaf("data").attr("value", value)
}

pub fn del() -> InlineNode {
    inline("del")
}

pub fn dfn() -> InlineNode {
    inline("dfn")
}

pub fn em() -> InlineNode {
    inline("em")
}

pub fn img() -> InlineNode {
    inline("img")
}

pub fn small() -> InlineNode {
    inline("small")
}

pub fn i() -> InlineNode {
    inline("i")
}

pub fn mark() -> InlineNode {
    inline("mark")
}

pub fn u() -> InlineNode {
    inline("u")
}

pub fn q() -> InlineNode {
    inline("q")
}

pub fn footer() -> BlockNode {
    block("footer")
}

pub fn header() -> BlockNode {
    block("header")
}

pub fn section() -> BlockNode {
    block("section")
}

pub fn nav() -> BlockNode {
    block("nav")
}

pub fn h1() -> BlockNode {
    block("h1")
}

pub fn h2() -> BlockNode {
    block("h2")
}

pub fn h3() -> BlockNode {
    block("h3")
}

pub fn h4() -> BlockNode {
    block("h4")
}

pub fn h5() -> BlockNode {
    block("h5")
}

pub fn h6() -> BlockNode {
    block("h6")
}

pub fn ins() -> BlockNode {
    block("ins")
}

pub fn main() -> BlockNode {
    block("main")
}

pub fn p() -> BlockNode {
    block("p")
}

pub fn pre() -> BlockNode {
    block("pre")
}

pub fn ol() -> ListNode {
    ListNode::new("ol")
}

pub fn ul() -> ListNode {
    ListNode::new("ul")
}

pub fn li() -> ListElt {
    ListElt::new()
}

pub fn iframe() -> InlineNode {
    inline("iframe")
}

pub fn form() -> BlockNode {
    block("form")
}

pub fn fieldset() -> BlockNode {
    block("fieldset")
}

pub fn label() -> InlineNode {
    inline("label")
}

pub fn legend() -> InlineNode {
    inline("legend")
}

pub fn input() -> InlineNode {
    inline("input")
}

pub fn textarea() -> InlineNode {
    inline("textarea")
}

pub fn keygen() -> InlineNode {
    inline("keygen")
}

pub fn output() -> InlineNode {
    inline("output")
}

pub fn progress() -> InlineNode {
    inline("progress")
}

pub fn meter() -> InlineNode {
    inline("meter")
}

pub fn datalist() -> SelectNode {
    SelectNode::new("datalist")
}

pub fn select() -> SelectNode {
    SelectNode::new("select")
}

pub fn option() -> OptionNode {
    OptionNode::new("option")
}

pub fn optgroup() -> OptionNode {
    OptionNode::new("optgroup")
}

/// Create a raw text node, emitted verbatim.
pub fn pcdata(content: &str) -> Text {
    Text::pcdata(content)
}

/// Create an escaped text node.
pub fn cdata(content: &str) -> Text {
    Text::cdata(content)
}

/// Escape hatch: a container with an arbitrary tag name, belonging to
/// every category. Bypasses the content-model checks.
pub fn unsafe_tag(name: &str) -> Result<UnsafeNode, DomError> {
    UnsafeNode::new(name)
}

/// Escape hatch counterpart of [`unsafe_tag`] for self-closing tags.
pub fn unsafe_leaf(name: &str) -> Result<UnsafeLeaf, DomError> {
    UnsafeLeaf::new(name)
}
