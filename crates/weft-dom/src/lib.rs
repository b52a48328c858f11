//! Weft DOM - Typed HTML document construction
//!
//! Server-side HTML built through a typed object graph instead of
//! string templates. Node kinds carry compile-time content-model
//! categories, so a list only accepts list items, a head only accepts
//! metadata, and so on; violations are type errors, not runtime
//! failures. Colorized nodes are collected into a companion script
//! that hands the client stable selectors and property bags.

mod attrs;
mod category;
mod document;
mod error;
mod kinds;
mod node;
mod script;
mod serializer;
mod uid;

pub use attrs::{Attr, AttrMap};
pub use category::{
    Block, Container, Inline, ListItem, MapArea, Metadata, OptionContent, OptionItem,
};
pub use document::Document;
pub use error::DomError;
pub use kinds::{
    Body, BlockNode, Header, InlineNode, Leaf, ListElt, ListNode, MapElement, MapNode,
    MetadataLeaf, MetadataNode, OptionNode, Plain, SelectNode, Template, UnsafeLeaf,
    UnsafeNode,
};
pub use node::{Child, Element, IntoChild, Markup, Text};
pub use script::{ClientHandle, Procedure, ELEMENTS_GLOBAL};
pub use serializer::DATA_ID_ATTR;
pub use uid::data_id;
