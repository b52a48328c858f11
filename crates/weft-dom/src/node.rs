//! Core node representation
//!
//! `Element` is the erased backing store shared by every concrete node
//! kind; the categorical typing lives in the wrapper types (see
//! `kinds`). Children are exclusively owned: duplication deep-copies
//! the subtree and regenerates every identifier.

use serde_json::Value;

use crate::attrs::AttrMap;
use crate::script::ClientHandle;
use crate::serializer;
use crate::uid;

/// An owned child slot: either a nested element or a text fragment.
#[derive(Debug)]
pub enum Child {
    Element(Element),
    Text(Text),
}

impl Child {
    fn duplicate(&self) -> Child {
        match self {
            Child::Element(element) => Child::Element(element.duplicate()),
            Child::Text(text) => Child::Text(text.clone()),
        }
    }
}

/// A text fragment.
///
/// PCDATA is emitted verbatim; CDATA is HTML-entity-escaped at
/// serialization time. Text is not referenceable: it has no identifier
/// and never appears in the reference tracker.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    escape: bool,
}

impl Text {
    /// Raw text, emitted verbatim.
    pub fn pcdata(content: impl Into<String>) -> Self {
        Self { content: content.into(), escape: false }
    }

    /// Escaped text: `&`, `<`, `>` and quotes become entities.
    pub fn cdata(content: impl Into<String>) -> Self {
        Self { content: content.into(), escape: true }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_escaped(&self) -> bool {
        self.escape
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serializer::render_text(self))
    }
}

/// Conversion of a typed node into an owned child slot.
pub trait IntoChild {
    fn into_child(self) -> Child;
}

impl IntoChild for Text {
    fn into_child(self) -> Child {
        Child::Text(self)
    }
}

/// Erased element: tag, identifier, attributes, client props,
/// reference records and owned children.
#[derive(Debug)]
pub struct Element {
    tag: String,
    uid: String,
    attrs: AttrMap,
    props: Vec<(String, Value)>,
    refs: Vec<ClientHandle>,
    colored: bool,
    children: Vec<Child>,
    self_closing: bool,
}

impl Element {
    /// Create a composite element with a fresh identifier.
    pub fn new(tag: &str) -> Self {
        Self {
            uid: uid::data_id(tag),
            tag: tag.to_string(),
            attrs: AttrMap::new(),
            props: Vec::new(),
            refs: Vec::new(),
            colored: false,
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Create a self-closing element (no children, `<tag .../>`).
    pub fn leaf(tag: &str) -> Self {
        let mut element = Self::new(tag);
        element.self_closing = true;
        element
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Append a child, preserving insertion order.
    pub fn append_child(&mut self, child: Child) {
        if let Child::Element(element) = &child {
            tracing::trace!(
                "appending <{}> ({}) into <{}>",
                element.tag(),
                element.uid(),
                self.tag
            );
        }
        self.children.push(child);
    }

    /// Insert a child before all existing content.
    pub fn prepend_child(&mut self, child: Child) {
        self.children.insert(0, child);
    }

    /// Set an opaque client-side property, passed through verbatim
    /// into the companion script.
    pub fn set_prop(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(slot) = self.props.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = value;
        } else {
            self.props.push((key, value));
        }
    }

    pub fn props(&self) -> &[(String, Value)] {
        &self.props
    }

    /// Mark this element as needed client-side.
    pub fn set_colored(&mut self) {
        self.colored = true;
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Client-side view of this element.
    pub fn handle(&self) -> ClientHandle {
        ClientHandle::new(self.uid.clone(), self.props.clone(), self.colored)
    }

    /// Explicitly record another element (and, transitively, everything
    /// it references) in this element's referenced-set. Idempotent:
    /// entries are keyed by identifier.
    pub fn record_reference(&mut self, handle: ClientHandle, transitive: Vec<ClientHandle>) {
        for entry in std::iter::once(handle).chain(transitive) {
            if !self.refs.iter().any(|known| known.uid() == entry.uid()) {
                self.refs.push(entry);
            }
        }
    }

    /// Handles of every referenceable node reachable from this element:
    /// all element descendants in document order, then explicitly
    /// recorded entries, deduplicated by identifier.
    ///
    /// Computed by walking the owned subtree, so the set stays correct
    /// no matter when descendants were colorized. Live descendant
    /// handles take precedence over recorded snapshots of the same
    /// node; explicit records only contribute nodes outside the
    /// subtree.
    pub fn referenced(&self) -> Vec<ClientHandle> {
        let mut out: Vec<ClientHandle> = Vec::new();
        self.collect_descendants(&mut out);
        self.collect_records(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<ClientHandle>) {
        for child in &self.children {
            if let Child::Element(element) = child {
                push_unique(out, element.handle());
                element.collect_descendants(out);
            }
        }
    }

    fn collect_records(&self, out: &mut Vec<ClientHandle>) {
        for entry in &self.refs {
            push_unique(out, entry.clone());
        }
        for child in &self.children {
            if let Child::Element(element) = child {
                element.collect_records(out);
            }
        }
    }

    /// Deep copy of this element and its subtree, with a fresh
    /// identifier for every copied element. The original is untouched.
    pub fn duplicate(&self) -> Element {
        Element {
            uid: uid::data_id(&self.tag),
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            props: self.props.clone(),
            refs: self.refs.clone(),
            colored: self.colored,
            children: self.children.iter().map(Child::duplicate).collect(),
            self_closing: self.self_closing,
        }
    }
}

fn push_unique(out: &mut Vec<ClientHandle>, entry: ClientHandle) {
    if !out.iter().any(|known| known.uid() == entry.uid()) {
        out.push(entry);
    }
}

/// Common surface of every concrete node kind: attribute mutation,
/// identifier access, reference tracking, duplication and rendering.
///
/// Consuming methods (`attr`, `flag`, `prop`, `colorize`) chain during
/// construction; the `set_*`/`remove_*` forms mutate in place.
pub trait Markup: Sized {
    fn element(&self) -> &Element;
    fn element_mut(&mut self) -> &mut Element;
    fn from_element(element: Element) -> Self;

    fn tag(&self) -> &str {
        self.element().tag()
    }

    fn uid(&self) -> &str {
        self.element().uid()
    }

    /// Set an attribute, replacing any previous value (chaining form).
    fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set_attribute(key, value);
        self
    }

    /// Merge an attribute value, space-separated (chaining form).
    fn merge_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().merge_attribute(key, value);
        self
    }

    /// Set a valueless attribute (chaining form).
    fn flag(mut self, key: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set_flag(key);
        self
    }

    /// Set a client-side property (chaining form).
    fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.element_mut().set_prop(key, value.into());
        self
    }

    /// Mark the node as needed client-side (chaining form).
    fn colorize(mut self) -> Self {
        self.element_mut().set_colored();
        self
    }

    fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.element_mut().attrs_mut().set_attribute(key, value);
    }

    fn merge_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.element_mut().attrs_mut().merge_attribute(key, value);
    }

    fn set_flag(&mut self, key: impl Into<String>) {
        self.element_mut().attrs_mut().set_flag(key);
    }

    fn remove_attributes(&mut self, keys: &[&str]) {
        self.element_mut().attrs_mut().remove_attributes(keys);
    }

    fn get_attribute(&self, key: &str) -> Option<&str> {
        self.element().attrs().get_attribute(key)
    }

    fn has_flag(&self, key: &str) -> bool {
        self.element().attrs().has_flag(key)
    }

    fn is_colored(&self) -> bool {
        self.element().is_colored()
    }

    /// Record another node in this node's referenced-set, absorbing
    /// everything it references in turn. Text cannot be passed here:
    /// only element-backed kinds implement [`Markup`].
    fn reference(&mut self, node: &impl Markup) {
        let transitive = node.element().referenced();
        let handle = node.element().handle();
        self.element_mut().record_reference(handle, transitive);
    }

    /// Handles of every referenceable node reachable from this node.
    fn referenced(&self) -> Vec<ClientHandle> {
        self.element().referenced()
    }

    /// Deep copy with fresh identifiers throughout the subtree.
    fn duplicate(&self) -> Self {
        Self::from_element(self.element().duplicate())
    }

    /// Serialize this node and its subtree to markup.
    fn to_html(&self) -> String {
        serializer::render_node(self.element())
    }
}
