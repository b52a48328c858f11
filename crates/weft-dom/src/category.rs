//! Content-model categories
//!
//! A closed set of marker traits encodes which containers may hold a
//! given node kind. Composition is a single generic [`Container`]
//! abstraction: each container type declares the category it accepts
//! through a blanket impl, so a category violation is a compile-time
//! type error rather than a runtime check.

use crate::node::{IntoChild, Markup};

/// Block-level (flow) content.
pub trait Block: IntoChild {}

/// Inline (phrasing) content.
pub trait Inline: IntoChild {}

/// Content allowed inside the document head.
pub trait Metadata: IntoChild {}

/// List items (`li`), accepted by ordered and unordered lists.
pub trait ListItem: IntoChild {}

/// Options and option groups, accepted by select-like containers.
pub trait OptionItem: IntoChild {}

/// Nodes eligible inside an image map.
pub trait MapArea: IntoChild {}

/// What an option or option group may hold: nested option items or
/// bare text.
pub trait OptionContent: IntoChild {}

/// Category-constrained composition.
///
/// A container implements `Container<N>` for every node type `N` whose
/// category it accepts, e.g. `impl<N: ListItem> Container<N> for
/// ListNode`. Append and prepend preserve insertion order; the
/// consuming forms chain during construction, the `push` forms mutate
/// through a borrow.
pub trait Container<N: IntoChild>: Markup {
    fn append(mut self, node: N) -> Self {
        self.element_mut().append_child(node.into_child());
        self
    }

    fn prepend(mut self, node: N) -> Self {
        self.element_mut().prepend_child(node.into_child());
        self
    }

    fn push(&mut self, node: N) -> &mut Self {
        self.element_mut().append_child(node.into_child());
        self
    }

    fn push_front(&mut self, node: N) -> &mut Self {
        self.element_mut().prepend_child(node.into_child());
        self
    }
}
