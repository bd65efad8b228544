//! Fluent builder for document nodes.

use std::collections::{BTreeMap, BTreeSet};

use super::document::NodeId;
use super::Px;

/// A node staged for insertion into a [`Document`](super::Document).
///
/// Mirrors the handful of DOM facts the interaction components care
/// about: an optional id, a class list, string attributes, an optional
/// parent, and a vertical extent in document coordinates.
///
/// # Example
///
/// ```rust
/// use scrollwork::{Document, Element};
///
/// let mut doc = Document::new();
/// let drawer = doc.insert(Element::new().id("navLinks"));
/// let link = doc.insert(
///     Element::new()
///         .class("nav-link")
///         .attr("href", "#about")
///         .parent(drawer),
/// );
/// assert!(doc.contains(drawer, link));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(crate) id: Option<String>,
    pub(crate) classes: BTreeSet<String>,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) offset_top: Px,
    pub(crate) offset_height: Px,
}

impl Element {
    /// Creates an element with no id, classes, or extent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id used by id lookups and fragment resolution.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds a class to the element's class list.
    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Sets a string attribute (e.g. `href`).
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Makes the element a descendant of an already-inserted node.
    pub fn parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the element's vertical extent: document-coordinate top and height.
    pub fn bounds(mut self, offset_top: Px, offset_height: Px) -> Self {
        self.offset_top = offset_top;
        self.offset_height = offset_height;
        self
    }
}
