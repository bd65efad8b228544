//! The document arena and page-level state.

use std::collections::BTreeMap;

use super::element::Element;
use super::Px;

/// Handle to a node inserted into a [`Document`].
///
/// Handles are only produced by [`Document::insert`] and stay valid for
/// the life of the document; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// How a requested scroll should be performed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump directly to the offset.
    Auto,
    /// Animate to the offset (the host's native smooth scrolling).
    Smooth,
}

/// A scroll the engine asks the host to perform.
///
/// The engine never animates anything itself; it records the most recent
/// request and the host consumes it via [`Document::take_scroll_request`],
/// feeding the resulting offsets back as scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Destination offset in document coordinates.
    pub top: Px,
    /// Requested scrolling behavior.
    pub behavior: ScrollBehavior,
}

/// The headless page: an element arena plus the shared mutable state all
/// interaction components read and write.
///
/// # Example
///
/// ```rust
/// use scrollwork::{Document, Element};
///
/// let mut doc = Document::new().viewport_height(900);
/// let navbar = doc.insert(Element::new().id("navbar").bounds(0, 72));
///
/// doc.add_class(navbar, "scrolled");
/// assert!(doc.has_class(navbar, "scrolled"));
/// assert_eq!(doc.element_by_id("navbar"), Some(navbar));
/// ```
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Element>,
    root_attrs: BTreeMap<String, String>,
    scroll_y: Px,
    viewport_height: Px,
    scroll_locked: bool,
    focused: Option<NodeId>,
    pending_scroll: Option<ScrollRequest>,
}

impl Document {
    /// Creates an empty document with a zero-height viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport height, consuming and returning the document for
    /// chaining during construction.
    pub fn viewport_height(mut self, height: Px) -> Self {
        self.viewport_height = height;
        self
    }

    /// Updates the viewport height on a live document (host resize).
    pub fn set_viewport_height(&mut self, height: Px) {
        self.viewport_height = height;
    }

    /// Returns the current viewport height.
    pub fn viewport(&self) -> Px {
        self.viewport_height
    }

    // ---- nodes ----

    /// Inserts an element, returning its handle.
    ///
    /// A parent set on the element must already be inserted, so the node
    /// graph is acyclic by construction.
    pub fn insert(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    /// Finds the first element with the given id, in insertion order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// Returns every element carrying the given class, in insertion order.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.contains(class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Returns every element carrying any of the given classes, in
    /// insertion order (the combined-selector query of the markup
    /// contract).
    pub fn elements_with_any_class(&self, classes: &[&str]) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| classes.iter().any(|c| n.classes.contains(*c)))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Returns every element whose attribute starts with the given
    /// prefix, in insertion order (e.g. `href` beginning with `#`).
    pub fn elements_with_attr_prefix(&self, name: &str, prefix: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| {
                n.attrs
                    .get(name)
                    .is_some_and(|v| v.starts_with(prefix))
            })
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Returns the element's id, if it has one.
    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].id.as_deref()
    }

    /// Tests whether `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    // ---- classes and attributes ----

    /// Tests for a class on an element.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.contains(class)
    }

    /// Adds a class; adding a present class is a no-op.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.insert(class.to_string());
    }

    /// Removes a class; removing an absent class is a no-op.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.remove(class);
    }

    /// Returns an element attribute value.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attrs.get(name).map(String::as_str)
    }

    /// Sets an element attribute, replacing any previous value.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    // ---- geometry ----

    /// Document-coordinate top of an element.
    pub fn offset_top(&self, node: NodeId) -> Px {
        self.nodes[node.0].offset_top
    }

    /// Rendered height of an element.
    pub fn offset_height(&self, node: NodeId) -> Px {
        self.nodes[node.0].offset_height
    }

    /// Updates an element's extent after a host layout change. Boundaries
    /// are recomputed from these values on every tick, never cached.
    pub fn set_bounds(&mut self, node: NodeId, offset_top: Px, offset_height: Px) {
        let n = &mut self.nodes[node.0];
        n.offset_top = offset_top;
        n.offset_height = offset_height;
    }

    // ---- root attributes ----

    /// Returns an attribute on the document root (e.g. the theme attribute).
    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    /// Sets a root attribute, replacing any previous value.
    pub fn set_root_attr(&mut self, name: &str, value: &str) {
        self.root_attrs.insert(name.to_string(), value.to_string());
    }

    /// Removes a root attribute if present.
    pub fn remove_root_attr(&mut self, name: &str) {
        self.root_attrs.remove(name);
    }

    // ---- scroll, lock, focus ----

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> Px {
        self.scroll_y
    }

    /// Commits a new scroll offset (host-driven; negative values clamp to 0).
    pub fn set_scroll_y(&mut self, y: Px) {
        self.scroll_y = y.max(0);
    }

    /// Whether body scrolling is currently locked.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Disables body scrolling (drawer open).
    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    /// Re-enables body scrolling.
    pub fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    /// Element currently holding keyboard focus, if the engine moved it.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Moves keyboard focus to an element.
    pub fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    /// Records a scroll request for the host, replacing any unconsumed one.
    pub fn request_scroll(&mut self, request: ScrollRequest) {
        self.pending_scroll = Some(request);
    }

    /// Takes the pending scroll request, leaving none.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}
