//! Mobile navigation drawer state machine.
//!
//! Two states, `closed` (initial) and `open`, with every transition
//! keeping the open flag, the visual classes, the `aria-expanded`
//! attribute on the toggle, and the body scroll lock in step. Transitions
//! are idempotent: closing a closed drawer has no observable effect.

use log::debug;

use crate::page::{Document, NodeId};

/// Class marking the drawer and its toggle as open.
pub const NAV_ACTIVE_CLASS: &str = "active";

const ARIA_EXPANDED: &str = "aria-expanded";

/// The collapsible mobile navigation panel and its toggle control.
///
/// # Example
///
/// ```rust
/// use scrollwork::{Document, Element, MobileNav};
///
/// let mut doc = Document::new();
/// let toggle = doc.insert(Element::new().id("navToggle"));
/// let drawer = doc.insert(Element::new().id("navLinks"));
///
/// let mut nav = MobileNav::mount(&mut doc, toggle, drawer);
/// nav.toggle(&mut doc);
/// assert!(nav.is_open());
/// assert_eq!(doc.attr(toggle, "aria-expanded"), Some("true"));
/// ```
#[derive(Debug)]
pub struct MobileNav {
    toggle: NodeId,
    drawer: NodeId,
    open: bool,
}

impl MobileNav {
    /// Wires the drawer in the closed state, normalizing the document so
    /// the flag and the visual/ARIA state start out consistent.
    pub fn mount(doc: &mut Document, toggle: NodeId, drawer: NodeId) -> Self {
        doc.remove_class(toggle, NAV_ACTIVE_CLASS);
        doc.remove_class(drawer, NAV_ACTIVE_CLASS);
        doc.set_attr(toggle, ARIA_EXPANDED, "false");
        doc.unlock_scroll();
        Self {
            toggle,
            drawer,
            open: false,
        }
    }

    /// Whether the drawer is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle control node.
    pub fn toggle_control(&self) -> NodeId {
        self.toggle
    }

    /// The drawer node.
    pub fn drawer(&self) -> NodeId {
        self.drawer
    }

    /// Flips between open and closed.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.open {
            self.close(doc);
        } else {
            self.open(doc);
        }
    }

    /// Opens the drawer: active classes on drawer and toggle,
    /// `aria-expanded=true`, body scroll locked. No-op while open.
    pub fn open(&mut self, doc: &mut Document) {
        if self.open {
            return;
        }
        self.open = true;
        doc.add_class(self.toggle, NAV_ACTIVE_CLASS);
        doc.add_class(self.drawer, NAV_ACTIVE_CLASS);
        doc.set_attr(self.toggle, ARIA_EXPANDED, "true");
        doc.lock_scroll();
        debug!("nav: drawer open");
    }

    /// Closes the drawer, reversing every open side effect. No-op while
    /// closed.
    pub fn close(&mut self, doc: &mut Document) {
        if !self.open {
            return;
        }
        self.open = false;
        doc.remove_class(self.toggle, NAV_ACTIVE_CLASS);
        doc.remove_class(self.drawer, NAV_ACTIVE_CLASS);
        doc.set_attr(self.toggle, ARIA_EXPANDED, "false");
        doc.unlock_scroll();
        debug!("nav: drawer closed");
    }

    /// Escape handling: closes and returns keyboard focus to the toggle
    /// control. No-op while closed, including the focus move.
    pub fn close_with_focus(&mut self, doc: &mut Document) {
        if !self.open {
            return;
        }
        self.close(doc);
        doc.focus(self.toggle);
    }
}
