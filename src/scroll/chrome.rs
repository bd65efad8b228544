//! Navbar styling past a scroll threshold.

use crate::page::{Document, NodeId, Px};

/// Class applied to the navbar at or beyond the scroll threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Adds the scrolled style to the navbar at or past a pixel offset and
/// removes it below. A pure function of the scroll offset; the last
/// applied value is remembered only to skip redundant writes.
#[derive(Debug)]
pub struct ScrollChrome {
    navbar: NodeId,
    threshold: Px,
    applied: Option<bool>,
}

impl ScrollChrome {
    /// Creates the chrome over a navbar with the given threshold.
    pub fn new(navbar: NodeId, threshold: Px) -> Self {
        Self {
            navbar,
            threshold,
            applied: None,
        }
    }

    /// Recomputes and applies the style for the current scroll offset.
    pub fn update(&mut self, doc: &mut Document) {
        let past = doc.scroll_y() >= self.threshold;
        if self.applied == Some(past) {
            return;
        }
        if past {
            doc.add_class(self.navbar, SCROLLED_CLASS);
        } else {
            doc.remove_class(self.navbar, SCROLLED_CLASS);
        }
        self.applied = Some(past);
    }
}
