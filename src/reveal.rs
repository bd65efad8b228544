//! One-shot reveal of elements entering the viewport.

use log::debug;

use crate::page::{Document, NodeId, Px};

/// Class permanently applied to a revealed element.
pub const REVEALED_CLASS: &str = "is-visible";

/// Watches flagged elements and marks each visible the first time it
/// intersects the trigger zone: the viewport inset by `margin` at the
/// bottom, with at least `threshold` of the element's height inside.
///
/// Reveals are strictly one-way: once marked, an element is dropped from
/// the watch list and never re-hidden. When intersection watching is
/// unsupported in the host, every flagged element is revealed at mount
/// instead (graceful degradation, not an error).
#[derive(Debug)]
pub struct RevealOnScroll {
    watched: Vec<NodeId>,
    margin: Px,
    threshold: f64,
}

impl RevealOnScroll {
    /// Starts watching the flagged elements, or reveals them all
    /// immediately when `supported` is false.
    pub fn mount(
        doc: &mut Document,
        targets: Vec<NodeId>,
        margin: Px,
        threshold: f64,
        supported: bool,
    ) -> Self {
        if !supported {
            for &target in &targets {
                doc.add_class(target, REVEALED_CLASS);
            }
            debug!(
                "reveal: intersection watching unavailable, revealed all {} element(s)",
                targets.len()
            );
            return Self {
                watched: Vec::new(),
                margin,
                threshold,
            };
        }
        Self {
            watched: targets,
            margin,
            threshold,
        }
    }

    /// Checks every still-watched element against the trigger zone,
    /// revealing and un-watching those that intersect.
    pub fn sweep(&mut self, doc: &mut Document) {
        let zone_top = doc.scroll_y();
        let zone_bottom = zone_top + doc.viewport() - self.margin;
        let threshold = self.threshold;

        self.watched.retain(|&el| {
            let top = doc.offset_top(el);
            let height = doc.offset_height(el);
            let visible = (top + height).min(zone_bottom) - top.max(zone_top);
            let intersecting = if height > 0 {
                f64::from(visible) / f64::from(height) >= threshold
            } else {
                visible >= 0
            };
            if intersecting {
                doc.add_class(el, REVEALED_CLASS);
                debug!("reveal: element visible at top {top}");
                false // one-shot: stop watching
            } else {
                true
            }
        });
    }

    /// Number of elements still being watched.
    pub fn watching(&self) -> usize {
        self.watched.len()
    }
}
