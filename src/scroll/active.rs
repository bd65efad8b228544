//! Active nav-link highlighting.

use crate::page::{Document, NodeId, Px};

use super::navbar_height;

/// Class carried by the nav link of the section currently in view.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Recomputes which section is in view on every tick and marks the
/// corresponding nav link.
///
/// A section's boundary is
/// `[offset_top − navbar_height − early_offset, … + offset_height)` in
/// document coordinates, derived from live layout on each invocation; the
/// early offset makes a section count as active slightly before it
/// reaches the top of the viewport.
#[derive(Debug)]
pub struct ActiveLinkTracker {
    sections: Vec<NodeId>,
    anchors: Vec<NodeId>,
    navbar: Option<NodeId>,
    early_offset: Px,
    fallback_navbar_height: Px,
}

impl ActiveLinkTracker {
    /// Creates a tracker over sections and their nav anchors, both in
    /// document order.
    pub fn new(
        sections: Vec<NodeId>,
        anchors: Vec<NodeId>,
        navbar: Option<NodeId>,
        early_offset: Px,
        fallback_navbar_height: Px,
    ) -> Self {
        Self {
            sections,
            anchors,
            navbar,
            early_offset,
            fallback_navbar_height,
        }
    }

    /// Recomputes the active section for the current scroll offset and
    /// applies the class exclusively to its link, clearing all others.
    ///
    /// Sections are scanned in document order and the first boundary
    /// containing the offset wins; with unusual layouts adjacent
    /// boundaries can overlap, in which case the earlier section shadows
    /// the later one.
    pub fn update(&self, doc: &mut Document) {
        let scroll = doc.scroll_y();
        let nav_height = navbar_height(doc, self.navbar, self.fallback_navbar_height);

        let current = self
            .sections
            .iter()
            .find_map(|&section| {
                let top = doc.offset_top(section) - nav_height - self.early_offset;
                let bottom = top + doc.offset_height(section);
                if scroll >= top && scroll < bottom {
                    // a match without an id still ends the scan; no link
                    // can correspond to it
                    Some(doc.id_of(section).map(str::to_string))
                } else {
                    None
                }
            })
            .flatten();

        for &anchor in &self.anchors {
            doc.remove_class(anchor, ACTIVE_LINK_CLASS);
        }

        if let Some(id) = current {
            let target = format!("#{id}");
            let matched = self
                .anchors
                .iter()
                .copied()
                .find(|&a| doc.attr(a, "href") == Some(target.as_str()));
            if let Some(anchor) = matched {
                doc.add_class(anchor, ACTIVE_LINK_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    struct Fixture {
        doc: Document,
        tracker: ActiveLinkTracker,
        anchors: Vec<NodeId>,
    }

    /// Navbar of height 72 plus three 600px sections at 0/600/1200 with
    /// matching anchors.
    fn fixture() -> Fixture {
        let mut doc = Document::new().viewport_height(900);
        let navbar = doc.insert(Element::new().id("navbar").bounds(0, 72));

        let mut sections = Vec::new();
        let mut anchors = Vec::new();
        for (i, id) in ["home", "research", "contact"].iter().enumerate() {
            sections.push(doc.insert(
                Element::new()
                    .id(id)
                    .class("section")
                    .bounds(i as Px * 600, 600),
            ));
            anchors.push(doc.insert(Element::new().attr("href", &format!("#{id}"))));
        }

        let tracker =
            ActiveLinkTracker::new(sections, anchors.clone(), Some(navbar), 100, 72);
        Fixture {
            doc,
            tracker,
            anchors,
        }
    }

    fn active_anchors(f: &Fixture) -> Vec<NodeId> {
        f.anchors
            .iter()
            .copied()
            .filter(|&a| f.doc.has_class(a, ACTIVE_LINK_CLASS))
            .collect()
    }

    #[test]
    fn test_offset_inside_second_section_marks_exactly_its_link() {
        let mut f = fixture();
        // second section boundary: [600 - 72 - 100, +600) = [428, 1028)
        f.doc.set_scroll_y(500);
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f), vec![f.anchors[1]]);
    }

    #[test]
    fn test_marking_moves_as_scroll_crosses_boundaries() {
        let mut f = fixture();
        f.doc.set_scroll_y(0);
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f), vec![f.anchors[0]]);

        f.doc.set_scroll_y(1100);
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f), vec![f.anchors[2]]);
    }

    #[test]
    fn test_no_section_in_view_clears_all_links() {
        let mut f = fixture();
        f.doc.set_scroll_y(0);
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f).len(), 1);

        // past the last boundary: [1200 - 172, +600) ends at 1628
        f.doc.set_scroll_y(5000);
        f.tracker.update(&mut f.doc);
        assert!(active_anchors(&f).is_empty());
    }

    #[test]
    fn test_overlapping_boundaries_first_section_wins() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new().id("a").class("section").bounds(0, 500));
        let b = doc.insert(Element::new().id("b").class("section").bounds(100, 500));
        let link_a = doc.insert(Element::new().attr("href", "#a"));
        let link_b = doc.insert(Element::new().attr("href", "#b"));

        let tracker =
            ActiveLinkTracker::new(vec![a, b], vec![link_a, link_b], None, 100, 72);
        doc.set_scroll_y(50); // inside both adjusted intervals
        tracker.update(&mut doc);

        assert!(doc.has_class(link_a, ACTIVE_LINK_CLASS));
        assert!(!doc.has_class(link_b, ACTIVE_LINK_CLASS));
    }

    #[test]
    fn test_missing_navbar_uses_fallback_height() {
        let mut doc = Document::new();
        let section = doc.insert(Element::new().id("only").class("section").bounds(400, 300));
        let link = doc.insert(Element::new().attr("href", "#only"));

        let tracker = ActiveLinkTracker::new(vec![section], vec![link], None, 100, 72);
        // boundary: [400 - 72 - 100, +300) = [228, 528)
        doc.set_scroll_y(228);
        tracker.update(&mut doc);
        assert!(doc.has_class(link, ACTIVE_LINK_CLASS));

        doc.set_scroll_y(227);
        tracker.update(&mut doc);
        assert!(!doc.has_class(link, ACTIVE_LINK_CLASS));
    }

    #[test]
    fn test_section_without_id_matches_no_link() {
        let mut doc = Document::new();
        let section = doc.insert(Element::new().class("section").bounds(0, 600));
        let link = doc.insert(Element::new().attr("href", "#anything"));

        let tracker = ActiveLinkTracker::new(vec![section], vec![link], None, 100, 72);
        doc.set_scroll_y(0);
        tracker.update(&mut doc);
        assert!(!doc.has_class(link, ACTIVE_LINK_CLASS));
    }

    #[test]
    fn test_boundary_reacts_to_layout_changes() {
        let mut f = fixture();
        f.doc.set_scroll_y(500);
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f), vec![f.anchors[1]]);

        // the page reflows: second section moves far down
        let second = f.doc.element_by_id("research").unwrap();
        f.doc.set_bounds(second, 3000, 600);
        f.tracker.update(&mut f.doc);
        assert!(active_anchors(&f).is_empty());

        f.doc.set_scroll_y(2900); // inside the relocated boundary [2828, 3428)
        f.tracker.update(&mut f.doc);
        assert_eq!(active_anchors(&f), vec![f.anchors[1]]);
    }
}
