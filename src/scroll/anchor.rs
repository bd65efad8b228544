//! In-page anchor click interception.

use log::debug;

use crate::page::{Document, NodeId, Px, ScrollBehavior, ScrollRequest};

use super::navbar_height;

/// Intercepts clicks on in-page anchors and requests a smooth scroll to
/// the target, offset by the navbar height so the target is not hidden
/// under the fixed chrome.
///
/// A fragment that resolves to no element is left to default handling.
#[derive(Debug)]
pub struct SmoothAnchorScroll {
    navbar: Option<NodeId>,
    fallback_navbar_height: Px,
}

impl SmoothAnchorScroll {
    /// Creates the interceptor; the navbar is re-measured on every click.
    pub fn new(navbar: Option<NodeId>, fallback_navbar_height: Px) -> Self {
        Self {
            navbar,
            fallback_navbar_height,
        }
    }

    /// Handles a click on `anchor`. Returns `true` when the click was
    /// intercepted (default navigation suppressed, scroll requested) and
    /// `false` when default handling should proceed.
    pub fn on_click(&self, doc: &mut Document, anchor: NodeId) -> bool {
        let fragment = match doc.attr(anchor, "href") {
            Some(href) if href.starts_with('#') => href[1..].to_string(),
            _ => return false,
        };
        if fragment.is_empty() {
            return false;
        }
        let Some(target) = doc.element_by_id(&fragment) else {
            return false;
        };

        let nav_height = navbar_height(doc, self.navbar, self.fallback_navbar_height);
        let top = doc.offset_top(target) - nav_height;
        doc.request_scroll(ScrollRequest {
            top,
            behavior: ScrollBehavior::Smooth,
        });
        debug!("anchor: scrolling to #{fragment} at {top}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    #[test]
    fn test_resolvable_fragment_is_intercepted() {
        let mut doc = Document::new();
        let navbar = doc.insert(Element::new().id("navbar").bounds(0, 72));
        let _target = doc.insert(Element::new().id("research").bounds(640, 600));
        let anchor = doc.insert(Element::new().attr("href", "#research"));

        let smooth = SmoothAnchorScroll::new(Some(navbar), 72);
        assert!(smooth.on_click(&mut doc, anchor));

        let req = doc.take_scroll_request().unwrap();
        assert_eq!(req.top, 640 - 72);
        assert_eq!(req.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_unresolvable_fragment_falls_through() {
        let mut doc = Document::new();
        let anchor = doc.insert(Element::new().attr("href", "#nowhere"));

        let smooth = SmoothAnchorScroll::new(None, 72);
        assert!(!smooth.on_click(&mut doc, anchor));
        assert!(doc.take_scroll_request().is_none());
    }

    #[test]
    fn test_bare_hash_falls_through() {
        let mut doc = Document::new();
        let anchor = doc.insert(Element::new().attr("href", "#"));

        let smooth = SmoothAnchorScroll::new(None, 72);
        assert!(!smooth.on_click(&mut doc, anchor));
    }

    #[test]
    fn test_external_href_falls_through() {
        let mut doc = Document::new();
        let anchor = doc.insert(Element::new().attr("href", "https://example.org"));

        let smooth = SmoothAnchorScroll::new(None, 72);
        assert!(!smooth.on_click(&mut doc, anchor));
    }

    #[test]
    fn test_missing_navbar_uses_fallback_height() {
        let mut doc = Document::new();
        let _target = doc.insert(Element::new().id("contact").bounds(1000, 400));
        let anchor = doc.insert(Element::new().attr("href", "#contact"));

        let smooth = SmoothAnchorScroll::new(None, 72);
        assert!(smooth.on_click(&mut doc, anchor));
        assert_eq!(doc.take_scroll_request().unwrap().top, 1000 - 72);
    }

    #[test]
    fn test_navbar_is_measured_live() {
        let mut doc = Document::new();
        let navbar = doc.insert(Element::new().id("navbar").bounds(0, 72));
        let _target = doc.insert(Element::new().id("contact").bounds(1000, 400));
        let anchor = doc.insert(Element::new().attr("href", "#contact"));

        let smooth = SmoothAnchorScroll::new(Some(navbar), 72);
        doc.set_bounds(navbar, 0, 56); // chrome shrank after load
        assert!(smooth.on_click(&mut doc, anchor));
        assert_eq!(doc.take_scroll_request().unwrap().top, 1000 - 56);
    }
}
