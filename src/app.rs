//! Page wiring: element discovery, mount-time passes, event routing.

use crate::config::Config;
use crate::events::{Event, Key};
use crate::nav::MobileNav;
use crate::page::{Document, NodeId};
use crate::reveal::RevealOnScroll;
use crate::scroll::{ActiveLinkTracker, ScrollChrome, SmoothAnchorScroll};
use crate::theme::{PreferenceStore, ThemePreference};

/// Element id of the navbar container.
pub const NAVBAR_ID: &str = "navbar";
/// Element id of the drawer toggle control.
pub const NAV_TOGGLE_ID: &str = "navToggle";
/// Element id of the drawer.
pub const NAV_DRAWER_ID: &str = "navLinks";
/// Element id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "themeToggle";
/// Classes marking page sections, in the combined-selector sense.
pub const SECTION_CLASSES: [&str; 2] = ["section", "hero"];
/// Class flagging an element for reveal-on-scroll.
pub const REVEAL_TARGET_CLASS: &str = "animate-on-scroll";

/// The assembled page engine: every interaction component wired against
/// one document.
///
/// Components whose required elements are missing from the markup are
/// simply not wired; a page without a navbar or a drawer stays fully
/// usable with the remaining behaviors (nothing here is ever fatal).
///
/// # Example
///
/// ```rust
/// use scrollwork::{App, Config, Document, Element, Event, MemoryStore};
///
/// let mut doc = Document::new().viewport_height(900);
/// doc.insert(Element::new().id("navbar").bounds(0, 72));
///
/// let mut app = App::mount(&mut doc, Config::default(), MemoryStore::new());
/// app.dispatch(&mut doc, Event::Scroll { y: 300 });
/// ```
#[derive(Debug)]
pub struct App<S: PreferenceStore> {
    theme: ThemePreference<S>,
    theme_toggle: Option<NodeId>,
    nav: Option<MobileNav>,
    chrome: Option<ScrollChrome>,
    active: ActiveLinkTracker,
    reveal: RevealOnScroll,
    anchor_scroll: SmoothAnchorScroll,
    anchors: Vec<NodeId>,
}

impl<S: PreferenceStore> App<S> {
    /// Discovers the markup-contract elements, wires each available
    /// component, and runs the load-time passes (theme resolution, the
    /// initial scroll tick, the initial reveal check).
    pub fn mount(doc: &mut Document, config: Config, store: S) -> Self {
        let navbar = doc.element_by_id(NAVBAR_ID);
        let nav_toggle = doc.element_by_id(NAV_TOGGLE_ID);
        let drawer = doc.element_by_id(NAV_DRAWER_ID);
        let theme_toggle = doc.element_by_id(THEME_TOGGLE_ID);
        let sections = doc.elements_with_any_class(&SECTION_CLASSES);
        let anchors = doc.elements_with_attr_prefix("href", "#");
        let reveal_targets = doc.elements_with_class(REVEAL_TARGET_CLASS);

        let mut theme = ThemePreference::new(store);
        theme.initialize(doc);

        let nav = match (nav_toggle, drawer) {
            (Some(toggle), Some(drawer)) => Some(MobileNav::mount(doc, toggle, drawer)),
            _ => None, // markup lacks the drawer or its control
        };

        let mut chrome = navbar.map(|n| ScrollChrome::new(n, config.scroll_threshold));
        let active = ActiveLinkTracker::new(
            sections,
            anchors.clone(),
            navbar,
            config.active_link_offset,
            config.fallback_navbar_height,
        );
        let mut reveal = RevealOnScroll::mount(
            doc,
            reveal_targets,
            config.reveal_margin,
            config.reveal_threshold,
            config.intersection_supported,
        );
        let anchor_scroll = SmoothAnchorScroll::new(navbar, config.fallback_navbar_height);

        // load-time pass, as if a first scroll tick fired at the current offset
        if let Some(chrome) = chrome.as_mut() {
            chrome.update(doc);
        }
        active.update(doc);
        reveal.sweep(doc);

        Self {
            theme,
            theme_toggle,
            nav,
            chrome,
            active,
            reveal,
            anchor_scroll,
            anchors,
        }
    }

    /// Routes one event through every component that listens for it, in
    /// registration order. Handlers only read committed document state,
    /// so none depends on another's position in the order.
    pub fn dispatch(&mut self, doc: &mut Document, event: Event) {
        match event {
            Event::Click { target } => self.on_click(doc, target),
            Event::KeyDown { key } => {
                if key == Key::Escape {
                    if let Some(nav) = self.nav.as_mut() {
                        nav.close_with_focus(doc);
                    }
                }
            }
            Event::Scroll { y } => {
                doc.set_scroll_y(y);
                if let Some(chrome) = self.chrome.as_mut() {
                    chrome.update(doc);
                }
                self.active.update(doc);
                self.reveal.sweep(doc);
            }
            Event::SchemeChange { scheme } => self.theme.on_scheme_change(doc, scheme),
        }
    }

    /// The drawer state machine, when wired.
    pub fn nav(&self) -> Option<&MobileNav> {
        self.nav.as_ref()
    }

    /// The theme controller.
    pub fn theme(&self) -> &ThemePreference<S> {
        &self.theme
    }

    /// The reveal watcher.
    pub fn reveal(&self) -> &RevealOnScroll {
        &self.reveal
    }

    fn on_click(&mut self, doc: &mut Document, target: Option<NodeId>) {
        let hit = |doc: &Document, node: NodeId| target.is_some_and(|t| doc.contains(node, t));

        if let Some(toggle) = self.theme_toggle {
            if hit(doc, toggle) {
                self.theme.toggle(doc);
            }
        }

        if let Some(nav) = self.nav.as_mut() {
            if hit(doc, nav.toggle_control()) {
                nav.toggle(doc);
            } else {
                let on_anchor = self.anchors.iter().any(|&a| hit(doc, a));
                if on_anchor {
                    nav.close(doc);
                } else if nav.is_open() && !hit(doc, nav.drawer()) {
                    nav.close(doc); // click landed outside drawer and toggle
                }
            }
        }

        let clicked_anchor = target.and_then(|t| {
            self.anchors
                .iter()
                .copied()
                .find(|&anchor| doc.contains(anchor, t))
        });
        if let Some(anchor) = clicked_anchor {
            self.anchor_scroll.on_click(doc, anchor);
        }
    }
}
