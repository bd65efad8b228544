//! Headless page-interaction engine.
//!
//! `scrollwork` implements the client-side interactivity of a single
//! static page — theme switching, a mobile navigation drawer,
//! scroll-linked navbar styling, active-link highlighting,
//! reveal-on-scroll, and smooth anchor scrolling — as independent,
//! injectable controllers over a mocked document model. A host embedding
//! mirrors its page into a [`Document`], mounts an [`App`], and feeds it
//! [`Event`]s; every behavior is a synchronous reaction to one event.
//!
//! The design principle throughout is total graceful degradation: a
//! missing element skips its component's wiring, an unreadable preference
//! store reads as "no preference", and a host without intersection
//! support reveals everything up front. No operation surfaces an error.
//!
//! # Example
//!
//! ```rust
//! use scrollwork::{App, Config, Document, Element, Event, MemoryStore, ThemeSetting};
//!
//! let mut doc = Document::new().viewport_height(900);
//! doc.insert(Element::new().id("navbar").bounds(0, 72));
//! let theme_toggle = doc.insert(Element::new().id("themeToggle"));
//!
//! let store = MemoryStore::preset(ThemeSetting::Light);
//! let mut app = App::mount(&mut doc, Config::default(), store);
//!
//! app.dispatch(&mut doc, Event::Click { target: Some(theme_toggle) });
//! assert_eq!(app.theme().applied(&doc), Some(ThemeSetting::Dark));
//!
//! app.dispatch(&mut doc, Event::Scroll { y: 300 });
//! assert!(doc.has_class(doc.element_by_id("navbar").unwrap(), "scrolled"));
//! ```

mod app;
mod config;
mod events;
mod nav;
mod page;
mod reveal;
mod scroll;
mod theme;

pub use app::{
    App, NAVBAR_ID, NAV_DRAWER_ID, NAV_TOGGLE_ID, REVEAL_TARGET_CLASS, SECTION_CLASSES,
    THEME_TOGGLE_ID,
};
pub use config::Config;
pub use events::{Event, Key};
pub use nav::{MobileNav, NAV_ACTIVE_CLASS};
pub use page::{Document, Element, NodeId, Px, ScrollBehavior, ScrollRequest};
pub use reveal::{RevealOnScroll, REVEALED_CLASS};
pub use scroll::{
    ActiveLinkTracker, ScrollChrome, SmoothAnchorScroll, ACTIVE_LINK_CLASS, SCROLLED_CLASS,
};
pub use theme::{
    set_scheme_detector, ColorScheme, FileStore, MemoryStore, PreferenceStore, ThemePreference,
    ThemeSetting, THEME_ATTR,
};
