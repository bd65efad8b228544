//! Scroll-linked behaviors.
//!
//! Three independent per-tick reactions to the scroll offset:
//!
//! - [`ScrollChrome`]: navbar styling past a pixel threshold
//! - [`ActiveLinkTracker`]: marking the nav link of the section in view
//! - [`SmoothAnchorScroll`]: intercepting in-page anchor clicks
//!
//! All three re-measure layout on every invocation, so they stay correct
//! at arbitrary invocation frequency and across layout changes.

mod active;
mod anchor;
mod chrome;

pub use active::{ActiveLinkTracker, ACTIVE_LINK_CLASS};
pub use anchor::SmoothAnchorScroll;
pub use chrome::{ScrollChrome, SCROLLED_CLASS};

use crate::page::{Document, NodeId, Px};

/// Live navbar height, or the configured fallback when the navbar is
/// absent or unmeasurable.
pub(crate) fn navbar_height(doc: &Document, navbar: Option<NodeId>, fallback: Px) -> Px {
    navbar.map_or(fallback, |n| doc.offset_height(n))
}
