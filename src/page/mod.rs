//! Headless document model.
//!
//! This module provides the mocked-document seam the rest of the crate is
//! built against:
//!
//! - [`Document`]: an element arena plus the page-level state the
//!   interaction components read and write (scroll offset, viewport
//!   height, scroll lock, focus, root attributes, pending scroll request)
//! - [`Element`]: a fluent builder for nodes inserted into a document
//! - [`NodeId`]: a cheap copyable handle to an inserted node
//!
//! A host embedding mirrors its real page into a `Document` (ids, classes,
//! `href` attributes, offsets) and applies the document's state back to
//! its surface after dispatching events. Tests use the model directly.

mod document;
mod element;

pub use document::{Document, NodeId, ScrollBehavior, ScrollRequest};
pub use element::Element;

/// Pixel quantity in document coordinates.
///
/// Signed: derived boundaries (e.g. a section top minus the navbar height
/// and an early-trigger offset) can legitimately be negative.
pub type Px = i32;
