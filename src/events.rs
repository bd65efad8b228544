//! Host-facing event vocabulary.
//!
//! A host embedding translates its native UI events into [`Event`] values
//! and feeds them to [`App::dispatch`](crate::App::dispatch). Every
//! handler runs to completion synchronously; there is no queueing or
//! cancellation inside the engine.

use crate::page::{NodeId, Px};
use crate::theme::ColorScheme;

/// A key press the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    /// Any key the engine does not react to.
    Other,
}

/// A page-level event dispatched into the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer click; `target` is the innermost element hit, or `None`
    /// for a click on bare page background.
    Click { target: Option<NodeId> },
    /// A key press anywhere on the page.
    KeyDown { key: Key },
    /// The scroll offset changed to `y`.
    Scroll { y: Px },
    /// The OS color scheme changed (a live media-query notification).
    SchemeChange { scheme: ColorScheme },
}
