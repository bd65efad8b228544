//! Tuning constants for the interaction components.

use crate::page::Px;

/// The hardcoded tuning values of the page behaviors, gathered in one
/// adjustable place. The defaults are the shipped values; the early
/// trigger offset and reveal margin in particular are empirical and carry
/// no deeper rationale.
///
/// # Example
///
/// ```rust
/// use scrollwork::Config;
///
/// let config = Config::new()
///     .with_scroll_threshold(4)
///     .with_reveal_margin(0);
/// assert_eq!(config.scroll_threshold, 4);
/// assert_eq!(config.active_link_offset, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Scroll offset at which the navbar gains its scrolled styling.
    pub scroll_threshold: Px,
    /// Early-trigger offset subtracted from section tops so a section
    /// counts as active slightly before reaching the viewport top.
    pub active_link_offset: Px,
    /// Bottom inset of the reveal trigger zone.
    pub reveal_margin: Px,
    /// Fraction of an element's height that must be inside the trigger
    /// zone before it reveals.
    pub reveal_threshold: f64,
    /// Navbar height assumed when the navbar cannot be measured.
    pub fallback_navbar_height: Px,
    /// Whether the host supports intersection watching; when false every
    /// reveal target is shown at mount.
    pub intersection_supported: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold: 10,
            active_link_offset: 100,
            reveal_margin: 60,
            reveal_threshold: 0.1,
            fallback_navbar_height: 72,
            intersection_supported: true,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the navbar scroll-styling threshold.
    pub fn with_scroll_threshold(mut self, px: Px) -> Self {
        self.scroll_threshold = px;
        self
    }

    /// Sets the active-link early-trigger offset.
    pub fn with_active_link_offset(mut self, px: Px) -> Self {
        self.active_link_offset = px;
        self
    }

    /// Sets the reveal zone's bottom inset.
    pub fn with_reveal_margin(mut self, px: Px) -> Self {
        self.reveal_margin = px;
        self
    }

    /// Sets the reveal visibility fraction.
    pub fn with_reveal_threshold(mut self, fraction: f64) -> Self {
        self.reveal_threshold = fraction;
        self
    }

    /// Sets the height assumed for a missing navbar.
    pub fn with_fallback_navbar_height(mut self, px: Px) -> Self {
        self.fallback_navbar_height = px;
        self
    }

    /// Declares whether the host supports intersection watching.
    pub fn with_intersection_supported(mut self, supported: bool) -> Self {
        self.intersection_supported = supported;
        self
    }
}
