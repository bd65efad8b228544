//! Theme preference resolution and application.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::scheme::{detect_scheme, ColorScheme};
use super::store::PreferenceStore;
use crate::page::Document;

/// Root attribute carrying the applied theme. When absent, stylesheet
/// defaults govern (effectively light).
pub const THEME_ATTR: &str = "data-theme";

/// An explicit theme value applied to the document root.
///
/// Absence of a value (the root attribute unset) is a valid state of its
/// own: the unstyled default, not `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Dark,
    Light,
}

impl ThemeSetting {
    /// The attribute/storage spelling of the value.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSetting::Dark => "dark",
            ThemeSetting::Light => "light",
        }
    }

    /// Parses the attribute/storage spelling; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeSetting::Dark),
            "light" => Some(ThemeSetting::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorScheme> for ThemeSetting {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => ThemeSetting::Dark,
            ColorScheme::Light => ThemeSetting::Light,
        }
    }
}

/// Controller resolving and persisting the dark/light preference.
///
/// Precedence: explicit stored choice > OS scheme signal > unset default.
/// The store seam absorbs all persistence failures, so no operation here
/// can fail.
///
/// # Example
///
/// ```rust
/// use scrollwork::{Document, MemoryStore, ThemePreference, ThemeSetting};
///
/// let mut doc = Document::new();
/// let mut theme = ThemePreference::new(MemoryStore::preset(ThemeSetting::Dark));
/// theme.initialize(&mut doc);
/// assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));
///
/// theme.toggle(&mut doc);
/// assert_eq!(theme.applied(&doc), Some(ThemeSetting::Light));
/// ```
#[derive(Debug)]
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    detector: fn() -> ColorScheme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Creates a controller over the given store, using the crate-level
    /// scheme detector (see
    /// [`set_scheme_detector`](super::set_scheme_detector)).
    pub fn new(store: S) -> Self {
        Self {
            store,
            detector: detect_scheme,
        }
    }

    /// Creates a controller with an explicit scheme detector, bypassing
    /// the crate-level one. Useful for tests.
    pub fn with_detector(store: S, detector: fn() -> ColorScheme) -> Self {
        Self { store, detector }
    }

    /// Load-time resolution: applies a valid stored choice; failing that,
    /// applies `dark` when the OS reports a dark scheme; otherwise leaves
    /// the root attribute unset.
    pub fn initialize(&mut self, doc: &mut Document) {
        if let Some(stored) = self.store.load() {
            self.apply(doc, stored);
        } else if (self.detector)() == ColorScheme::Dark {
            self.apply(doc, ThemeSetting::Dark);
        }
    }

    /// Flips the applied value and persists the result. Any non-dark
    /// current value (including unset) flips to dark.
    pub fn toggle(&mut self, doc: &mut Document) {
        let next = match self.applied(doc) {
            Some(ThemeSetting::Dark) => ThemeSetting::Light,
            _ => ThemeSetting::Dark,
        };
        self.apply(doc, next);
        self.store.save(next);
    }

    /// Live OS scheme change: followed only while no explicit choice has
    /// been stored.
    pub fn on_scheme_change(&mut self, doc: &mut Document, scheme: ColorScheme) {
        if self.store.load().is_some() {
            return;
        }
        self.apply(doc, scheme.into());
    }

    /// The value currently applied to the document root, if any.
    pub fn applied(&self, doc: &Document) -> Option<ThemeSetting> {
        doc.root_attr(THEME_ATTR).and_then(ThemeSetting::parse)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&self, doc: &mut Document, setting: ThemeSetting) {
        doc.set_root_attr(THEME_ATTR, setting.as_str());
        debug!("theme: applied {setting}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::MemoryStore;

    #[test]
    fn test_stored_value_wins_over_os_signal() {
        for (stored, os) in [
            (ThemeSetting::Dark, ColorScheme::Light),
            (ThemeSetting::Light, ColorScheme::Dark),
        ] {
            let mut doc = Document::new();
            let detector: fn() -> ColorScheme = match os {
                ColorScheme::Dark => || ColorScheme::Dark,
                ColorScheme::Light => || ColorScheme::Light,
            };
            let mut theme = ThemePreference::with_detector(MemoryStore::preset(stored), detector);
            theme.initialize(&mut doc);
            assert_eq!(theme.applied(&doc), Some(stored));
        }
    }

    #[test]
    fn test_unstored_follows_os_dark() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::new(), || ColorScheme::Dark);
        theme.initialize(&mut doc);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));
    }

    #[test]
    fn test_unstored_light_os_leaves_default() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::new(), || ColorScheme::Light);
        theme.initialize(&mut doc);
        assert_eq!(theme.applied(&doc), None);
        assert_eq!(doc.root_attr(THEME_ATTR), None);
    }

    #[test]
    fn test_toggle_twice_is_identity_and_persists() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::preset(ThemeSetting::Light), || {
                ColorScheme::Light
            });
        theme.initialize(&mut doc);

        theme.toggle(&mut doc);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));
        assert_eq!(theme.store().load(), Some(ThemeSetting::Dark));

        theme.toggle(&mut doc);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Light));
        assert_eq!(theme.store().load(), Some(ThemeSetting::Light));
    }

    #[test]
    fn test_toggle_from_unset_applies_dark() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::new(), || ColorScheme::Light);
        theme.initialize(&mut doc);
        assert_eq!(theme.applied(&doc), None);

        theme.toggle(&mut doc);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));
        assert_eq!(theme.store().load(), Some(ThemeSetting::Dark));
    }

    #[test]
    fn test_scheme_change_ignored_once_stored() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::preset(ThemeSetting::Dark), || {
                ColorScheme::Dark
            });
        theme.initialize(&mut doc);

        theme.on_scheme_change(&mut doc, ColorScheme::Light);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));
    }

    #[test]
    fn test_scheme_change_followed_while_unstored() {
        let mut doc = Document::new();
        let mut theme =
            ThemePreference::with_detector(MemoryStore::new(), || ColorScheme::Light);
        theme.initialize(&mut doc);

        theme.on_scheme_change(&mut doc, ColorScheme::Dark);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Dark));

        theme.on_scheme_change(&mut doc, ColorScheme::Light);
        assert_eq!(theme.applied(&doc), Some(ThemeSetting::Light));
        // the live signal never persists anything
        assert_eq!(theme.store().load(), None);
    }

    #[test]
    fn test_theme_setting_parse() {
        assert_eq!(ThemeSetting::parse("dark"), Some(ThemeSetting::Dark));
        assert_eq!(ThemeSetting::parse("light"), Some(ThemeSetting::Light));
        assert_eq!(ThemeSetting::parse("sepia"), None);
        assert_eq!(ThemeSetting::parse(""), None);
    }
}
