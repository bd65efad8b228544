//! Theme preference: resolution, application, and persistence.
//!
//! This module provides:
//!
//! - [`ThemeSetting`]: the dark/light value applied to the document root
//! - [`ThemePreference`]: the controller resolving stored choice > OS
//!   scheme signal > unset default
//! - [`PreferenceStore`]: the fault-tolerant persistence seam, with
//!   [`MemoryStore`] and [`FileStore`] implementations
//! - [`ColorScheme`]: the OS-reported scheme, with a swappable detector
//!
//! An explicit stored choice always wins; the OS signal only governs while
//! no choice has been persisted.

mod preference;
mod scheme;
mod store;

pub use preference::{ThemePreference, ThemeSetting, THEME_ATTR};
pub use scheme::{set_scheme_detector, ColorScheme};
pub use store::{FileStore, MemoryStore, PreferenceStore};
