//! OS color-scheme detection.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The color scheme reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

type SchemeDetector = fn() -> ColorScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to determine the OS color scheme.
///
/// This is useful for testing or for hosts that have a better signal
/// source than the OS query.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_scheme() -> ColorScheme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> ColorScheme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => ColorScheme::Dark,
        OsSchemeMode::Light => ColorScheme::Light,
    }
}
