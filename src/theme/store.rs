//! Fault-tolerant persistence for the theme preference.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use super::preference::ThemeSetting;

/// Storage seam for the single persisted preference.
///
/// The contract is total graceful degradation: an unavailable or corrupt
/// store reads as "no stored preference" and writes are silently dropped.
/// No implementation may surface an error to the page.
pub trait PreferenceStore {
    /// Returns the stored preference, or `None` when absent or unreadable.
    fn load(&self) -> Option<ThemeSetting>;

    /// Persists a preference; failures are swallowed.
    fn save(&mut self, setting: ThemeSetting);
}

/// In-memory store, for tests and hosts without durable storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    setting: Option<ThemeSetting>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a value, as if persisted earlier.
    pub fn preset(setting: ThemeSetting) -> Self {
        Self {
            setting: Some(setting),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<ThemeSetting> {
        self.setting
    }

    fn save(&mut self, setting: ThemeSetting) {
        self.setting = Some(setting);
    }
}

/// On-disk persisted form: one JSON document holding the single key.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: ThemeSetting,
}

/// File-backed store holding the preference as a tiny JSON document.
///
/// # Example
///
/// ```rust,no_run
/// use scrollwork::{FileStore, PreferenceStore, ThemeSetting};
///
/// let mut store = FileStore::new("/tmp/portfolio-theme.json");
/// store.save(ThemeSetting::Dark);
/// assert_eq!(store.load(), Some(ThemeSetting::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given path. The path is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Option<ThemeSetting> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let stored: StoredPreference = serde_json::from_str(&raw).ok()?;
        Some(stored.theme)
    }

    fn write(&self, setting: ThemeSetting) -> io::Result<()> {
        let stored = StoredPreference { theme: setting };
        let raw = serde_json::to_string(&stored)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, raw)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<ThemeSetting> {
        self.read()
    }

    fn save(&mut self, setting: ThemeSetting) {
        if let Err(err) = self.write(setting) {
            debug!("theme: preference write to {:?} skipped: {err}", self.path);
        }
    }
}
