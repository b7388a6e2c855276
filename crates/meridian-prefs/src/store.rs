//! # Preferences Store
//!
//! Reads and writes the persisted subset of UI state as a single JSON
//! blob, keyed by a fixed namespace string that doubles as the file name.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use meridian_core::Theme;

use crate::error::{PrefsError, PrefsResult};

/// Namespace the blob is stored under. Fixed at design time.
pub const PREFS_NAMESPACE: &str = "meridian-ui";

/// Environment variable overriding the data directory (useful in dev).
pub const DATA_DIR_ENV: &str = "MERIDIAN_DATA_DIR";

// =============================================================================
// Persisted Subset
// =============================================================================

/// The persisted subset of UI state.
///
/// Exactly two fields survive a reload: the theme and whether the sidebar
/// was open. Adding a field here is a design-time decision, not something
/// callers opt into at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPrefs {
    pub theme: Theme,
    pub sidebar_open: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        UiPrefs {
            theme: Theme::default(),
            sidebar_open: true,
        }
    }
}

// =============================================================================
// Prefs Store
// =============================================================================

/// Durable key-value store for the persisted UI subset.
///
/// ## Usage
/// ```rust,no_run
/// use meridian_prefs::{PrefsStore, UiPrefs};
///
/// let store = PrefsStore::at_default_location()?;
/// let prefs = store.load()?.unwrap_or_default();
/// # Ok::<(), meridian_prefs::PrefsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Creates a store backed by `<dir>/<namespace>.json`.
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        PrefsStore {
            path: dir.as_ref().join(format!("{}.json", namespace)),
        }
    }

    /// Creates a store at the platform data directory under the default
    /// namespace.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.meridian.storefront/`
    /// - **Windows**: `%APPDATA%\meridian\storefront\data\`
    /// - **Linux**: `~/.local/share/meridian-storefront/`
    ///
    /// ## Development Override
    /// Set `MERIDIAN_DATA_DIR` to use a custom directory instead.
    pub fn at_default_location() -> PrefsResult<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PrefsStore::new(dir, PREFS_NAMESPACE));
        }

        let proj_dirs =
            ProjectDirs::from("com", "meridian", "storefront").ok_or(PrefsError::NoDataDir)?;

        Ok(PrefsStore::new(proj_dirs.data_dir(), PREFS_NAMESPACE))
    }

    /// Path of the backing blob.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted subset.
    ///
    /// ## Returns
    /// - `Ok(Some(prefs))` when a valid blob exists
    /// - `Ok(None)` when no blob has been written yet (fresh install)
    /// - `Err(Malformed)` when the blob exists but doesn't parse
    pub fn load(&self) -> PrefsResult<Option<UiPrefs>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences blob yet");
                return Ok(None);
            }
            Err(e) => return Err(PrefsError::Io(e)),
        };

        let prefs = serde_json::from_str(&raw).map_err(PrefsError::Malformed)?;
        debug!(path = %self.path.display(), "loaded preferences");
        Ok(Some(prefs))
    }

    /// Writes the persisted subset, overwriting any previous blob.
    ///
    /// Creates the data directory on first write. The caller treats this
    /// as best-effort: a failure is logged and dropped, never retried.
    pub fn save(&self, prefs: &UiPrefs) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(prefs).map_err(PrefsError::Malformed)?;
        fs::write(&self.path, raw)?;

        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_blob_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path(), PREFS_NAMESPACE);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path(), PREFS_NAMESPACE);

        let prefs = UiPrefs {
            theme: Theme::Dark,
            sidebar_open: false,
        };
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_save_creates_data_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let store = PrefsStore::new(&nested, PREFS_NAMESPACE);

        store.save(&UiPrefs::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_blob_is_malformed_not_io() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path(), PREFS_NAMESPACE);
        fs::write(store.path(), "{not json").unwrap();

        match store.load() {
            Err(PrefsError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path(), PREFS_NAMESPACE);

        store
            .save(&UiPrefs {
                theme: Theme::Dark,
                sidebar_open: true,
            })
            .unwrap();
        store
            .save(&UiPrefs {
                theme: Theme::System,
                sidebar_open: false,
            })
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.theme, Theme::System);
        assert!(!loaded.sidebar_open);
    }
}
