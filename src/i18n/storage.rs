// SPDX-License-Identifier: MPL-2.0
//! Persisted key/value preference storage.
//!
//! The resolver only needs two capabilities: read a named preference and
//! write one. Back-ends report failures through [`Result`]; the resolver
//! treats every failure as "nothing saved" on read and logs it on write.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Named string preferences that survive across sessions.
pub trait PreferenceStore: Send + Sync {
    /// Reads a preference; `Ok(None)` when nothing was saved.
    fn get(&self, name: &str) -> Result<Option<String>>;

    /// Writes a preference, replacing any previous value.
    fn set(&self, name: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get(&self, name: &str) -> Result<Option<String>> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        (**self).set(name, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, name: &str) -> Result<Option<String>> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        (**self).set(name, value)
    }
}

/// In-process store, useful for tests and embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one preference.
    pub fn with_entry(name: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(name.into(), value.into());
        }
        store
    }

    /// Copy of everything stored so far.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        Ok(entries.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        entries.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Store for environments without persistent storage.
///
/// Every read and write fails with [`Error::Storage`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _name: &str) -> Result<Option<String>> {
        Err(Error::Storage("persistent storage is unavailable".to_string()))
    }

    fn set(&self, _name: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("persistent storage is unavailable".to_string()))
    }
}

/// Preferences kept in the `[preferences]` table of `settings.toml`.
///
/// A missing file reads as empty. A file that exists but does not parse is
/// an error on both read and write, so other settings are never clobbered.
#[derive(Debug, Clone)]
pub struct ConfigFileStore {
    path: PathBuf,
}

impl ConfigFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `settings.toml` in the resolved config directory.
    ///
    /// Returns `None` when no config directory can be determined.
    pub fn from_config_dir(override_dir: Option<PathBuf>) -> Option<Self> {
        config::config_path_with_override(override_dir).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_config(&self) -> Result<Config> {
        if self.path.exists() {
            config::load_from_path(&self.path)
        } else {
            Ok(Config::default())
        }
    }
}

impl PreferenceStore for ConfigFileStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.read_config()?.preferences.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        let mut cfg = self.read_config()?;
        cfg.preferences.insert(name.to_string(), value.to_string());
        config::save_to_path(&cfg, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, PREFERENCE_KEY};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);

        store.set(PREFERENCE_KEY, "hi").unwrap();
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), Some("hi".to_string()));
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn memory_store_with_entry_is_seeded() {
        let store = MemoryStore::with_entry(PREFERENCE_KEY, "or");
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), Some("or".to_string()));
    }

    #[test]
    fn arc_store_shares_state() {
        let shared = Arc::new(MemoryStore::new());
        let handle: Box<dyn PreferenceStore> = Box::new(Arc::clone(&shared));
        handle.set("k", "v").unwrap();
        assert_eq!(shared.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn unavailable_store_always_fails() {
        assert!(matches!(UnavailableStore.get("k"), Err(Error::Storage(_))));
        assert!(matches!(UnavailableStore.set("k", "v"), Err(Error::Storage(_))));
    }

    #[test]
    fn config_file_store_missing_file_reads_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = ConfigFileStore::new(temp_dir.path().join(CONFIG_FILE));
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn config_file_store_persists_between_instances() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        ConfigFileStore::new(&path).set(PREFERENCE_KEY, "hi").unwrap();
        let reopened = ConfigFileStore::new(&path);
        assert_eq!(reopened.get(PREFERENCE_KEY).unwrap(), Some("hi".to_string()));
    }

    #[test]
    fn config_file_store_keeps_other_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlog_filter = \"debug\"\n").unwrap();

        ConfigFileStore::new(&path).set(PREFERENCE_KEY, "or").unwrap();

        let loaded = config::load_from_path(&path).unwrap();
        assert_eq!(loaded.general.log_filter.as_deref(), Some("debug"));
        assert_eq!(
            loaded.preferences.get(PREFERENCE_KEY).map(String::as_str),
            Some("or")
        );
    }

    #[test]
    fn config_file_store_refuses_to_overwrite_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").unwrap();

        let store = ConfigFileStore::new(&path);
        assert!(store.get(PREFERENCE_KEY).is_err());
        assert!(store.set(PREFERENCE_KEY, "hi").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not = valid = toml");
    }

    #[test]
    fn from_config_dir_uses_settings_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = ConfigFileStore::from_config_dir(Some(temp_dir.path().to_path_buf()))
            .expect("override always resolves");
        assert_eq!(store.path(), temp_dir.path().join(CONFIG_FILE).as_path());
    }
}
