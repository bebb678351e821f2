//! File-backed key-value store
//!
//! Each key is a file inside the store directory holding the raw value.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_io::{is_temp_file, read_optional, remove_if_exists, write_atomic};
use super::kv::KeyValueStore;
use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

/// One file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store under the configured base directory, creating it if needed
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.store_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys currently present, sorted
    pub fn keys(&self) -> BudgetResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || is_temp_file(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if is_valid_key(name) {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn path_for(&self, key: &str) -> BudgetResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(BudgetError::Validation(format!(
                "Invalid store key '{}'",
                key
            )));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> BudgetResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes())?;
        debug!(key, bytes = value.len(), "wrote store key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        remove_if_exists(self.path_for(key)?)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }
}

/// Keys become file names, so keep them to a portable charset
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("store"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_key_reads_none() {
        let (_temp, store) = temp_store();
        assert_eq!(store.read("budget_income").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let (_temp, mut store) = temp_store();
        store.write("budget_currency", "£").unwrap();
        assert_eq!(store.read("budget_currency").unwrap().as_deref(), Some("£"));
        assert!(store.dir().join("budget_currency").exists());
    }

    #[test]
    fn test_remove_and_clear() {
        let (_temp, mut store) = temp_store();
        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["b"]);

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let (_temp, mut store) = temp_store();
        assert!(store.write("../escape", "x").is_err());
        assert!(store.write("", "x").is_err());
        assert!(store.read(".hidden").is_err());

        assert!(is_valid_key("budget_categories"));
        assert!(!is_valid_key("a/b"));
        assert!(!is_valid_key("with space"));
    }

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("budget"));
        let store = FileStore::open(&paths).unwrap();
        assert!(store.dir().is_dir());
        assert_eq!(store.dir(), paths.store_dir().as_path());
    }
}
