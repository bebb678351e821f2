//! Key-value store abstraction
//!
//! The budget is persisted as a handful of string values under fixed keys. Any
//! backend that can read, write and remove strings by key can hold it.

use std::collections::HashMap;

use crate::error::{BudgetError, BudgetResult};

/// A flat string-to-string store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> BudgetResult<()>;

    /// Remove every key
    fn clear(&mut self) -> BudgetResult<()>;
}

/// In-memory store, used by tests and as a scratch backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent write, remove and clear fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> BudgetResult<()> {
        if self.fail_writes {
            return Err(BudgetError::Storage("store is read-only".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.check_writable()?;
        self.entries.clear();
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> BudgetResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        (**self).clear()
    }
}
