use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::RecibookError;

/// In-process storage, used for tests and as a throwaway session store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, like a browser over its quota.
    /// Reads still succeed.
    pub fn failing_writes() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    /// Pre-populate a key, bypassing `fail_writes`
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, RecibookError> {
        self.entries
            .lock()
            .map_err(|_| RecibookError::StorageError("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, RecibookError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecibookError> {
        if self.fail_writes {
            return Err(RecibookError::StorageError(format!(
                "quota exceeded while writing '{}'",
                key
            )));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RecibookError> {
        if self.fail_writes {
            return Err(RecibookError::StorageError(format!(
                "storage unavailable while removing '{}'",
                key
            )));
        }
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_failing_writes_keep_existing_entries() {
        let storage = MemoryStorage::failing_writes().with_entry("k", "old");
        assert!(storage.set("k", "new").is_err());
        assert!(storage.remove("k").is_err());
        assert_eq!(storage.get("k").unwrap(), Some("old".to_string()));
    }
}
