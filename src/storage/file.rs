use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::RecibookError;

/// Storage backed by one JSON object file mapping keys to string values.
///
/// Every write rewrites the whole file, so a value is either fully present
/// or absent.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/local.json`, surviving across sessions
    pub fn durable(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join("local.json"))
    }

    /// `<dir>/session.json`, cleared when the session is reset
    pub fn session(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete every key by removing the backing file
    pub fn clear(&self) -> Result<(), RecibookError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_map(&self) -> Result<Map<String, Value>, RecibookError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(RecibookError::StorageError(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Existing entries, or an empty map when the file is unreadable
    fn read_map_for_write(&self) -> Map<String, Value> {
        self.read_map().unwrap_or_else(|e| {
            warn!(
                "Discarding unreadable storage file {}: {}",
                self.path.display(),
                e
            );
            Map::new()
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), RecibookError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, body)?;
        debug!("Wrote {} keys to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, RecibookError> {
        Ok(match self.read_map()?.remove(key) {
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
            None => None,
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecibookError> {
        let mut map = self.read_map_for_write();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), RecibookError> {
        let mut map = self.read_map_for_write();
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
