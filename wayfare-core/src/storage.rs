//! String-keyed persistent storage.
//!
//! Stores hold serialized JSON documents under fixed keys. Reads are
//! best-effort: a missing or unreadable value is reported as absent and
//! logged, never returned as a hard failure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{WayfareError, WayfareResult};

pub const TRIPS_KEY: &str = "barcelonaTrips";
pub const IDEAS_KEY: &str = "barcelonaGeneralIdeas";
pub const FAVORITES_KEY: &str = "localFavorites";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> WayfareResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> WayfareResult<()>;
    /// Removing a key that does not exist is not an error.
    fn remove(&mut self, key: &str) -> WayfareResult<()>;
}

/// Lives for the duration of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> WayfareResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> WayfareResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WayfareResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> WayfareResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(WayfareError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> WayfareResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> WayfareResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let temp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WayfareResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Read the raw JSON stored under `key`.
///
/// Returns None when the key is missing, unreadable, or not valid JSON.
pub fn load_value<S: KeyValueStore>(store: &S, key: &str) -> Option<Value> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No saved data under '{key}'");
            return None;
        }
        Err(e) => {
            tracing::error!("Error loading '{key}': {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Ignoring malformed data under '{key}': {e}");
            None
        }
    }
}

/// Decode a (migrated) JSON value. None when there was nothing to decode
/// or the value does not match `T`.
pub fn decode_value<T: DeserializeOwned>(key: &str, value: Option<Value>) -> Option<T> {
    match serde_json::from_value(value?) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::error!("Ignoring unreadable data under '{key}': {e}");
            None
        }
    }
}

pub fn save_json<S: KeyValueStore, T: Serialize + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> WayfareResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "[1,2]").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("[1,2]"));
        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get(TRIPS_KEY).unwrap(), None);
        store.set(TRIPS_KEY, "[]").unwrap();
        assert_eq!(store.get(TRIPS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data").join("barcelonaTrips.json").exists());
        assert!(!dir.path().join("data").join("barcelonaTrips.json.tmp").exists());

        store.remove(TRIPS_KEY).unwrap();
        assert_eq!(store.get(TRIPS_KEY).unwrap(), None);
        store.remove(TRIPS_KEY).unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.set("../escape", "{}").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_load_value_is_best_effort() {
        let mut store = MemoryStore::new();
        assert_eq!(load_value(&store, FAVORITES_KEY), None);

        store.set(FAVORITES_KEY, "{not json").unwrap();
        assert_eq!(load_value(&store, FAVORITES_KEY), None);

        store.set(FAVORITES_KEY, "[]").unwrap();
        assert_eq!(load_value(&store, FAVORITES_KEY), Some(Value::Array(vec![])));
    }

    #[test]
    fn test_decode_value() {
        let decoded: Option<Vec<i64>> = decode_value("k", Some(serde_json::json!({"x": 1})));
        assert_eq!(decoded, None);
        let decoded: Option<Vec<i64>> = decode_value("k", None);
        assert_eq!(decoded, None);
        let decoded: Option<Vec<i64>> = decode_value("k", Some(serde_json::json!([3, 4])));
        assert_eq!(decoded, Some(vec![3, 4]));
    }
}
