use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::Result;

/// A small persistent key-value store for integer records such as best times.
pub trait RecordStore {
    /// Reads the record stored under `key`.
    fn get(&self, key: &str) -> Option<u64>;

    /// Stores `value` under `key`, replacing any previous record.
    fn set(&mut self, key: &str, value: u64) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &mut T {
    fn get(&self, key: &str) -> Option<u64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u64) -> Result<()> {
        (**self).set(key, value)
    }
}

/// A store that forgets everything when dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, u64>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.records.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<()> {
        self.records.insert(key.to_owned(), value);
        Ok(())
    }
}

/// A store kept in a JSON object on disk, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, u64>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is treated as an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records: BTreeMap<String, u64> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), records = records.len(), "opened record store");

        Ok(Self { path, records })
    }

    /// Where the store is kept.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.records.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<()> {
        self.records.insert(key.to_owned(), value);
        fs::write(&self.path, serde_json::to_string_pretty(&self.records)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("wordsearch_record_animals"), None);
        store.set("wordsearch_record_animals", 42_000).unwrap();
        assert_eq!(store.get("wordsearch_record_animals"), Some(42_000));
    }

    #[test]
    fn json_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("wordsearch_record_colors"), None);
        store.set("wordsearch_record_colors", 61_000).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("wordsearch_record_colors"), Some(61_000));
    }

    #[test]
    fn json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(JsonFileStore::open(&path), Err(Error::Json(_))));
    }
}
