use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub mod history;

pub use history::HistoryStore;

/// Key-value persistence capability.
///
/// The original client branched between browser-local and native storage;
/// both reduce to these three operations. The platform picks an
/// implementation, everything above works against the trait.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// In-memory storage, used in tests and when persistence is disabled
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one JSON file per key under a data directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys become file names, so reject anything that could escape the root
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("kotoba-storage-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("missing").unwrap().is_none());

        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));

        storage.remove("key").unwrap();
        assert!(storage.get("key").unwrap().is_none());
    }

    #[test]
    fn file_storage_roundtrip() {
        let root = temp_root();
        let storage = FileStorage::new(&root).unwrap();

        assert!(storage.get("history").unwrap().is_none());
        storage.set("history", "[]").unwrap();
        assert_eq!(storage.get("history").unwrap().as_deref(), Some("[]"));

        storage.remove("history").unwrap();
        assert!(storage.get("history").unwrap().is_none());
        // removing a missing key is not an error
        storage.remove("history").unwrap();

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn file_storage_rejects_path_keys() {
        let root = temp_root();
        let storage = FileStorage::new(&root).unwrap();

        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
