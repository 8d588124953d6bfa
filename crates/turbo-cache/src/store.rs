//! Raw key-value backends.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::CacheError;

/// Thread-safety bound for store backends.
///
/// Native backends must be `Send + Sync`. On `wasm32` components run on a
/// single thread and host handles are neither, so the bound is empty there.
#[cfg(not(target_arch = "wasm32"))]
pub trait StoreBounds: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> StoreBounds for T {}

/// Thread-safety bound for store backends.
#[cfg(target_arch = "wasm32")]
pub trait StoreBounds {}

#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> StoreBounds for T {}

/// A byte-valued key-value store.
///
/// Implementations must make each call atomic from the caller's point of
/// view: a reader never observes a partially written value.
pub trait KvStore: StoreBounds {
    /// Get the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Set the raw value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove a key. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with string values.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<[u8]>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.as_ref().to_vec()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

fn poisoned<T>(_: T) -> CacheError {
    CacheError::StoreError("store lock poisoned".to_string())
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Store persisted as a single JSON object on disk.
///
/// Values must be UTF-8. The file is re-read on every access so edits made
/// by another process are picked up; writes replace the whole file through
/// a temporary sibling and a rename.
///
/// Reads of a file that is not a JSON object fail with
/// [`CacheError::Corrupt`]. Writes start over from an empty map instead, so
/// the next `set` or `delete` replaces the unreadable file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) a store at `path`.
    ///
    /// The parent directory is created if missing. The file itself is only
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CacheError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| CacheError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    /// Entries to write back to. Unreadable content is discarded.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match self.load() {
            Err(CacheError::Corrupt(_)) => Ok(BTreeMap::new()),
            other => other,
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.load()?.remove(key).map(String::into_bytes))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let value = std::str::from_utf8(value)
            .map_err(|e| CacheError::StoreError(format!("value for {} is not UTF-8: {}", key, e)))?;
        let _guard = self.write_lock.lock().map_err(poisoned)?;
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().map_err(poisoned)?;
        match self.load() {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.save(&entries)?;
                }
                Ok(())
            }
            Err(CacheError::Corrupt(_)) => self.save(&BTreeMap::new()),
            Err(e) => Err(e),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.load()?.into_keys().collect())
    }
}
