//! Key-value storage backends for persisted library state

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract key-value storage.
/// Each key holds one serialized document.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Store `data` under `key`, replacing any previous value
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Delete the value stored under `key`
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// List keys starting with `prefix`
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Check whether `key` holds a value
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// Keys may only contain ASCII alphanumerics, `-`, `_` and `.`, and may not
/// start with a dot
fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Local filesystem storage: one `<key>.json` file per key under a root
/// directory
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    const EXTENSION: &'static str = "json";

    /// Create a new local storage provider with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, Self::EXTENSION)))
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(key)?;
        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    /// Writes to a temp file then renames, so readers never see a partial
    /// document
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let full_path = self.full_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let temp_path = full_path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, data)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        tokio::fs::rename(&temp_path, &full_path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let full_path = self.full_path(key)?;
        match tokio::fs::remove_file(full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut read_dir = match tokio::fs::read_dir(&self.root).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(keys),
            Err(e) => return Err(StorageError::Backend(e.to_string())),
        };

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(Self::EXTENSION) {
                continue;
            }
            if let Some(key) = path.file_stem().and_then(|s| s.to_str()) {
                if key.starts_with(prefix) {
                    keys.push(key.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let full_path = self.full_path(key)?;
        tokio::fs::try_exists(full_path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

/// In-memory storage provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::Backend("memory storage lock poisoned".to_string())
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.data
            .read()
            .map_err(|_| Self::poisoned())?
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        validate_key(key)?;
        self.data
            .write()
            .map_err(|_| Self::poisoned())?
            .insert(key.to_string(), data);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|_| Self::poisoned())?
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .data
            .read()
            .map_err(|_| Self::poisoned())?
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self
            .data
            .read()
            .map_err(|_| Self::poisoned())?
            .contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();

        // Write
        storage.write("lnreader-test", b"[]".to_vec()).await.unwrap();

        // Read
        let data = storage.read("lnreader-test").await.unwrap();
        assert_eq!(data, b"[]");

        // Exists
        assert!(storage.exists("lnreader-test").await.unwrap());
        assert!(!storage.exists("missing").await.unwrap());

        // List
        assert_eq!(storage.list("lnreader-").await.unwrap(), ["lnreader-test"]);

        // Delete
        storage.delete("lnreader-test").await.unwrap();
        assert!(!storage.exists("lnreader-test").await.unwrap());
        assert!(matches!(
            storage.read("lnreader-test").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("data"));

        assert!(matches!(
            storage.read("lnreader-novels").await,
            Err(StorageError::NotFound(_))
        ));
        assert!(storage.list("").await.unwrap().is_empty());

        storage
            .write("lnreader-novels", b"[1]".to_vec())
            .await
            .unwrap();
        assert_eq!(storage.read("lnreader-novels").await.unwrap(), b"[1]");
        assert!(dir.path().join("data/lnreader-novels.json").exists());
        assert!(!dir.path().join("data/lnreader-novels.json.tmp").exists());
        assert_eq!(storage.list("lnreader").await.unwrap(), ["lnreader-novels"]);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let storage = LocalStorage::new("/tmp/unused");
        for key in ["../escape", "a/b", "", ".hidden"] {
            assert!(matches!(
                storage.write(key, Vec::new()).await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
