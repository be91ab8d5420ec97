use async_trait::async_trait;
use directories::ProjectDirs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::traits::KeyValueStore;
use crate::constants::{APP_NAME, STORAGE_FILE_EXTENSION};
use crate::utils::{ClientError, Result};

/// Key-value storage keeping one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory for this application
    pub fn in_data_dir() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            ClientError::Config("Could not determine platform data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir()))
    }

    /// Directory holding the stored values
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ClientError::storage(
                key,
                std::io::Error::new(ErrorKind::InvalidInput, "invalid storage key"),
            ));
        }
        Ok(self
            .dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::storage(key, e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ClientError::storage(key, e))?;
        fs::write(&path, value)
            .await
            .map_err(|e| ClientError::storage(key, e))
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::storage(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_operations() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested"));

        // Missing key reads as absent
        assert_eq!(store.get_item("userInfo").await.unwrap(), None);

        store.set_item("userInfo", r#"{"id":"u1"}"#).await.unwrap();
        assert_eq!(
            store.get_item("userInfo").await.unwrap().as_deref(),
            Some(r#"{"id":"u1"}"#)
        );
        assert!(temp_dir.path().join("nested").join("userInfo.json").exists());

        // Overwrite
        store.set_item("userInfo", "{}").await.unwrap();
        assert_eq!(store.get_item("userInfo").await.unwrap().as_deref(), Some("{}"));

        store.remove_item("userInfo").await.unwrap();
        assert_eq!(store.get_item("userInfo").await.unwrap(), None);

        // Removing again is fine
        store.remove_item("userInfo").await.unwrap();
    }

    #[tokio::test]
    async fn test_key_validation() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.get_item("../escape").await.is_err());
        assert!(store.set_item("a/b", "x").await.is_err());
        assert!(store.remove_item("").await.is_err());
    }
}
