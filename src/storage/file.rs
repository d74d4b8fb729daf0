use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{Storage, StorageKey};
use crate::error::Result;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn read(&self, key: StorageKey) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: StorageKey, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        // Write to a sibling and rename so readers never see a truncated file.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key.as_str()));
        fs::write(&tmp, contents.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_returns_none_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path());
        assert!(store.read(StorageKey::Events).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");
        let store = FileStorage::new(&nested);

        store.write(StorageKey::Settings, "{}").await.unwrap();

        let path = nested.join("nowzer_settings.json");
        assert!(path.exists());
        assert!(!nested.join("nowzer_settings.json.tmp").exists());
        assert_eq!(store.read(StorageKey::Settings).await.unwrap().as_deref(), Some("{}"));
    }
}
