use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{Storage, StorageKey};
use crate::error::{AppError, Result};

/// In-process key-value backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn read(&self, key: StorageKey) -> Result<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| AppError::Storage("memory storage lock poisoned".to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    async fn write(&self, key: StorageKey, contents: &str) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| AppError::Storage("memory storage lock poisoned".to_string()))?;
        guard.insert(key, contents.to_string());
        Ok(())
    }
}
