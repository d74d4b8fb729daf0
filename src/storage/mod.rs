use async_trait::async_trait;

use crate::error::Result;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The six blobs that make up the persisted site state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Announcements,
    Events,
    Gallery,
    Activities,
    Settings,
    NextId,
}

impl StorageKey {
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Announcements,
        StorageKey::Events,
        StorageKey::Gallery,
        StorageKey::Activities,
        StorageKey::Settings,
        StorageKey::NextId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Announcements => "nowzer_announcements",
            StorageKey::Events => "nowzer_events",
            StorageKey::Gallery => "nowzer_gallery",
            StorageKey::Activities => "nowzer_activities",
            StorageKey::Settings => "nowzer_settings",
            StorageKey::NextId => "nowzer_nextId",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw blob persistence. Serialization is the caller's concern.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    async fn read(&self, key: StorageKey) -> Result<Option<String>>;
    async fn write(&self, key: StorageKey, contents: &str) -> Result<()>;
}
