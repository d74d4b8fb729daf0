use std::sync::Arc;

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    domain::{
        Activity, ActivityAction, ActivityKind, Announcement, Event, GalleryItem, SiteSettings,
        ACTIVITY_LOG_CAPACITY,
    },
    error::Result,
    storage::{Storage, StorageKey},
};

use super::seed;

/// Next id to hand out, per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextIds {
    pub announcements: u64,
    pub events: u64,
    pub gallery: u64,
    pub activities: u64,
}

impl Default for NextIds {
    fn default() -> Self {
        Self {
            announcements: 1,
            events: 1,
            gallery: 1,
            activities: 1,
        }
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionCounts {
    pub announcements: usize,
    pub events: usize,
    pub gallery: usize,
    pub activities: usize,
}

/// Hands out the counter's current value and advances it, saturating at `u64::MAX`.
pub(super) fn take_id(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter = counter.saturating_add(1);
    id
}

#[derive(Debug, Clone, Default)]
pub(super) struct SiteState {
    pub announcements: Vec<Announcement>,
    pub events: Vec<Event>,
    pub gallery: Vec<GalleryItem>,
    pub activities: Vec<Activity>,
    pub settings: SiteSettings,
    pub next_id: NextIds,
}

impl SiteState {
    pub fn log_activity(
        &mut self,
        kind: ActivityKind,
        action: ActivityAction,
        title: &str,
        user: &str,
    ) {
        let id = take_id(&mut self.next_id.activities);

        self.activities.insert(0, Activity {
            id,
            kind,
            action,
            title: title.to_string(),
            timestamp: Utc::now(),
            user: user.to_string(),
        });
        self.activities.truncate(ACTIVITY_LOG_CAPACITY);
    }

    /// Counters may lag behind the data if the id file was lost or edited by hand.
    fn reconcile_ids(&mut self) {
        fn past<'a>(current: u64, ids: impl Iterator<Item = &'a u64>) -> u64 {
            ids.max().map_or(current, |max| current.max(max.saturating_add(1))).max(1)
        }

        self.next_id.announcements = past(self.next_id.announcements, self.announcements.iter().map(|a| &a.id));
        self.next_id.events = past(self.next_id.events, self.events.iter().map(|e| &e.id));
        self.next_id.gallery = past(self.next_id.gallery, self.gallery.iter().map(|g| &g.id));
        self.next_id.activities = past(self.next_id.activities, self.activities.iter().map(|a| &a.id));

        let next = self.next_id;
        if [next.announcements, next.events, next.gallery, next.activities].contains(&u64::MAX) {
            tracing::warn!("An id counter is at u64::MAX; new records will collide with existing ids");
        }
    }

    async fn load(storage: &dyn Storage) -> Self {
        let mut state = SiteState::default();

        if let Some(v) = load_key(storage, StorageKey::Announcements).await {
            state.announcements = v;
        }
        if let Some(v) = load_key(storage, StorageKey::Events).await {
            state.events = v;
        }
        if let Some(v) = load_key(storage, StorageKey::Gallery).await {
            state.gallery = v;
        }
        if let Some(v) = load_key(storage, StorageKey::Activities).await {
            state.activities = v;
        }
        if let Some(v) = load_key(storage, StorageKey::Settings).await {
            state.settings = v;
        }
        if let Some(v) = load_key(storage, StorageKey::NextId).await {
            state.next_id = v;
        }

        state
    }

    /// Writes every blob, changed or not. There is no atomicity across keys.
    async fn save(&self, storage: &dyn Storage) -> Result<()> {
        let blobs = [
            (StorageKey::Announcements, serde_json::to_string_pretty(&self.announcements)?),
            (StorageKey::Events, serde_json::to_string_pretty(&self.events)?),
            (StorageKey::Gallery, serde_json::to_string_pretty(&self.gallery)?),
            (StorageKey::Activities, serde_json::to_string_pretty(&self.activities)?),
            (StorageKey::Settings, serde_json::to_string_pretty(&self.settings)?),
            (StorageKey::NextId, serde_json::to_string_pretty(&self.next_id)?),
        ];

        for (key, contents) in blobs {
            storage.write(key, &contents).await.map_err(|e| {
                tracing::error!("Failed to save {}: {}", key, e);
                e
            })?;
        }

        Ok(())
    }
}

/// Absent, unreadable or unparsable blobs leave the default in place.
async fn load_key<T: DeserializeOwned>(storage: &dyn Storage, key: StorageKey) -> Option<T> {
    match storage.read(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Error parsing {}: {}. Keeping defaults.", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Error loading {}: {}. Keeping defaults.", key, e);
            None
        }
    }
}

/// The in-memory owner of every site collection.
///
/// All access goes through one async mutex and every mutation writes the full
/// state back through the configured [`Storage`] before the lock is released.
/// If that write fails the in-memory change is rolled back and the error is
/// returned.
pub struct DataStore {
    state: Mutex<SiteState>,
    storage: Arc<dyn Storage>,
}

impl DataStore {
    /// Loads whatever the backend holds and, when `seed_defaults` is set,
    /// fills empty collections with sample content.
    pub async fn open(storage: Arc<dyn Storage>, seed_defaults: bool) -> Result<Self> {
        let mut state = SiteState::load(storage.as_ref()).await;

        let seeded = seed_defaults && seed::seed_empty_collections(&mut state);
        state.reconcile_ids();

        if seeded {
            tracing::info!("Seeded empty collections with sample content");
            state.save(storage.as_ref()).await?;
        }

        tracing::debug!(
            announcements = state.announcements.len(),
            events = state.events.len(),
            gallery = state.gallery.len(),
            activities = state.activities.len(),
            "Data store ready"
        );

        Ok(Self {
            state: Mutex::new(state),
            storage,
        })
    }

    pub async fn next_ids(&self) -> NextIds {
        self.state.lock().await.next_id
    }

    pub async fn counts(&self) -> CollectionCounts {
        let state = self.state.lock().await;
        CollectionCounts {
            announcements: state.announcements.len(),
            events: state.events.len(),
            gallery: state.gallery.len(),
            activities: state.activities.len(),
        }
    }

    pub(super) async fn read<T: Send>(&self, f: impl FnOnce(&SiteState) -> T + Send) -> T {
        let state = self.state.lock().await;
        f(&state)
    }

    /// Runs `f` against the state and persists the result.
    pub(super) async fn mutate<T: Send>(
        &self,
        f: impl FnOnce(&mut SiteState) -> T + Send,
    ) -> Result<T> {
        let mut state = self.state.lock().await;
        let before = state.clone();

        let out = f(&mut state);
        self.commit(&mut state, before).await?;

        Ok(out)
    }

    /// Like [`DataStore::mutate`], but `None` from `f` (e.g. id not found)
    /// means nothing changed and skips persistence.
    pub(super) async fn mutate_existing<T: Send>(
        &self,
        f: impl FnOnce(&mut SiteState) -> Option<T> + Send,
    ) -> Result<Option<T>> {
        let mut state = self.state.lock().await;
        let before = state.clone();

        let Some(out) = f(&mut state) else {
            return Ok(None);
        };
        self.commit(&mut state, before).await?;

        Ok(Some(out))
    }

    async fn commit(&self, state: &mut SiteState, before: SiteState) -> Result<()> {
        if let Err(e) = state.save(self.storage.as_ref()).await {
            *state = before;
            return Err(e);
        }
        Ok(())
    }
}
