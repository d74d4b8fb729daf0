use async_trait::async_trait;
use crate::domain::*;
use crate::error::Result;

pub mod data_store;
mod seed;
pub mod announcement_repository;
pub mod event_repository;
pub mod gallery_repository;
pub mod activity_repository;
pub mod settings_repository;

pub use data_store::{CollectionCounts, DataStore, NextIds};

/// `actor` is the admin performing the change; it is recorded in the activity log.
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Newest date first.
    async fn list(&self, filter: &AnnouncementFilter) -> Result<Vec<Announcement>>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Announcement>>;
    async fn create(&self, request: CreateAnnouncementRequest, actor: &str) -> Result<Announcement>;
    async fn update(&self, id: u64, request: UpdateAnnouncementRequest, actor: &str) -> Result<Option<Announcement>>;
    async fn delete(&self, id: u64, actor: &str) -> Result<bool>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Soonest date first.
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Event>>;
    async fn create(&self, request: CreateEventRequest, actor: &str) -> Result<Event>;
    async fn update(&self, id: u64, request: UpdateEventRequest, actor: &str) -> Result<Option<Event>>;
    async fn delete(&self, id: u64, actor: &str) -> Result<bool>;
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Newest date first.
    async fn list(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>>;
    async fn find_by_id(&self, id: u64) -> Result<Option<GalleryItem>>;
    async fn create(&self, request: CreateGalleryItemRequest, actor: &str) -> Result<GalleryItem>;
    async fn update(&self, id: u64, request: UpdateGalleryItemRequest, actor: &str) -> Result<Option<GalleryItem>>;
    async fn delete(&self, id: u64, actor: &str) -> Result<bool>;
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Most recent first, at most [`ACTIVITY_LOG_CAPACITY`] entries.
    async fn list(&self) -> Result<Vec<Activity>>;
    async fn delete(&self, id: u64) -> Result<bool>;
}

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    async fn get(&self) -> Result<SiteSettings>;
    async fn update(&self, request: UpdateSiteSettingsRequest, actor: &str) -> Result<SiteSettings>;
}
