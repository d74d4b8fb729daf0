use async_trait::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        normalize_category, ActivityAction, ActivityKind, CreateGalleryItemRequest, GalleryFilter,
        GalleryItem, MediaType, UpdateGalleryItemRequest,
    },
    error::Result,
    repository::{data_store::take_id, DataStore, GalleryRepository},
};

#[async_trait]
impl GalleryRepository for DataStore {
    async fn list(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>> {
        let mut items: Vec<GalleryItem> = self
            .read(|state| {
                state.gallery.iter()
                    .filter(|g| filter.matches(g))
                    .cloned()
                    .collect()
            })
            .await;

        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<GalleryItem>> {
        Ok(self
            .read(|state| state.gallery.iter().find(|g| g.id == id).cloned())
            .await)
    }

    async fn create(&self, request: CreateGalleryItemRequest, actor: &str) -> Result<GalleryItem> {
        let item = self.mutate(|state| {
            let now = Utc::now();
            let id = take_id(&mut state.next_id.gallery);

            // Each upload is a single photo.
            let photos = (request.media_type == MediaType::Photo).then_some(1);
            let thumbnail = request.thumbnail.filter(|t| *t != request.image_url);

            let item = GalleryItem {
                id,
                title: request.title,
                description: request.description,
                image_url: request.image_url,
                thumbnail,
                category: normalize_category(&request.category),
                year: request.year,
                media_type: request.media_type,
                featured: request.featured,
                date: now.date_naive(),
                photos,
                duration: request.duration,
                created_at: now,
                updated_at: now,
            };

            state.gallery.push(item.clone());
            state.log_activity(ActivityKind::Gallery, ActivityAction::Created, &item.title, actor);
            item
        })
        .await?;

        tracing::info!("Created gallery item {} ({})", item.id, item.title);
        Ok(item)
    }

    async fn update(
        &self,
        id: u64,
        request: UpdateGalleryItemRequest,
        actor: &str,
    ) -> Result<Option<GalleryItem>> {
        let updated = self.mutate_existing(|state| {
            let item = state.gallery.iter_mut().find(|g| g.id == id)?;

            item.apply(request);
            item.updated_at = Utc::now();
            let item = item.clone();

            state.log_activity(ActivityKind::Gallery, ActivityAction::Updated, &item.title, actor);
            Some(item)
        })
        .await?;

        if updated.is_some() {
            tracing::info!("Updated gallery item {}", id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64, actor: &str) -> Result<bool> {
        let removed = self.mutate_existing(|state| {
            let index = state.gallery.iter().position(|g| g.id == id)?;
            let item = state.gallery.remove(index);
            state.log_activity(ActivityKind::Gallery, ActivityAction::Deleted, &item.title, actor);
            Some(())
        })
        .await?;

        if removed.is_some() {
            tracing::info!("Deleted gallery item {}", id);
        }
        Ok(removed.is_some())
    }
}
