use async_trait::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        ActivityAction, ActivityKind, Announcement, AnnouncementFilter, CreateAnnouncementRequest,
        UpdateAnnouncementRequest,
    },
    error::Result,
    repository::{data_store::take_id, AnnouncementRepository, DataStore},
};

#[async_trait]
impl AnnouncementRepository for DataStore {
    async fn list(&self, filter: &AnnouncementFilter) -> Result<Vec<Announcement>> {
        let mut announcements: Vec<Announcement> = self
            .read(|state| {
                state.announcements.iter()
                    .filter(|a| filter.matches(a))
                    .cloned()
                    .collect()
            })
            .await;

        announcements.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(announcements)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Announcement>> {
        Ok(self
            .read(|state| state.announcements.iter().find(|a| a.id == id).cloned())
            .await)
    }

    async fn create(&self, request: CreateAnnouncementRequest, actor: &str) -> Result<Announcement> {
        let announcement = self.mutate(|state| {
            let now = Utc::now();
            let id = take_id(&mut state.next_id.announcements);

            let author = request.author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| actor.to_string());

            let announcement = Announcement {
                id,
                title: request.title,
                content: request.content,
                excerpt: request.excerpt,
                category: request.category,
                date: request.date,
                author,
                featured: request.featured,
                published: request.published,
                urgent: request.urgent,
                created_at: now,
                updated_at: now,
            };

            state.announcements.push(announcement.clone());
            state.log_activity(
                ActivityKind::Announcement,
                ActivityAction::Created,
                &announcement.title,
                &announcement.author,
            );
            announcement
        })
        .await?;

        tracing::info!("Created announcement {} ({})", announcement.id, announcement.title);
        Ok(announcement)
    }

    async fn update(
        &self,
        id: u64,
        request: UpdateAnnouncementRequest,
        actor: &str,
    ) -> Result<Option<Announcement>> {
        let mut request = request;
        request.author = request.author.filter(|a| !a.trim().is_empty());

        let updated = self.mutate_existing(|state| {
            let credited = request.author.clone().unwrap_or_else(|| actor.to_string());
            let announcement = state.announcements.iter_mut().find(|a| a.id == id)?;

            announcement.apply(request);
            announcement.updated_at = Utc::now();
            let announcement = announcement.clone();

            state.log_activity(
                ActivityKind::Announcement,
                ActivityAction::Updated,
                &announcement.title,
                &credited,
            );
            Some(announcement)
        })
        .await?;

        if let Some(a) = &updated {
            tracing::info!("Updated announcement {}", a.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64, actor: &str) -> Result<bool> {
        let removed = self.mutate_existing(|state| {
            let index = state.announcements.iter().position(|a| a.id == id)?;
            let announcement = state.announcements.remove(index);
            state.log_activity(
                ActivityKind::Announcement,
                ActivityAction::Deleted,
                &announcement.title,
                actor,
            );
            Some(())
        })
        .await?;

        if removed.is_some() {
            tracing::info!("Deleted announcement {}", id);
        }
        Ok(removed.is_some())
    }
}
