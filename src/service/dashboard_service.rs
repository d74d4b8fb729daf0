use std::sync::Arc;

use serde::Serialize;

use crate::{
    domain::{Activity, AnnouncementFilter, EventFilter, GalleryFilter, MediaType},
    error::Result,
    repository::{ActivityRepository, AnnouncementRepository, EventRepository, GalleryRepository},
};

const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub announcements: AnnouncementCounts,
    pub events: EventCounts,
    pub gallery: GalleryCounts,
    pub recent_activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementCounts {
    pub total: usize,
    pub published: usize,
    pub featured: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCounts {
    pub total: usize,
    pub upcoming: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryCounts {
    pub total: usize,
    pub photos: usize,
    pub videos: usize,
}

/// Composes the admin landing view from the content repositories.
pub struct DashboardService {
    announcements: Arc<dyn AnnouncementRepository>,
    events: Arc<dyn EventRepository>,
    gallery: Arc<dyn GalleryRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl DashboardService {
    pub fn new(
        announcements: Arc<dyn AnnouncementRepository>,
        events: Arc<dyn EventRepository>,
        gallery: Arc<dyn GalleryRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self { announcements, events, gallery, activities }
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        let announcements = self.announcements.list(&AnnouncementFilter::default()).await?;
        let events = self.events.list(&EventFilter::default()).await?;
        let upcoming = self.events
            .list(&EventFilter { upcoming: Some(true), ..Default::default() })
            .await?
            .len();
        let gallery = self.gallery.list(&GalleryFilter::default()).await?;
        let mut recent_activities = self.activities.list().await?;
        recent_activities.truncate(RECENT_ACTIVITY_LIMIT);

        Ok(DashboardSummary {
            announcements: AnnouncementCounts {
                total: announcements.len(),
                published: announcements.iter().filter(|a| a.published).count(),
                featured: announcements.iter().filter(|a| a.featured).count(),
            },
            events: EventCounts {
                total: events.len(),
                upcoming,
            },
            gallery: GalleryCounts {
                total: gallery.len(),
                photos: gallery.iter().filter(|g| g.media_type == MediaType::Photo).count(),
                videos: gallery.iter().filter(|g| g.media_type == MediaType::Video).count(),
            },
            recent_activities,
        })
    }
}
