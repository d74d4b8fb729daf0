pub mod dashboard_service;

use std::sync::Arc;
use crate::repository::*;
use crate::auth::AuthService;
use dashboard_service::DashboardService;

pub struct ServiceContext {
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub gallery_repo: Arc<dyn GalleryRepository>,
    pub activity_repo: Arc<dyn ActivityRepository>,
    pub settings_repo: Arc<dyn SiteSettingsRepository>,
    pub auth_service: Arc<AuthService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl ServiceContext {
    /// Wires every repository to the same data store.
    pub fn new(store: Arc<DataStore>, auth_service: Arc<AuthService>) -> Self {
        let announcement_repo: Arc<dyn AnnouncementRepository> = store.clone();
        let event_repo: Arc<dyn EventRepository> = store.clone();
        let gallery_repo: Arc<dyn GalleryRepository> = store.clone();
        let activity_repo: Arc<dyn ActivityRepository> = store.clone();
        let settings_repo: Arc<dyn SiteSettingsRepository> = store;

        let dashboard_service = Arc::new(DashboardService::new(
            announcement_repo.clone(),
            event_repo.clone(),
            gallery_repo.clone(),
            activity_repo.clone(),
        ));

        Self {
            announcement_repo,
            event_repo,
            gallery_repo,
            activity_repo,
            settings_repo,
            auth_service,
            dashboard_service,
        }
    }
}
