use async_trait::async_trait;

use crate::{
    domain::{ActivityAction, ActivityKind, SiteSettings, UpdateSiteSettingsRequest},
    error::Result,
    repository::{DataStore, SiteSettingsRepository},
};

#[async_trait]
impl SiteSettingsRepository for DataStore {
    async fn get(&self) -> Result<SiteSettings> {
        Ok(self.read(|state| state.settings.clone()).await)
    }

    async fn update(&self, request: UpdateSiteSettingsRequest, actor: &str) -> Result<SiteSettings> {
        let settings = self.mutate(|state| {
            state.settings.merge(request);
            state.log_activity(ActivityKind::Settings, ActivityAction::Updated, "Site Settings", actor);
            state.settings.clone()
        })
        .await?;

        tracing::info!("Site settings updated by {}", actor);
        Ok(settings)
    }
}
