use axum::{
    extract::State,
    Extension,
    Json,
};

use crate::{
    api::{middleware::auth::CurrentAdmin, state::AppState},
    domain::{SiteSettings, UpdateSiteSettingsRequest},
    error::Result,
};

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    let settings = state.service_context.settings_repo.get().await?;
    Ok(Json(settings))
}

/// Partial update; `socialMedia` links are merged individually.
pub async fn update_settings(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<UpdateSiteSettingsRequest>,
) -> Result<Json<SiteSettings>> {
    let settings = state.service_context.settings_repo
        .update(request, &admin.username)
        .await?;

    Ok(Json(settings))
}
