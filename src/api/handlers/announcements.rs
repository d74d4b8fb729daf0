use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension,
    Json,
};

use crate::{
    api::{handlers::MessageResponse, middleware::auth::CurrentAdmin, state::AppState},
    domain::{Announcement, AnnouncementFilter, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    error::{AppError, Result},
};

fn not_found() -> AppError {
    AppError::NotFound("Announcement not found".to_string())
}

/// `?category=&search=&featured=&published=`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AnnouncementFilter>,
) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_repo.list(&filter).await?;
    Ok(Json(announcements))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Announcement>> {
    let announcement = state.service_context.announcement_repo
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(announcement))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>)> {
    let announcement = state.service_context.announcement_repo
        .create(request, &admin.username)
        .await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Announcement>> {
    let announcement = state.service_context.announcement_repo
        .update(id, request, &admin.username)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(announcement))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
) -> Result<Json<MessageResponse>> {
    if !state.service_context.announcement_repo.delete(id, &admin.username).await? {
        return Err(not_found());
    }

    Ok(Json(MessageResponse::new("Announcement deleted successfully")))
}
