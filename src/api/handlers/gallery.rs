use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension,
    Json,
};

use crate::{
    api::{handlers::MessageResponse, middleware::auth::CurrentAdmin, state::AppState},
    domain::{CreateGalleryItemRequest, GalleryFilter, GalleryItem, UpdateGalleryItemRequest},
    error::{AppError, Result},
};

fn not_found() -> AppError {
    AppError::NotFound("Gallery item not found".to_string())
}

/// `?category=&type=&year=&featured=`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GalleryFilter>,
) -> Result<Json<Vec<GalleryItem>>> {
    let items = state.service_context.gallery_repo.list(&filter).await?;
    Ok(Json(items))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<GalleryItem>> {
    let item = state.service_context.gallery_repo
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(item))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<CreateGalleryItemRequest>,
) -> Result<(StatusCode, Json<GalleryItem>)> {
    if request.image_url.trim().is_empty() {
        return Err(AppError::BadRequest("imageUrl is required".to_string()));
    }

    let item = state.service_context.gallery_repo
        .create(request, &admin.username)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<UpdateGalleryItemRequest>,
) -> Result<Json<GalleryItem>> {
    let item = state.service_context.gallery_repo
        .update(id, request, &admin.username)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(item))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
) -> Result<Json<MessageResponse>> {
    if !state.service_context.gallery_repo.delete(id, &admin.username).await? {
        return Err(not_found());
    }

    Ok(Json(MessageResponse::new("Gallery item deleted successfully")))
}
