use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension,
    Json,
};

use crate::{
    api::{handlers::MessageResponse, middleware::auth::CurrentAdmin, state::AppState},
    domain::{CreateEventRequest, Event, EventFilter, UpdateEventRequest},
    error::{AppError, Result},
};

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

/// `?category=&search=&featured=&upcoming=`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<Event>>> {
    let events = state.service_context.event_repo.list(&filter).await?;
    Ok(Json(events))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Event>> {
    let event = state.service_context.event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(event))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = state.service_context.event_repo
        .create(request, &admin.username)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Event>> {
    let event = state.service_context.event_repo
        .update(id, request, &admin.username)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(event))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(admin): Extension<CurrentAdmin>,
) -> Result<Json<MessageResponse>> {
    if !state.service_context.event_repo.delete(id, &admin.username).await? {
        return Err(not_found());
    }

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
