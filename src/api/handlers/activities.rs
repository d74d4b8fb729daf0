use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{handlers::MessageResponse, state::AppState},
    domain::Activity,
    error::{AppError, Result},
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Activity>>> {
    let activities = state.service_context.activity_repo.list().await?;
    Ok(Json(activities))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>> {
    if !state.service_context.activity_repo.delete(id).await? {
        return Err(AppError::NotFound("Activity not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Activity deleted successfully")))
}
