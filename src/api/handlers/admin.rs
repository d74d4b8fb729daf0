use axum::{
    extract::State,
    Json,
};

use crate::{
    api::state::AppState,
    error::Result,
    service::dashboard_service::DashboardSummary,
};

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>> {
    let summary = state.service_context.dashboard_service.summary().await?;
    Ok(Json(summary))
}
