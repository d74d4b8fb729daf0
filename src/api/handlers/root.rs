use axum::{http::StatusCode, Json, response::IntoResponse};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Nowzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Content API for the Nowzer school website",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "auth": "/auth/login",
            "announcements": "/api/announcements",
            "events": "/api/events",
            "gallery": "/api/gallery",
            "settings": "/api/settings",
            "admin": "/admin"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
