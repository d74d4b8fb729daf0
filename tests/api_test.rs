use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use nowzer::{
    api::create_app,
    auth::AuthService,
    config::Settings,
    repository::DataStore,
    service::ServiceContext,
    storage::MemoryStorage,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const PASSWORD: &str = "correct horse";

async fn test_app(seed: bool) -> Router {
    let mut settings = Settings::default();
    settings.auth.admin_password = Some(PASSWORD.to_string());
    settings.auth.session_secret = "test-secret".to_string();

    let store = Arc::new(DataStore::open(Arc::new(MemoryStorage::new()), seed).await.unwrap());
    let auth_service = Arc::new(AuthService::new(&settings.auth).unwrap());
    let context = Arc::new(ServiceContext::new(store, auth_service));

    create_app(context, Arc::new(settings))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &Router) -> String {
    let (status, body) = send(app, json_request(
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": PASSWORD }),
    )).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_and_root() -> anyhow::Result<()> {
    let app = test_app(false).await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["gallery"], "/api/gallery");
    Ok(())
}

#[tokio::test]
async fn test_login_sets_cookie_and_rejects_bad_password() -> anyhow::Result<()> {
    let app = test_app(false).await;

    let response = app.clone().oneshot(json_request(
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": PASSWORD }),
    )).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    // The cookie alone is enough to reach admin routes
    let session_cookie = cookie.split(';').next().unwrap().to_string();
    let (status, body) = send(&app, Request::builder()
        .uri("/auth/session")
        .header(header::COOKIE, session_cookie)
        .body(Body::empty())?).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");

    let (status, body) = send(&app, json_request(
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": "wrong" }),
    )).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
    Ok(())
}

#[tokio::test]
async fn test_writes_require_session() -> anyhow::Result<()> {
    let app = test_app(true).await;

    let (status, _) = send(&app, json_request(
        "POST",
        "/api/announcements",
        None,
        json!({ "title": "X", "content": "Y", "date": "2024-09-01" }),
    )).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, authed("DELETE", "/api/events/1", "not-a-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/admin/dashboard")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Reads stay public
    let (status, body) = send(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_announcement_crud() -> anyhow::Result<()> {
    let app = test_app(false).await;
    let token = login(&app).await;

    let (status, created) = send(&app, json_request(
        "POST",
        "/api/announcements",
        Some(&token),
        json!({
            "title": "Picture Day",
            "content": "Wear your best smile.",
            "category": "Events",
            "date": "2024-10-02"
        }),
    )).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["author"], "admin");
    assert_eq!(created["published"], true);

    let (status, body) = send(&app, get("/api/announcements/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Picture Day");

    let (status, body) = send(&app, json_request(
        "PUT",
        "/api/announcements/1",
        Some(&token),
        json!({ "featured": true }),
    )).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["featured"], true);
    assert_eq!(body["title"], "Picture Day");

    let (status, body) = send(&app, get("/api/announcements?featured=true&category=Events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, authed("DELETE", "/api/announcements/1", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, get("/api/announcements/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, authed("DELETE", "/api/announcements/1", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_update_missing_event_is_not_found() -> anyhow::Result<()> {
    let app = test_app(false).await;
    let token = login(&app).await;

    let (status, _) = send(&app, json_request(
        "PUT",
        "/api/events/999",
        Some(&token),
        json!({ "title": "Ghost" }),
    )).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_gallery_requires_image_url() -> anyhow::Result<()> {
    let app = test_app(false).await;
    let token = login(&app).await;

    let (status, _) = send(&app, json_request(
        "POST",
        "/api/gallery",
        Some(&token),
        json!({ "title": "Blank", "imageUrl": "  " }),
    )).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, item) = send(&app, json_request(
        "POST",
        "/api/gallery",
        Some(&token),
        json!({ "title": "Robotics Demo", "imageUrl": "/robots.mp4", "type": "video", "category": "STEM Club" }),
    )).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["category"], "stem-club");
    assert_eq!(item["type"], "video");

    let (_, videos) = send(&app, get("/api/gallery?type=video")).await;
    assert_eq!(videos.as_array().map(Vec::len), Some(1));
    let (_, photos) = send(&app, get("/api/gallery?type=photo")).await;
    assert_eq!(photos.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn test_settings_put_merges() -> anyhow::Result<()> {
    let app = test_app(false).await;
    let token = login(&app).await;

    let (_, before) = send(&app, get("/api/settings")).await;

    let (status, after) = send(&app, json_request(
        "PUT",
        "/api/settings",
        Some(&token),
        json!({ "phone": "555-0100", "socialMedia": { "tiktok": "@nowzer" } }),
    )).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["phone"], "555-0100");
    assert_eq!(after["schoolName"], before["schoolName"]);
    assert_eq!(after["socialMedia"]["tiktok"], "@nowzer");
    assert_eq!(after["socialMedia"]["facebook"], before["socialMedia"]["facebook"]);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_and_activity_log() -> anyhow::Result<()> {
    let app = test_app(true).await;
    let token = login(&app).await;

    let (status, summary) = send(&app, authed("GET", "/admin/dashboard", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["announcements"]["total"], 3);
    assert_eq!(summary["gallery"]["videos"], 1);
    assert_eq!(summary["recentActivities"].as_array().map(Vec::len), Some(2));

    let (status, log) = send(&app, authed("GET", "/admin/activities", &token)).await;
    assert_eq!(status, StatusCode::OK);
    let first_id = log[0]["id"].as_u64().unwrap();

    let (status, _) = send(&app, authed("DELETE", &format!("/admin/activities/{}", first_id), &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, log) = send(&app, authed("GET", "/admin/activities", &token)).await;
    assert_eq!(log.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, authed("DELETE", "/admin/activities/999", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> anyhow::Result<()> {
    let app = test_app(false).await;

    let response = app.clone().oneshot(
        Request::builder().method("POST").uri("/auth/logout").body(Body::empty())?,
    ).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.contains("Max-Age=0"));
    Ok(())
}
