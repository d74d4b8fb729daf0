pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put, delete},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;

use crate::{
    config::Settings,
    service::ServiceContext,
};
use state::AppState;

pub fn create_app(
    service_context: Arc<ServiceContext>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))

        // Auth routes
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route(
            "/auth/session",
            get(handlers::auth::session)
                .route_layer(from_fn_with_state(app_state.clone(), middleware::auth::require_admin)),
        )

        // Content routes: reads are public, writes need an admin session
        .nest("/api", api_routes(app_state.clone()))

        // Admin routes
        .nest("/admin", admin_routes(app_state.clone()))

        // Add state to the router
        .with_state(app_state)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/announcements", announcement_routes(state.clone()))
        .nest("/events", event_routes(state.clone()))
        .nest("/gallery", gallery_routes(state.clone()))
        .nest("/settings", settings_routes(state))
}

fn announcement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::announcements::list))
        .route("/:id", get(handlers::announcements::get))
        .merge(Router::new()
            .route("/", post(handlers::announcements::create))
            .route("/:id", put(handlers::announcements::update))
            .route("/:id", delete(handlers::announcements::delete))
            .route_layer(from_fn_with_state(state, middleware::auth::require_admin))
        )
}

fn event_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::events::list))
        .route("/:id", get(handlers::events::get))
        .merge(Router::new()
            .route("/", post(handlers::events::create))
            .route("/:id", put(handlers::events::update))
            .route("/:id", delete(handlers::events::delete))
            .route_layer(from_fn_with_state(state, middleware::auth::require_admin))
        )
}

fn gallery_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::gallery::list))
        .route("/:id", get(handlers::gallery::get))
        .merge(Router::new()
            .route("/", post(handlers::gallery::create))
            .route("/:id", put(handlers::gallery::update))
            .route("/:id", delete(handlers::gallery::delete))
            .route_layer(from_fn_with_state(state, middleware::auth::require_admin))
        )
}

fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::settings::get_settings))
        .merge(Router::new()
            .route("/", put(handlers::settings::update_settings))
            .route_layer(from_fn_with_state(state, middleware::auth::require_admin))
        )
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::admin::dashboard))
        .route("/activities", get(handlers::activities::list))
        .route("/activities/:id", delete(handlers::activities::delete))
        .route_layer(from_fn_with_state(state, middleware::auth::require_admin))
}
