use axum::{
    extract::State,
    http::StatusCode,
    Extension,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    api::{middleware::auth::CurrentAdmin, state::AppState},
    auth::AuthService,
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub username: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let auth_service = &state.service_context.auth_service;

    let token = auth_service
        .login(&req.username, &req.password)?
        .ok_or_else(|| {
            tracing::warn!("Failed admin login for {:?}", req.username);
            AppError::Unauthorized
        })?;

    tracing::info!("Admin {} logged in", req.username);

    let cookie = auth_service.create_session_cookie(&token);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            token,
            username: req.username,
            expires_in: auth_service.session_ttl().num_seconds(),
        }),
    ))
}

/// Sessions are stateless; dropping the cookie is all logout can do.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.add(AuthService::create_logout_cookie()), StatusCode::NO_CONTENT)
}

pub async fn session(Extension(admin): Extension<CurrentAdmin>) -> Json<SessionResponse> {
    Json(SessionResponse { username: admin.username })
}
