use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    api::state::AppState,
    auth::SESSION_COOKIE,
    error::AppError,
};

#[derive(Clone, Debug)]
pub struct CurrentAdmin {
    pub username: String,
}

/// Accepts the session cookie or an `Authorization: Bearer` header.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| bearer_token(&request))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.service_context.auth_service
        .validate_session(&token)
        .ok_or(AppError::Unauthorized)?;

    // Insert current admin into request extensions
    request.extensions_mut().insert(CurrentAdmin { username: claims.sub });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
