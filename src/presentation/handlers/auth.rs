use crate::application::auth::login::{LoginRequest, LoginResponse};
use crate::application::auth::refresh::RefreshTokenResponse;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

/// Login handler
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.sessions.login(req).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Refresh token handler
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "New session token", body = RefreshTokenResponse),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let response = state.sessions.refresh(&headers).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Revoke token handler
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn revoke_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    state.sessions.revoke(&headers).await?;
    Ok(StatusCode::NO_CONTENT)
}
