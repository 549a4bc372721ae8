use crate::application::users::reset::ResetUsersUseCase;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Delete all users; dev platform only
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "All users deleted"),
        (status = 403, description = "Not on the dev platform", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    ResetUsersUseCase::new(state.users, state.config.platform.clone())
        .execute()
        .await?;
    Ok(StatusCode::OK)
}
