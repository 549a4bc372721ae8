use crate::application::users::upgrade::{UpgradeUserUseCase, WebhookRequest};
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::WebhookAuth;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Payment provider callback
#[utoipa::path(
    post,
    path = "/api/polka/webhooks",
    request_body = WebhookRequest,
    responses(
        (status = 204, description = "Event handled or ignored"),
        (status = 401, description = "Invalid API key", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "webhooks"
)]
pub async fn polka_webhook(
    State(state): State<AppState>,
    _auth: WebhookAuth,
    ValidatedJson(req): ValidatedJson<WebhookRequest>,
) -> Result<impl IntoResponse, AppError> {
    UpgradeUserUseCase::new(state.users).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
