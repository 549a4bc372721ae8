use crate::application::auth::refresh_tokens::{RefreshTokenError, RefreshTokenStore};
use crate::domain::auth::TokenSigner;
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use time::Duration;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RefreshTokenResponse {
    pub token: String,
}

/// Exchanges an active refresh token for a new session token.
///
/// The refresh token itself is not rotated.
pub struct RefreshTokenUseCase {
    refresh_tokens: RefreshTokenStore,
    token_signer: Arc<dyn TokenSigner>,
    session_ttl: Duration,
}

impl RefreshTokenUseCase {
    pub fn new(
        refresh_tokens: RefreshTokenStore,
        token_signer: Arc<dyn TokenSigner>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            refresh_tokens,
            token_signer,
            session_ttl,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResponse, AppError> {
        let stored = self
            .refresh_tokens
            .lookup(refresh_token)
            .await
            .map_err(|e| match e {
                RefreshTokenError::NotFound => {
                    tracing::warn!("Refresh token not found, expired or revoked");
                    AppError::UnauthorizedBadRefreshToken
                }
                other => AppError::ServiceError(other.into()),
            })?;

        let token = self
            .token_signer
            .issue(stored.user_id, self.session_ttl)
            .map_err(|e| AppError::ServiceError(e.into()))?;

        Ok(RefreshTokenResponse { token })
    }
}
