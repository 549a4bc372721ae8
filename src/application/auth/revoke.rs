use crate::application::auth::refresh_tokens::{RefreshTokenError, RefreshTokenStore};
use crate::shared::error::AppError;

pub struct RevokeTokenUseCase {
    refresh_tokens: RefreshTokenStore,
}

impl RevokeTokenUseCase {
    pub fn new(refresh_tokens: RefreshTokenStore) -> Self {
        Self { refresh_tokens }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<(), AppError> {
        self.refresh_tokens
            .revoke(refresh_token)
            .await
            .map_err(|e| match e {
                RefreshTokenError::NotFound => {
                    tracing::warn!("Revoke requested for unknown or already revoked token");
                    AppError::UnauthorizedBadRefreshToken
                }
                other => AppError::ServiceError(other.into()),
            })
    }
}
