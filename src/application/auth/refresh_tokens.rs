use crate::domain::auth::{
    NewRefreshToken, REFRESH_TOKEN_TTL_DAYS, RefreshToken, RefreshTokenRepository,
};
use argon2::password_hash::rand_core::{OsRng, RngCore};
use std::sync::Arc;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Random bytes per refresh token (64 hex characters)
const REFRESH_TOKEN_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum RefreshTokenError {
    /// Unknown, expired and revoked tokens are indistinguishable
    #[error("refresh token not found")]
    NotFound,
    #[error("failed to generate refresh token: {0}")]
    Entropy(String),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Generate a hex-encoded 256-bit random token
pub fn generate_refresh_token() -> Result<String, RefreshTokenError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RefreshTokenError::Entropy(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// Issues, looks up and revokes persisted refresh tokens
#[derive(Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepository>,
}

impl RefreshTokenStore {
    pub fn new(repo: Arc<dyn RefreshTokenRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, RefreshTokenError> {
        let token = generate_refresh_token()?;
        let expires_at = OffsetDateTime::now_utc() + Duration::days(REFRESH_TOKEN_TTL_DAYS);

        let row = self
            .repo
            .create(NewRefreshToken {
                token,
                user_id,
                expires_at,
            })
            .await?;

        tracing::debug!("Issued refresh token expiring at {}", row.expires_at);
        Ok(row)
    }

    #[tracing::instrument(skip_all)]
    pub async fn lookup(&self, token: &str) -> Result<RefreshToken, RefreshTokenError> {
        self.repo
            .find_active(token)
            .await?
            .ok_or(RefreshTokenError::NotFound)
    }

    /// Not idempotent: a second revoke of the same token is `NotFound`
    #[tracing::instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> Result<(), RefreshTokenError> {
        if self.repo.revoke(token).await? {
            Ok(())
        } else {
            Err(RefreshTokenError::NotFound)
        }
    }
}
