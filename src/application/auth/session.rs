use crate::application::auth::credentials;
use crate::application::auth::login::{LoginRequest, LoginResponse, LoginUseCase};
use crate::application::auth::refresh::{RefreshTokenResponse, RefreshTokenUseCase};
use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::application::auth::revoke::RevokeTokenUseCase;
use crate::domain::auth::{RefreshTokenRepository, TokenSigner};
use crate::domain::password::PasswordHashingService;
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use axum::http::HeaderMap;
use std::sync::Arc;
use time::Duration;
use uuid::Uuid;

/// Login, refresh, revoke and request authentication behind one handle.
///
/// Built once at startup; the signing secret lives inside `token_signer` and
/// the webhook key is fixed at construction.
pub struct SessionService {
    login: LoginUseCase,
    refresh: RefreshTokenUseCase,
    revoke: RevokeTokenUseCase,
    token_signer: Arc<dyn TokenSigner>,
    webhook_key: String,
}

impl SessionService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        token_signer: Arc<dyn TokenSigner>,
        password_service: Arc<dyn PasswordHashingService>,
        session_ttl: Duration,
        webhook_key: String,
    ) -> Self {
        let refresh_tokens = RefreshTokenStore::new(refresh_token_repo);

        Self {
            login: LoginUseCase::new(
                user_repo,
                refresh_tokens.clone(),
                token_signer.clone(),
                password_service,
                session_ttl,
            ),
            refresh: RefreshTokenUseCase::new(
                refresh_tokens.clone(),
                token_signer.clone(),
                session_ttl,
            ),
            revoke: RevokeTokenUseCase::new(refresh_tokens),
            token_signer,
            webhook_key,
        }
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        self.login.execute(req).await
    }

    /// Exchange the bearer refresh token for a new session token
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<RefreshTokenResponse, AppError> {
        let token = credentials::extract_bearer(headers).map_err(|e| {
            tracing::debug!("Refresh rejected: {}", e);
            AppError::UnauthorizedBadRefreshToken
        })?;
        self.refresh.execute(token).await
    }

    /// Revoke the bearer refresh token
    pub async fn revoke(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let token = credentials::extract_bearer(headers).map_err(|e| {
            tracing::debug!("Revoke rejected: {}", e);
            AppError::UnauthorizedBadRefreshToken
        })?;
        self.revoke.execute(token).await
    }

    /// Resolve the caller's user ID from the bearer session token
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Uuid, AppError> {
        let token = credentials::extract_bearer(headers).map_err(|e| {
            tracing::debug!("Authentication rejected: {}", e);
            AppError::UnauthorizedBadJwt
        })?;

        self.token_signer.validate(token).map_err(|e| {
            tracing::debug!("Authentication rejected: {}", e);
            AppError::UnauthorizedBadJwt
        })
    }

    /// Check the webhook API key against the configured one
    pub fn authenticate_webhook(&self, headers: &HeaderMap) -> Result<(), AppError> {
        authenticate_api_key(headers, &self.webhook_key)
    }
}

/// Guard for service-to-service calls presenting `Authorization: ApiKey <key>`
pub fn authenticate_api_key(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
    let provided = credentials::extract_api_key(headers).map_err(|e| {
        tracing::debug!("Webhook rejected: {}", e);
        AppError::UnauthorizedBadApiKey
    })?;

    if credentials::secrets_match(provided, expected) {
        Ok(())
    } else {
        tracing::warn!("Webhook rejected: API key mismatch");
        Err(AppError::UnauthorizedBadApiKey)
    }
}
