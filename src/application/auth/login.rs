use crate::application::auth::passwords;
use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::domain::auth::TokenSigner;
use crate::domain::password::{PasswordError, PasswordHashingService};
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tokio::sync::OnceCell;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub id: Uuid,
    pub email: String,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
    pub is_chirpy_red: bool,
    pub token: String,
    pub refresh_token: String,
}

const DUMMY_PASSWORD: &str = "chirpy-dummy-password";

pub struct LoginUseCase {
    user_repo: Arc<dyn UserRepository>,
    refresh_tokens: RefreshTokenStore,
    token_signer: Arc<dyn TokenSigner>,
    password_service: Arc<dyn PasswordHashingService>,
    session_ttl: Duration,
    // Verified against when the email is unknown, so both rejections cost one hash
    dummy_hash: OnceCell<String>,
}

impl LoginUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        refresh_tokens: RefreshTokenStore,
        token_signer: Arc<dyn TokenSigner>,
        password_service: Arc<dyn PasswordHashingService>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            refresh_tokens,
            token_signer,
            password_service,
            session_ttl,
            dummy_hash: OnceCell::new(),
        }
    }

    async fn reject_unknown_email(&self, password: String) -> AppError {
        let dummy_hash = self
            .dummy_hash
            .get_or_try_init(|| {
                passwords::hash_password(&self.password_service, DUMMY_PASSWORD.to_string())
            })
            .await;

        match dummy_hash {
            Ok(hash) => {
                let _ = passwords::verify_password(&self.password_service, password, hash.clone())
                    .await;
            }
            Err(e) => tracing::debug!("Could not prepare dummy hash: {}", e),
        }

        AppError::UnauthorizedLogin
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn execute(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let Some(user) = self.user_repo.find_by_email(&req.email).await? else {
            tracing::warn!("User not found for email: {}", req.email);
            return Err(self.reject_unknown_email(req.password).await);
        };

        match passwords::verify_password(
            &self.password_service,
            req.password,
            user.password_hash.clone(),
        )
        .await?
        {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!("Password verification failed for user: {}", user.id);
                return Err(AppError::UnauthorizedLogin);
            }
            Err(e) => {
                tracing::debug!("Password verification internal error: {}", e);
                return Err(AppError::ServiceError(e.into()));
            }
        }

        let token = self
            .token_signer
            .issue(user.id, self.session_ttl)
            .map_err(|e| AppError::ServiceError(e.into()))?;

        let refresh_token = self
            .refresh_tokens
            .issue(user.id)
            .await
            .map_err(|e| AppError::ServiceError(e.into()))?;

        tracing::info!("User {} logged in", user.id);

        Ok(LoginResponse {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_chirpy_red: user.is_chirpy_red,
            token,
            refresh_token: refresh_token.token,
        })
    }
}
