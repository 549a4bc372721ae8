use crate::application::auth::passwords;
use crate::domain::password::PasswordHashingService;
use crate::domain::users::{NewUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret123", min_length = 6)]
    pub password: String,
}

impl CreateUserRequest {
    /// Reject registration when the email is already taken
    pub async fn validate_unique_email(
        &self,
        repo: &Arc<dyn UserRepository>,
    ) -> Result<(), AppError> {
        if repo.find_by_email(&self.email).await?.is_some() {
            tracing::debug!("Email already registered: {}", self.email);
            return Err(AppError::BadRequest);
        }
        Ok(())
    }
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl CreateUserUseCase {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn execute(&self, req: CreateUserRequest) -> Result<User, AppError> {
        req.validate_unique_email(&self.repo).await?;

        let password_hash = passwords::hash_password(&self.password_hasher, req.password).await?;

        let new_user = NewUser {
            email: req.email,
            password_hash,
        };

        let user = self
            .repo
            .create(new_user)
            .await
            .map_err(super::email_conflict)?;
        tracing::info!("Registered user {}", user.id);
        Ok(user)
    }
}
