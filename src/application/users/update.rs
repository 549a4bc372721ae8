use crate::application::auth::passwords;
use crate::domain::password::PasswordHashingService;
use crate::domain::users::{UpdateUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "newemail@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "newpassword123", min_length = 6)]
    pub password: String,
}

/// Replaces the authenticated user's email and password
pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl UpdateUserUseCase {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, id: Uuid, req: UpdateUserRequest) -> Result<User, AppError> {
        let taken = self
            .repo
            .find_by_email(&req.email)
            .await?
            .is_some_and(|other| other.id != id);
        if taken {
            tracing::debug!("Email already registered: {}", req.email);
            return Err(AppError::BadRequest);
        }

        let password_hash = passwords::hash_password(&self.password_hasher, req.password).await?;

        let update = UpdateUser {
            email: req.email,
            password_hash,
        };

        self.repo
            .update(id, update)
            .await
            .map_err(super::email_conflict)?
            .ok_or_else(|| {
                tracing::warn!("Authenticated user {} no longer exists", id);
                AppError::NotFound
            })
    }
}
