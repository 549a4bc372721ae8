use crate::domain::password::{PasswordError, PasswordHashingService};
use crate::shared::error::AppError;
use std::sync::Arc;

// Argon2 is deliberately slow; keep it off the async workers.

pub async fn hash_password(
    service: &Arc<dyn PasswordHashingService>,
    password: String,
) -> Result<String, AppError> {
    let service = Arc::clone(service);
    tokio::task::spawn_blocking(move || service.hash_password(&password))
        .await
        .map_err(|e| AppError::ServiceError(e.into()))?
        .map_err(|e| AppError::ServiceError(e.into()))
}

pub async fn verify_password(
    service: &Arc<dyn PasswordHashingService>,
    password: String,
    hash: String,
) -> Result<Result<(), PasswordError>, AppError> {
    let service = Arc::clone(service);
    tokio::task::spawn_blocking(move || service.verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::ServiceError(e.into()))
}
