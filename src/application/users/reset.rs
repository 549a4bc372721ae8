use crate::domain::users::UserRepository;
use crate::infrastructure::config::Platform;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Deletes every user; only permitted on the `dev` platform
pub struct ResetUsersUseCase {
    repo: Arc<dyn UserRepository>,
    platform: Platform,
}

impl ResetUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, platform: Platform) -> Self {
        Self { repo, platform }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<u64, AppError> {
        if !self.platform.allows_reset() {
            tracing::warn!("Reset attempted on platform {:?}", self.platform);
            return Err(AppError::Forbidden);
        }

        let deleted = self.repo.delete_all().await?;
        tracing::info!("Reset removed {} users", deleted);
        Ok(deleted)
    }
}
