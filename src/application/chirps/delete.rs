use crate::domain::chirps::ChirpRepository;
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Deletes a chirp on behalf of its author
pub struct DeleteChirpUseCase {
    repo: Arc<dyn ChirpRepository>,
}

impl DeleteChirpUseCase {
    pub fn new(repo: Arc<dyn ChirpRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, user_id: Uuid, raw_id: &str) -> Result<(), AppError> {
        let id = Uuid::parse_str(raw_id).map_err(|_| AppError::NotFound)?;
        let chirp = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if chirp.user_id != user_id {
            tracing::warn!("User {} tried to delete chirp {} of {}", user_id, id, chirp.user_id);
            return Err(AppError::Forbidden);
        }

        // Gone between the lookup and the delete
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
