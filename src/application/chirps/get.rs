use crate::domain::chirps::{Chirp, ChirpRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetChirpUseCase {
    repo: Arc<dyn ChirpRepository>,
}

impl GetChirpUseCase {
    pub fn new(repo: Arc<dyn ChirpRepository>) -> Self {
        Self { repo }
    }

    /// Path ids that are not UUIDs are treated as missing chirps
    pub async fn execute(&self, raw_id: &str) -> Result<Chirp, AppError> {
        let id = Uuid::parse_str(raw_id).map_err(|_| AppError::NotFound)?;
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }
}
