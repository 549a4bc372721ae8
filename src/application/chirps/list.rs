use crate::domain::chirps::{Chirp, ChirpRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListChirpsUseCase {
    repo: Arc<dyn ChirpRepository>,
}

impl ListChirpsUseCase {
    pub fn new(repo: Arc<dyn ChirpRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Chirp>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}
