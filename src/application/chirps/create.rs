use crate::domain::chirps::{Chirp, ChirpRepository, MAX_CHIRP_LENGTH, NewChirp};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

const PROFANITIES: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const CENSORED: &str = "****";

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateChirpRequest {
    #[schema(example = "I had something interesting for breakfast", max_length = 140)]
    pub body: String,
}

/// Replace whole space-separated profane words, ignoring case
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANITIES.contains(&word.to_lowercase().as_str()) {
                CENSORED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct CreateChirpUseCase {
    repo: Arc<dyn ChirpRepository>,
}

impl CreateChirpUseCase {
    pub fn new(repo: Arc<dyn ChirpRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, user_id: Uuid, req: CreateChirpRequest) -> Result<Chirp, AppError> {
        if req.body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(AppError::LongChirp);
        }

        let chirp = self
            .repo
            .create(NewChirp {
                body: clean_body(&req.body),
                user_id,
            })
            .await?;

        tracing::debug!("Chirp {} created", chirp.id);
        Ok(chirp)
    }
}
