use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Longest chirp body accepted, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewChirp {
    pub body: String,
    pub user_id: Uuid,
}

#[async_trait]
pub trait ChirpRepository: Send + Sync {
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, anyhow::Error>;
    /// All chirps, oldest first
    async fn find_all(&self) -> Result<Vec<Chirp>, anyhow::Error>;
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error>;
}
