use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub is_chirpy_red: bool,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub email: String,
    pub password_hash: String,
}

/// Raised by a repository when another user already holds the email
#[derive(Debug, Error)]
#[error("Email already registered")]
pub struct EmailTaken;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`EmailTaken`] when the email is already registered
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, anyhow::Error>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, anyhow::Error>;
    /// Returns `None` when no user has the given id; fails with [`EmailTaken`]
    /// when another user holds the new email
    async fn update(&self, id: Uuid, update: UpdateUser) -> Result<Option<User>, anyhow::Error>;
    /// Returns false when no user has the given id
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, anyhow::Error>;
    async fn delete_all(&self) -> Result<u64, anyhow::Error>;
}
