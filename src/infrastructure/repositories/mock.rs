use crate::domain::auth::{NewRefreshToken, RefreshToken, RefreshTokenRepository};
use crate::domain::chirps::{Chirp, ChirpRepository, NewChirp};
use crate::domain::users::{EmailTaken, NewUser, UpdateUser, User, UserRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(EmailTaken.into());
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update(&self, id: Uuid, update: UpdateUser) -> Result<Option<User>, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.id != id && u.email == update.email) {
            return Err(EmailTaken.into());
        }
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.email = update.email;
            user.password_hash = update.password_hash;
            user.updated_at = OffsetDateTime::now_utc();
            user.clone()
        }))
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_chirpy_red = true;
                user.updated_at = OffsetDateTime::now_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> Result<u64, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        let count = users.len() as u64;
        users.clear();
        Ok(count)
    }
}

#[derive(Clone, Default)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

impl MockRefreshTokenRepository {
    /// Push a stored token's expiry into the past
    pub fn expire(&self, token: &str) {
        let mut tokens = self.tokens.lock().unwrap();
        if let Some(t) = tokens.iter_mut().find(|t| t.token == token) {
            t.expires_at = OffsetDateTime::now_utc() - Duration::seconds(1);
        }
    }

    /// Raw row, regardless of state
    pub fn get(&self, token: &str) -> Option<RefreshToken> {
        let tokens = self.tokens.lock().unwrap();
        tokens.iter().find(|t| t.token == token).cloned()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let row = RefreshToken {
            token: token.token,
            user_id: token.user_id,
            created_at: now,
            updated_at: now,
            expires_at: token.expires_at,
            revoked_at: None,
        };
        self.tokens.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_active(&self, token: &str) -> Result<Option<RefreshToken>, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .iter()
            .find(|t| t.token == token && t.is_active(now))
            .cloned())
    }

    async fn revoke(&self, token: &str) -> Result<bool, anyhow::Error> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens
            .iter_mut()
            .find(|t| t.token == token && t.revoked_at.is_none())
        {
            Some(t) => {
                let now = OffsetDateTime::now_utc();
                t.revoked_at = Some(now);
                t.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockChirpRepository {
    chirps: Arc<Mutex<Vec<Chirp>>>,
}

#[async_trait]
impl ChirpRepository for MockChirpRepository {
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            body: new_chirp.body,
            user_id: new_chirp.user_id,
            created_at: now,
            updated_at: now,
        };
        self.chirps.lock().unwrap().push(chirp.clone());
        Ok(chirp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, anyhow::Error> {
        let chirps = self.chirps.lock().unwrap();
        Ok(chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Chirp>, anyhow::Error> {
        let chirps = self.chirps.lock().unwrap();
        Ok(chirps.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let mut chirps = self.chirps.lock().unwrap();
        let before = chirps.len();
        chirps.retain(|c| c.id != id);
        Ok(chirps.len() != before)
    }
}
