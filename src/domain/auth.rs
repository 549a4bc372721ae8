use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Issuer claim stamped on every session token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Lifetime of a refresh token
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn new_session(user_id: Uuid, ttl: Duration) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(ttl.whole_seconds()),
        }
    }

    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub)
            .map_err(|e| TokenError::Invalid(format!("subject is not a UUID: {}", e)))
    }
}

/// Errors raised by a [`TokenSigner`].
///
/// Every validation failure collapses into `Invalid`; the payload is for logs only.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Issues and validates short-lived signed session tokens
pub trait TokenSigner: Send + Sync {
    /// Sign a session token for `user_id` that expires `ttl` from now
    fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError>;

    /// Verify signature, expiry, issuer and subject, returning the user ID
    fn validate(&self, token: &str) -> Result<Uuid, TokenError>;
}

/// Refresh token entity
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
    pub revoked_at: Option<OffsetDateTime>,
}

impl RefreshToken {
    /// Usable iff not revoked and not yet expired
    pub fn is_active(&self, now: OffsetDateTime) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}

/// New refresh token for creation
#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: OffsetDateTime,
}

/// Repository trait for refresh tokens
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Create a new refresh token
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken>;

    /// Find a token that is neither expired nor revoked
    async fn find_active(&self, token: &str) -> Result<Option<RefreshToken>>;

    /// Mark a token revoked; returns false when no unrevoked row matched
    async fn revoke(&self, token: &str) -> Result<bool>;
}
