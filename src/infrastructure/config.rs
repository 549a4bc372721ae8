use std::env;
use thiserror::Error;
use time::Duration;

/// Upper bound for `JWT_ACCESS_TOKEN_EXPIRY`; session tokens are short-lived
pub const MAX_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Deployment platform; only `dev` may run destructive admin operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Other(String),
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        match value {
            "dev" => Platform::Dev,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn allows_reset(&self) -> bool {
        matches!(self, Platform::Dev)
    }
}

/// Immutable process configuration, loaded once at startup
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub platform: Platform,
    pub jwt_secret: String,
    pub polka_key: String,
    pub session_ttl: Duration,
    pub port: u16,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("platform", &self.platform)
            .field("session_ttl", &self.session_ttl)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let session_ttl_secs = match lookup("JWT_ACCESS_TOKEN_EXPIRY") {
            Some(value) => match value.parse::<i64>() {
                Ok(secs) if (1..=MAX_SESSION_TTL_SECS).contains(&secs) => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "JWT_ACCESS_TOKEN_EXPIRY",
                        value,
                    });
                }
            },
            None => 3600,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 8080,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            platform: Platform::parse(
                &lookup("PLATFORM").unwrap_or_else(|| "production".to_string()),
            ),
            jwt_secret: required("JWT_SECRET")?,
            polka_key: required("POLKA_KEY")?,
            session_ttl: Duration::seconds(session_ttl_secs),
            port,
        })
    }
}
