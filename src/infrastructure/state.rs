use crate::application::auth::session::SessionService;
use crate::domain::auth::RefreshTokenRepository;
use crate::domain::chirps::ChirpRepository;
use crate::domain::password::PasswordHashingService;
use crate::domain::users::UserRepository;
use crate::infrastructure::auth::JwtTokenSigner;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::password::PasswordService;
use crate::infrastructure::repositories::chirps::PostgresChirpRepository;
use crate::infrastructure::repositories::refresh_tokens::PostgresRefreshTokenRepository;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionService>,
    pub users: Arc<dyn UserRepository>,
    pub chirps: Arc<dyn ChirpRepository>,
    pub password_service: Arc<dyn PasswordHashingService>,
}

impl AppState {
    /// Wire the Postgres-backed repositories
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        let users = Arc::new(PostgresUserRepository::new(pool.clone()));
        let chirps = Arc::new(PostgresChirpRepository::new(pool.clone()));
        let refresh_tokens = Arc::new(PostgresRefreshTokenRepository::new(pool.clone()));
        Self::with_repositories(pool, config, users, chirps, refresh_tokens)
    }

    pub fn with_repositories(
        pool: DbPool,
        config: AppConfig,
        users: Arc<dyn UserRepository>,
        chirps: Arc<dyn ChirpRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
    ) -> Self {
        let password_service: Arc<dyn PasswordHashingService> = Arc::new(PasswordService::new());
        let token_signer = Arc::new(JwtTokenSigner::new(config.jwt_secret.as_bytes()));

        let sessions = SessionService::new(
            users.clone(),
            refresh_tokens,
            token_signer,
            password_service.clone(),
            config.session_ttl,
            config.polka_key.clone(),
        );

        Self {
            pool,
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            users,
            chirps,
            password_service,
        }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
