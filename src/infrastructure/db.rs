pub mod models;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let max_connections: u32 = env_or("DB_MAX_CONNECTIONS", 20);
    let min_connections: u32 = env_or("DB_MIN_CONNECTIONS", 5);
    let acquire_timeout_secs: u64 = env_or("DB_ACQUIRE_TIMEOUT_SECS", 3);
    let idle_timeout_secs: u64 = env_or("DB_IDLE_TIMEOUT_SECS", 600);

    tracing::debug!(
        max_connections,
        min_connections,
        acquire_timeout_secs,
        idle_timeout_secs,
        "creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(idle_timeout_secs))
        .connect(database_url)
        .await
}
