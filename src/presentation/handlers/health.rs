use crate::infrastructure::db::DbPool;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Readiness probe
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses((status = 200, description = "Service is ready", body = String)),
    tag = "health"
)]
pub async fn readiness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Health check endpoint with database connectivity test
pub async fn health_check(State(pool): State<DbPool>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").fetch_one(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        ),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected"
                })),
            )
        }
    }
}
