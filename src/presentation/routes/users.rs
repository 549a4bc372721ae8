use crate::presentation::handlers::users;
use axum::{Router, routing::post};

use crate::infrastructure::state::AppState;

/// User routes - registration and self-service updates
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(users::create_user).put(users::update_user))
}
