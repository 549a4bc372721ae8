use crate::presentation::handlers::auth;
use axum::{Router, routing::post};

use crate::infrastructure::state::AppState;

/// Session routes - login, refresh and revoke
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh_token))
        .route("/revoke", post(auth::revoke_token))
}
