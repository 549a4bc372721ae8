use crate::presentation::handlers::admin;
use axum::{Router, routing::post};

use crate::infrastructure::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/reset", post(admin::reset))
}
