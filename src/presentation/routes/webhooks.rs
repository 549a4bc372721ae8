use crate::presentation::handlers::webhooks;
use axum::{Router, routing::post};

use crate::infrastructure::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/webhooks", post(webhooks::polka_webhook))
}
