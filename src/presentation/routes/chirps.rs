use crate::presentation::handlers::chirps;
use axum::{Router, routing::get};

use crate::infrastructure::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chirps::list_chirps).post(chirps::create_chirp))
        .route("/{id}", get(chirps::get_chirp).delete(chirps::delete_chirp))
}
