use axum::{
    Router,
    routing::{get, post},
};

use super::AppState;
use super::handlers;

/// Build the labeling router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::labeling_page))
        .route("/get_data", get(handlers::get_data))
        .route("/submit", post(handlers::submit))
        .with_state(state)
}
