pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assembly::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(handlers::handle_options))
        .route("/api/v1/petitions", post(handlers::handle_generate))
        .route("/api/v1/petitions/preview", post(handlers::handle_preview))
        .with_state(state)
}
