pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route("/api/v1/portfolios", get(handlers::handle_list))
        .route(
            "/api/v1/portfolios/generate",
            post(handlers::handle_generate),
        )
        .route(
            "/api/v1/portfolios/:slug",
            get(handlers::handle_get_by_slug),
        )
        .with_state(state)
}
