pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::plan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Plan API
        .route(
            "/api/v1/plan",
            get(handlers::handle_plan_placeholder).post(handlers::handle_generate_plan),
        )
        .route("/api/v1/plan/projection", post(handlers::handle_projection))
        .with_state(state)
}
