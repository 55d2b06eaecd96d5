pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::writing::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/ai/generate-content",
            post(handlers::handle_generate_content),
        )
        .route("/api/ai/check-grammar", post(handlers::handle_check_grammar))
        .route("/api/ai/rewrite", post(handlers::handle_rewrite))
        .route("/api/ai/summarize", post(handlers::handle_summarize))
        .route(
            "/api/ai/generate-template",
            post(handlers::handle_generate_template),
        )
        .route(
            "/api/ai/optimize-resume",
            post(handlers::handle_optimize_resume),
        )
        .route(
            "/api/ai/generate-contract",
            post(handlers::handle_generate_contract),
        )
        .with_state(state)
}
