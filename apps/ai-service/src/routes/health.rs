use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Always 200, whether or not a provider key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "Orbix AI Service",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.backend.mode()
    }))
}
