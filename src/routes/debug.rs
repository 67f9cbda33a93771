use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the service is up and how it is configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "runroute",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "route_alternatives": state.engine.num_routes(),
        }
    }))
}
