use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe for the portal API. Does not check Gemini reachability or
/// whether an API key is configured.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portal-api"
    }))
}
