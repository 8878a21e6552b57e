use axum::Json;
use serde_json::{Value, json};
use tracing::instrument;

/// Liveness probe. Also the downstream handler integration tests use to
/// prove preflight requests short-circuit before application logic.
#[instrument]
pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
