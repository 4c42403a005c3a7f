use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use factgate_core::ProcessResponse;
use serde_json::{Map, Value, json};

use crate::error::ApiError;
use crate::state::AppState;

/// Accept an arbitrary JSON object, enrich it, and return the echo plus fact.
///
/// Non-object or malformed bodies are rejected by the `Json` extractor before
/// this handler runs.
pub async fn process_data(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let result = state.processor.process(Value::Object(payload)).await?;
    Ok(Json(result))
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true, "service": "factgate-server" }))
}
