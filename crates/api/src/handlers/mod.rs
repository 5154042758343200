//! Request handlers, one module per resource.

pub mod adhoc;
pub mod departments;
pub mod employees;
pub mod jobs;
pub mod reports;

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Standard response body for the ingestion endpoints.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub message: String,
    pub rows_inserted: u64,
}

/// `GET /` — service info.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "HR data ingestion and reporting API" }))
}
