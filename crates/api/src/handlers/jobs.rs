//! Job resource: CSV upload, bounded batch insert, list, clear.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use db::models::{JobRow, NewJob};
use db::repository::jobs as repo;
use ingest::batch::{check_batch_size, JobCreate};
use ingest::tabular;

use super::IngestResponse;
use crate::error::ApiError;
use crate::AppState;

/// `POST /jobs/upload_csv/` — headerless CSV `id,job_name`.
pub async fn upload_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IngestResponse>, ApiError> {
    let rows = tabular::parse_jobs(&body)?;
    let inserted = repo::insert_jobs(&state.pool, &rows).await?;
    info!(rows = inserted, "job upload committed");
    Ok(Json(IngestResponse {
        message: "Data uploaded successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `POST /jobs/batch_insert/` — at most 1000 records per call.
pub async fn batch_insert(
    State(state): State<AppState>,
    Json(payload): Json<Vec<JobCreate>>,
) -> Result<Json<IngestResponse>, ApiError> {
    check_batch_size(payload.len())?;
    let rows: Vec<NewJob> = payload.into_iter().map(Into::into).collect();
    let inserted = repo::insert_jobs(&state.pool, &rows).await?;
    Ok(Json(IngestResponse {
        message: "Batch inserted successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `GET /jobs/all/`
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, ApiError> {
    let rows = repo::list_jobs(&state.pool).await?;
    Ok(Json(rows))
}

/// `DELETE /jobs/clear/`
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let removed = repo::clear_jobs(&state.pool).await?;
    info!(rows = removed, "jobs table cleared");
    Ok(Json(json!({ "message": "Jobs table cleared" })))
}
