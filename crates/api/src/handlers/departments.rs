//! Department resource: CSV upload, bounded batch insert, list, clear.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use db::models::{DepartmentRow, NewDepartment};
use db::repository::departments as repo;
use ingest::batch::{check_batch_size, DepartmentCreate};
use ingest::tabular;

use super::IngestResponse;
use crate::error::ApiError;
use crate::AppState;

/// `POST /departments/upload_csv/` — headerless CSV `id,department_name`.
pub async fn upload_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IngestResponse>, ApiError> {
    let rows = tabular::parse_departments(&body)?;
    let inserted = repo::insert_departments(&state.pool, &rows).await?;
    info!(rows = inserted, "department upload committed");
    Ok(Json(IngestResponse {
        message: "Data uploaded successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `POST /departments/batch_insert/` — at most 1000 records per call.
pub async fn batch_insert(
    State(state): State<AppState>,
    Json(payload): Json<Vec<DepartmentCreate>>,
) -> Result<Json<IngestResponse>, ApiError> {
    check_batch_size(payload.len())?;
    let rows: Vec<NewDepartment> = payload.into_iter().map(Into::into).collect();
    let inserted = repo::insert_departments(&state.pool, &rows).await?;
    Ok(Json(IngestResponse {
        message: "Batch inserted successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `GET /departments/all/`
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<DepartmentRow>>, ApiError> {
    let rows = repo::list_departments(&state.pool).await?;
    Ok(Json(rows))
}

/// `DELETE /departments/clear/`
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let removed = repo::clear_departments(&state.pool).await?;
    info!(rows = removed, "department table cleared");
    Ok(Json(json!({ "message": "Department table cleared" })))
}
