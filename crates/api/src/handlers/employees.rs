//! Employee resource: CSV upload, bounded batch insert, list, clear.
//!
//! The analytical views over this table live in the `reports` handler
//! module; the SQL console in `adhoc`.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use db::models::{EmployeeRow, NewEmployee};
use db::repository::employees as repo;
use ingest::batch::{check_batch_size, EmployeeCreate};
use ingest::tabular;

use super::IngestResponse;
use crate::error::ApiError;
use crate::AppState;

/// `POST /employees/upload_csv/` — headerless CSV
/// `id,name,hire_date,department_id,job_id`.
pub async fn upload_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IngestResponse>, ApiError> {
    let rows = tabular::parse_employees(&body)?;
    let inserted = repo::insert_employees(&state.pool, &rows).await?;
    info!(rows = inserted, "employee upload committed");
    Ok(Json(IngestResponse {
        message: "Data uploaded successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `POST /employees/batch_insert/` — at most 1000 records per call.
pub async fn batch_insert(
    State(state): State<AppState>,
    Json(payload): Json<Vec<EmployeeCreate>>,
) -> Result<Json<IngestResponse>, ApiError> {
    check_batch_size(payload.len())?;
    let rows: Vec<NewEmployee> = payload.into_iter().map(Into::into).collect();
    let inserted = repo::insert_employees(&state.pool, &rows).await?;
    Ok(Json(IngestResponse {
        message: "Batch inserted successfully".into(),
        rows_inserted: inserted,
    }))
}

/// `GET /employees/all/`
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<EmployeeRow>>, ApiError> {
    let rows = repo::list_employees(&state.pool).await?;
    Ok(Json(rows))
}

/// `DELETE /employees/clear/`
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let removed = repo::clear_employees(&state.pool).await?;
    info!(rows = removed, "employee table cleared");
    Ok(Json(json!({ "message": "Employee table cleared" })))
}
