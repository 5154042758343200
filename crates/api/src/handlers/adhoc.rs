//! The ad-hoc SQL console.
//!
//! Executes caller-supplied statements verbatim — reads *and* writes — so
//! it stays behind an explicit opt-in in [`crate::ApiConfig`].

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use db::repository::adhoc;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SqlRequest {
    pub query: String,
}

/// `POST /employees/sql-test/` — `{query}` in, `{columns, rows}` out.
pub async fn sql_test(
    State(state): State<AppState>,
    Json(payload): Json<SqlRequest>,
) -> Result<Json<Value>, ApiError> {
    if !state.config.enable_sql_console {
        return Err(ApiError::SqlConsoleDisabled);
    }
    warn!(query = %payload.query, "executing ad-hoc SQL");
    let output = adhoc::execute_raw(&state.pool, &payload.query)
        .await
        .map_err(ApiError::Query)?;
    Ok(Json(json!({
        "columns": output.columns,
        "rows": output.rows,
    })))
}
