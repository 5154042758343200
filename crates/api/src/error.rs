//! API-level error type.
//!
//! Every endpoint catches its own failures and answers with a structured
//! JSON `{error}` body — no raw 500 tracebacks.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use ingest::IngestError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload parsing or batch validation failed; nothing was written.
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// The store rejected or failed an operation.
    #[error("database error: {0}")]
    Db(#[from] db::DbError),

    /// Caller-supplied SQL failed to execute.
    #[error("query failed: {0}")]
    Query(#[source] db::DbError),

    /// The SQL console is not enabled on this deployment.
    #[error("SQL console is disabled")]
    SqlConsoleDisabled,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Ingest(_) | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SqlConsoleDisabled => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Ingest(IngestError::TooManyRows { .. }) => {
                "Max 1000 rows allowed.".to_string()
            }
            other => other.to_string(),
        };
        if status.is_server_error() {
            error!("{self}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
