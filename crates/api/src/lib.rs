//! `api` crate — HTTP REST API layer.
//!
//! Routes:
//!   GET    /
//!   POST   /{entity}/upload_csv/
//!   POST   /{entity}/batch_insert/
//!   GET    /{entity}/all/
//!   DELETE /{entity}/clear/
//!   GET    /employees/hires-by-quarter/
//!   GET    /employees/departments-above-mean/
//!   POST   /employees/sql-test/
//!
//! `{entity}` is one of departments, jobs, employees.  The SQL console
//! route answers 403 unless enabled in [`ApiConfig`].

pub mod error;
pub mod handlers;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

/// Feature toggles for the HTTP surface.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Allow `POST /employees/sql-test/` to execute caller-supplied SQL.
    ///
    /// Off by default: the console runs arbitrary statements, writes
    /// included, against the live database.
    pub enable_sql_console: bool,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: ApiConfig,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/departments/upload_csv/", post(handlers::departments::upload_csv))
        .route("/departments/batch_insert/", post(handlers::departments::batch_insert))
        .route("/departments/all/", get(handlers::departments::all))
        .route("/departments/clear/", delete(handlers::departments::clear))
        .route("/jobs/upload_csv/", post(handlers::jobs::upload_csv))
        .route("/jobs/batch_insert/", post(handlers::jobs::batch_insert))
        .route("/jobs/all/", get(handlers::jobs::all))
        .route("/jobs/clear/", delete(handlers::jobs::clear))
        .route("/employees/upload_csv/", post(handlers::employees::upload_csv))
        .route("/employees/batch_insert/", post(handlers::employees::batch_insert))
        .route("/employees/all/", get(handlers::employees::all))
        .route("/employees/clear/", delete(handlers::employees::clear))
        .route("/employees/hires-by-quarter/", get(handlers::reports::hires_by_quarter))
        .route(
            "/employees/departments-above-mean/",
            get(handlers::reports::departments_above_mean),
        )
        .route("/employees/sql-test/", post(handlers::adhoc::sql_test))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on `bind` until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {bind}");
    axum::serve(listener, router(state)).await
}
