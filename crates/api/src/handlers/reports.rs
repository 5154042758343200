//! Analytical report endpoints.
//!
//! Both endpoints guard their own failures: a query or reshape error comes
//! back as a structured JSON `{error}` with a 500 status.

use axum::extract::State;
use axum::response::Html;

use db::repository::reports as repo;
use reports::{html, pivot};

use crate::error::ApiError;
use crate::AppState;

/// The canned reports cover this hiring year.
const REPORT_YEAR: i32 = 2021;

/// `GET /employees/hires-by-quarter/` — (department, job) × Q1..Q4 pivot.
pub async fn hires_by_quarter(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let rows = repo::hires_by_quarter(&state.pool, REPORT_YEAR).await?;
    let wide = pivot::pivot_quarters(&rows);
    Ok(Html(html::quarter_table(&wide)))
}

/// `GET /employees/departments-above-mean/` — departments hiring above the
/// mean, ranked by hire count descending.
pub async fn departments_above_mean(
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let rows = repo::departments_above_mean(&state.pool, REPORT_YEAR).await?;
    Ok(Html(html::above_mean_table(&rows)))
}
