//! Job table operations.

use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{JobRow, NewJob};
use crate::DbError;

/// Insert a batch of jobs inside a single transaction.
pub async fn insert_jobs(pool: &SqlitePool, rows: &[NewJob]) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    for row in rows {
        sqlx::query("INSERT INTO jobs (id, job_name) VALUES (?1, ?2)")
            .bind(row.id)
            .bind(&row.job_name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    debug!(rows = rows.len(), "inserted jobs");
    Ok(rows.len() as u64)
}

/// Return every job row.
pub async fn list_jobs(pool: &SqlitePool) -> Result<Vec<JobRow>, DbError> {
    let rows = sqlx::query_as::<_, JobRow>("SELECT id, job_name FROM jobs")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Delete every job row.  Returns the number of rows removed.
pub async fn clear_jobs(pool: &SqlitePool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM jobs").execute(pool).await?;
    Ok(result.rows_affected())
}
