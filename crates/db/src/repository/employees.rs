//! Employee table operations.

use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{EmployeeRow, NewEmployee};
use crate::DbError;

/// Insert a batch of employees inside a single transaction.
///
/// Foreign keys are taken as supplied; the store does not verify that the
/// referenced department or job rows exist.
pub async fn insert_employees(pool: &SqlitePool, rows: &[NewEmployee]) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    for row in rows {
        sqlx::query(
            "INSERT INTO employees (id, name, hire_date, department_id, job_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.hire_date)
        .bind(row.department_id)
        .bind(row.job_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    debug!(rows = rows.len(), "inserted employees");
    Ok(rows.len() as u64)
}

/// Return every employee row.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<EmployeeRow>, DbError> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        "SELECT id, name, hire_date, department_id, job_id FROM employees",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Delete every employee row.  Returns the number of rows removed.
pub async fn clear_employees(pool: &SqlitePool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM employees").execute(pool).await?;
    Ok(result.rows_affected())
}
