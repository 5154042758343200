//! Department table operations.

use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{DepartmentRow, NewDepartment};
use crate::DbError;

/// Insert a batch of departments inside a single transaction.
///
/// Either every row is persisted or none are: any constraint violation
/// rolls the whole batch back.  A NULL id lets SQLite assign the key.
pub async fn insert_departments(
    pool: &SqlitePool,
    rows: &[NewDepartment],
) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    for row in rows {
        sqlx::query("INSERT INTO departments (id, department_name) VALUES (?1, ?2)")
            .bind(row.id)
            .bind(&row.department_name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    debug!(rows = rows.len(), "inserted departments");
    Ok(rows.len() as u64)
}

/// Return every department row.
pub async fn list_departments(pool: &SqlitePool) -> Result<Vec<DepartmentRow>, DbError> {
    let rows = sqlx::query_as::<_, DepartmentRow>("SELECT id, department_name FROM departments")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Delete every department row.  Returns the number of rows removed.
pub async fn clear_departments(pool: &SqlitePool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM departments").execute(pool).await?;
    Ok(result.rows_affected())
}
