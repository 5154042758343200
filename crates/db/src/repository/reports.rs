//! Aggregation queries behind the reporting endpoints.

use sqlx::SqlitePool;

use crate::models::{DepartmentHireRow, QuarterHireRow};
use crate::DbError;

/// Count hires grouped by (department, job, quarter) for the given year.
///
/// Quarter is derived from the hire month: `((month - 1) / 3) + 1`.
/// Employees with a NULL hire date, or referencing a missing department or
/// job, drop out of the inner joins.  Rows come back ordered by department
/// name, job name, quarter.
pub async fn hires_by_quarter(
    pool: &SqlitePool,
    year: i32,
) -> Result<Vec<QuarterHireRow>, DbError> {
    let rows = sqlx::query_as::<_, QuarterHireRow>(
        r#"
        SELECT
            d.department_name                                            AS department,
            j.job_name                                                   AS job,
            ((CAST(strftime('%m', e.hire_date) AS INTEGER) - 1) / 3) + 1 AS quarter,
            COUNT(*)                                                     AS hires
        FROM employees e
        JOIN departments d ON d.id = e.department_id
        JOIN jobs j        ON j.id = e.job_id
        WHERE CAST(strftime('%Y', e.hire_date) AS INTEGER) = ?1
        GROUP BY d.department_name, j.job_name, quarter
        ORDER BY d.department_name, j.job_name, quarter
        "#,
    )
    .bind(year)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Departments whose hire count for the given year strictly exceeds the
/// mean per-department count, ordered by count descending.
pub async fn departments_above_mean(
    pool: &SqlitePool,
    year: i32,
) -> Result<Vec<DepartmentHireRow>, DbError> {
    let rows = sqlx::query_as::<_, DepartmentHireRow>(
        r#"
        SELECT
            d.id              AS department_id,
            d.department_name AS department_name,
            COUNT(e.id)       AS num_hired
        FROM employees e
        JOIN departments d ON d.id = e.department_id
        WHERE CAST(strftime('%Y', e.hire_date) AS INTEGER) = ?1
        GROUP BY d.id, d.department_name
        HAVING COUNT(e.id) > (
            SELECT AVG(cnt) FROM (
                SELECT COUNT(*) AS cnt
                FROM employees e2
                WHERE CAST(strftime('%Y', e2.hire_date) AS INTEGER) = ?1
                GROUP BY e2.department_id
            )
        )
        ORDER BY num_hired DESC
        "#,
    )
    .bind(year)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
