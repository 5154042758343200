//! Repository tests against an in-memory SQLite database.
//!
//! A single-connection pool keeps every handle on the same in-memory
//! database for the lifetime of the test.

use crate::models::{NewDepartment, NewEmployee, NewJob};
use crate::repository::{adhoc, departments, employees, jobs, reports};
use crate::DbPool;

async fn memory_pool() -> DbPool {
    let pool = crate::pool::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    crate::pool::run_migrations(&pool).await.expect("migrations");
    pool
}

fn dept(id: i64, name: &str) -> NewDepartment {
    NewDepartment { id: Some(id), department_name: name.to_string() }
}

fn job(id: i64, name: &str) -> NewJob {
    NewJob { id: Some(id), job_name: name.to_string() }
}

fn emp(id: i64, dept_id: i64, job_id: i64, hire_date: &str) -> NewEmployee {
    NewEmployee {
        id: Some(id),
        name: Some(format!("emp-{id}")),
        hire_date: Some(hire_date.to_string()),
        department_id: Some(dept_id),
        job_id: Some(job_id),
    }
}

// ============================================================
// Entity tables
// ============================================================

#[tokio::test]
async fn insert_and_list_departments_roundtrip() {
    let pool = memory_pool().await;
    let inserted = departments::insert_departments(
        &pool,
        &[dept(1, "Supply Chain"), dept(2, "Maintenance")],
    )
    .await
    .expect("insert");
    assert_eq!(inserted, 2);

    let mut rows = departments::list_departments(&pool).await.expect("list");
    rows.sort_by_key(|r| r.id);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].department_name, "Supply Chain");
    assert_eq!(rows[1].department_name, "Maintenance");
}

#[tokio::test]
async fn store_assigns_ids_when_absent() {
    let pool = memory_pool().await;
    jobs::insert_jobs(
        &pool,
        &[
            NewJob { id: None, job_name: "Recruiter".into() },
            NewJob { id: None, job_name: "Manager".into() },
        ],
    )
    .await
    .expect("insert");

    let rows = jobs::list_jobs(&pool).await.expect("list");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.id > 0));
}

#[tokio::test]
async fn duplicate_name_aborts_the_whole_batch() {
    let pool = memory_pool().await;
    departments::insert_departments(&pool, &[dept(1, "Sales")])
        .await
        .expect("seed");

    // Second batch: one fresh row, one unique-constraint violation.
    let result = departments::insert_departments(
        &pool,
        &[dept(2, "Ops"), dept(3, "Sales")],
    )
    .await;
    assert!(result.is_err());

    // Nothing from the failed batch stuck.
    let rows = departments::list_departments(&pool).await.expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_name, "Sales");
}

#[tokio::test]
async fn clear_on_an_empty_table_reports_zero() {
    let pool = memory_pool().await;
    assert_eq!(employees::clear_employees(&pool).await.expect("clear"), 0);
    assert_eq!(employees::clear_employees(&pool).await.expect("clear"), 0);
}

#[tokio::test]
async fn employee_nulls_survive_the_roundtrip() {
    let pool = memory_pool().await;
    employees::insert_employees(
        &pool,
        &[NewEmployee {
            id: Some(7),
            name: Some("Alice".into()),
            hire_date: None,
            department_id: None,
            job_id: None,
        }],
    )
    .await
    .expect("insert");

    let rows = employees::list_employees(&pool).await.expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 7);
    assert_eq!(rows[0].name.as_deref(), Some("Alice"));
    assert_eq!(rows[0].hire_date, None);
    assert_eq!(rows[0].department_id, None);
    assert_eq!(rows[0].job_id, None);
}

// ============================================================
// Report aggregations
// ============================================================

#[tokio::test]
async fn hires_by_quarter_groups_and_filters_the_year() {
    let pool = memory_pool().await;
    departments::insert_departments(&pool, &[dept(1, "Engineering"), dept(2, "Sales")])
        .await
        .expect("departments");
    jobs::insert_jobs(&pool, &[job(1, "Analyst")]).await.expect("jobs");
    employees::insert_employees(
        &pool,
        &[
            emp(1, 1, 1, "2021-01-10T09:00:00Z"), // Q1
            emp(2, 1, 1, "2021-02-20T09:00:00Z"), // Q1
            emp(3, 1, 1, "2021-08-01T09:00:00Z"), // Q3
            emp(4, 2, 1, "2021-12-31T09:00:00Z"), // Q4
            emp(5, 1, 1, "2020-06-15T09:00:00Z"), // wrong year
            NewEmployee {
                id: Some(6),
                name: Some("no-date".into()),
                hire_date: None,
                department_id: Some(1),
                job_id: Some(1),
            },
        ],
    )
    .await
    .expect("employees");

    let rows = reports::hires_by_quarter(&pool, 2021).await.expect("report");
    let tuples: Vec<(&str, &str, i64, i64)> = rows
        .iter()
        .map(|r| (r.department.as_str(), r.job.as_str(), r.quarter, r.hires))
        .collect();
    assert_eq!(
        tuples,
        vec![
            ("Engineering", "Analyst", 1, 2),
            ("Engineering", "Analyst", 3, 1),
            ("Sales", "Analyst", 4, 1),
        ]
    );
}

#[tokio::test]
async fn departments_above_mean_is_a_strict_inequality() {
    let pool = memory_pool().await;
    departments::insert_departments(
        &pool,
        &[dept(1, "Support"), dept(2, "Marketing"), dept(3, "Engineering")],
    )
    .await
    .expect("departments");
    jobs::insert_jobs(&pool, &[job(1, "Analyst")]).await.expect("jobs");

    // Hire counts 10 / 20 / 30: mean is 20, only the 30 passes.
    let mut staff = Vec::new();
    let mut next_id = 1;
    for (dept_id, count) in [(1, 10), (2, 20), (3, 30)] {
        for _ in 0..count {
            staff.push(emp(next_id, dept_id, 1, "2021-05-05T08:00:00Z"));
            next_id += 1;
        }
    }
    employees::insert_employees(&pool, &staff).await.expect("employees");

    let rows = reports::departments_above_mean(&pool, 2021).await.expect("report");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_id, 3);
    assert_eq!(rows[0].department_name, "Engineering");
    assert_eq!(rows[0].num_hired, 30);
}

// ============================================================
// Ad-hoc execution
// ============================================================

#[tokio::test]
async fn adhoc_select_one() {
    let pool = memory_pool().await;
    let output = adhoc::execute_raw(&pool, "SELECT 1").await.expect("query");
    assert_eq!(output.columns, vec!["1"]);
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0]["1"], serde_json::json!(1));
}

#[tokio::test]
async fn adhoc_invalid_sql_is_an_error() {
    let pool = memory_pool().await;
    assert!(adhoc::execute_raw(&pool, "SELEC nonsense").await.is_err());
}

#[tokio::test]
async fn adhoc_empty_result_has_no_columns() {
    let pool = memory_pool().await;
    let output = adhoc::execute_raw(&pool, "SELECT * FROM employees")
        .await
        .expect("query");
    assert!(output.columns.is_empty());
    assert!(output.rows.is_empty());
}

#[tokio::test]
async fn adhoc_decodes_null_real_and_text() {
    let pool = memory_pool().await;
    let output = adhoc::execute_raw(&pool, "SELECT NULL AS n, 1.5 AS r, 'hi' AS t")
        .await
        .expect("query");
    assert_eq!(output.columns, vec!["n", "r", "t"]);
    assert_eq!(output.rows[0]["n"], serde_json::Value::Null);
    assert_eq!(output.rows[0]["r"], serde_json::json!(1.5));
    assert_eq!(output.rows[0]["t"], serde_json::json!("hi"));
}
