//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Upload parsing and batch validation live in the `ingest` crate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// departments
// ---------------------------------------------------------------------------

/// A persisted department row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DepartmentRow {
    pub id: i64,
    pub department_name: String,
}

/// A department pending insertion.
///
/// `id: None` lets the store assign the next key (structured batch path);
/// CSV uploads carry explicit ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub id: Option<i64>,
    pub department_name: String,
}

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

/// A persisted job row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub job_name: String,
}

/// A job pending insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub id: Option<i64>,
    pub job_name: String,
}

// ---------------------------------------------------------------------------
// employees
// ---------------------------------------------------------------------------

/// A persisted employee row.
///
/// Non-key columns are nullable: CSV sources have gaps, and the store
/// accepts them as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: Option<String>,
    /// ISO-like datetime string, e.g. `2021-11-07T02:48:42Z`.
    pub hire_date: Option<String>,
    pub department_id: Option<i64>,
    pub job_id: Option<i64>,
}

/// An employee pending insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub hire_date: Option<String>,
    pub department_id: Option<i64>,
    pub job_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// report rows
// ---------------------------------------------------------------------------

/// One long-form row of the hires-by-quarter aggregation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct QuarterHireRow {
    pub department: String,
    pub job: String,
    /// 1..=4, derived from the hire month by the store.
    pub quarter: i64,
    pub hires: i64,
}

/// One row of the departments-above-mean ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DepartmentHireRow {
    pub department_id: i64,
    pub department_name: String,
    pub num_hired: i64,
}
