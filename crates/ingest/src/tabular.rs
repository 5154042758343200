//! Headerless CSV parsing with fixed, entity-specific column orders.
//!
//! Column orders:
//! - departments: `id,department_name`
//! - jobs:        `id,job_name`
//! - employees:   `id,name,hire_date,department_id,job_id`
//!
//! Every row must parse before anything is handed to the store; a single
//! malformed row fails the whole upload.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use db::models::{NewDepartment, NewEmployee, NewJob};

use crate::IngestError;

// ---------------------------------------------------------------------------
// Per-entity record shapes as they appear on the wire
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DepartmentCsvRecord {
    id: i64,
    department_name: String,
}

#[derive(Debug, Deserialize)]
struct JobCsvRecord {
    id: i64,
    job_name: String,
}

/// Employee uploads may leave any non-key field empty; gaps become NULLs.
#[derive(Debug, Deserialize)]
struct EmployeeCsvRecord {
    id: i64,
    name: Option<String>,
    hire_date: Option<String>,
    department_id: Option<i64>,
    job_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse each row positionally into `T`, enforcing the column count.
fn parse_rows<T: DeserializeOwned>(input: &[u8], expected: usize) -> Result<Vec<T>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        if record.len() != expected {
            return Err(IngestError::ColumnCount {
                row: record.position().map(|p| p.line()).unwrap_or(0),
                expected,
                got: record.len(),
            });
        }
        rows.push(record.deserialize(None)?);
    }
    Ok(rows)
}

/// Parse a department upload.  Column order: `id,department_name`.
pub fn parse_departments(input: &[u8]) -> Result<Vec<NewDepartment>, IngestError> {
    let rows: Vec<DepartmentCsvRecord> = parse_rows(input, 2)?;
    debug!(rows = rows.len(), "parsed department upload");
    Ok(rows
        .into_iter()
        .map(|r| NewDepartment { id: Some(r.id), department_name: r.department_name })
        .collect())
}

/// Parse a job upload.  Column order: `id,job_name`.
pub fn parse_jobs(input: &[u8]) -> Result<Vec<NewJob>, IngestError> {
    let rows: Vec<JobCsvRecord> = parse_rows(input, 2)?;
    debug!(rows = rows.len(), "parsed job upload");
    Ok(rows
        .into_iter()
        .map(|r| NewJob { id: Some(r.id), job_name: r.job_name })
        .collect())
}

/// Parse an employee upload.  Column order:
/// `id,name,hire_date,department_id,job_id`.
pub fn parse_employees(input: &[u8]) -> Result<Vec<NewEmployee>, IngestError> {
    let rows: Vec<EmployeeCsvRecord> = parse_rows(input, 5)?;
    debug!(rows = rows.len(), "parsed employee upload");
    Ok(rows
        .into_iter()
        .map(|r| NewEmployee {
            id: Some(r.id),
            name: r.name,
            hire_date: r.hire_date,
            department_id: r.department_id,
            job_id: r.job_id,
        })
        .collect())
}
