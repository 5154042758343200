//! Structured batch insertion: creation DTOs and the per-call row cap.

use serde::{Deserialize, Serialize};

use db::models::{NewDepartment, NewEmployee, NewJob};

use crate::IngestError;

/// Hard cap on rows per structured batch call.
///
/// Bounds per-request memory and transaction size; callers split larger
/// loads into multiple calls.
pub const MAX_BATCH_ROWS: usize = 1000;

/// Reject batches larger than [`MAX_BATCH_ROWS`] before any row is
/// touched.
pub fn check_batch_size(len: usize) -> Result<(), IngestError> {
    if len > MAX_BATCH_ROWS {
        return Err(IngestError::TooManyRows { limit: MAX_BATCH_ROWS, got: len });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Creation DTOs — the store assigns ids on this path
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub department_name: String,
}

impl From<DepartmentCreate> for NewDepartment {
    fn from(value: DepartmentCreate) -> Self {
        NewDepartment { id: None, department_name: value.department_name }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub job_name: String,
}

impl From<JobCreate> for NewJob {
    fn from(value: JobCreate) -> Self {
        NewJob { id: None, job_name: value.job_name }
    }
}

/// Unlike CSV rows, the structured path requires every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub hire_date: String,
    pub department_id: i64,
    pub job_id: i64,
}

impl From<EmployeeCreate> for NewEmployee {
    fn from(value: EmployeeCreate) -> Self {
        NewEmployee {
            id: None,
            name: Some(value.name),
            hire_date: Some(value.hire_date),
            department_id: Some(value.department_id),
            job_id: Some(value.job_id),
        }
    }
}
