//! `ingest` crate — upload parsing and batch validation for the ingestion
//! pipeline.
//!
//! Turns raw tabular uploads and structured batch payloads into typed
//! insert records for the `db` crate.  All shape checking happens here,
//! before anything touches a transaction.

pub mod batch;
pub mod error;
pub mod tabular;

pub use batch::{check_batch_size, DepartmentCreate, EmployeeCreate, JobCreate, MAX_BATCH_ROWS};
pub use error::IngestError;
