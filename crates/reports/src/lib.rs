//! `reports` crate — reshaping and rendering for the analytical views.
//!
//! The aggregation SQL lives in `db::repository::reports`; this crate
//! turns the long-form result rows into presentation tables.  Pure
//! functions, no I/O.

pub mod html;
pub mod pivot;

pub use pivot::{pivot_quarters, QuarterPivotRow};
