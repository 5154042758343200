//! Long-form → wide-form reshaping of quarterly hire counts.

use std::collections::BTreeMap;

use serde::Serialize;

use db::models::QuarterHireRow;

/// One output row per (department, job) pair with one column per quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterPivotRow {
    pub department: String,
    pub job: String,
    /// Hire counts for Q1..Q4, zero-filled.
    pub quarters: [i64; 4],
}

/// Pivot grouped `(department, job, quarter, hires)` rows into wide form.
///
/// Output rows are ordered by department name then job name (lexical
/// ascending); quarters with no hires stay 0.
pub fn pivot_quarters(rows: &[QuarterHireRow]) -> Vec<QuarterPivotRow> {
    let mut table: BTreeMap<(String, String), [i64; 4]> = BTreeMap::new();
    for row in rows {
        // quarter is 1..=4 by construction of the month arithmetic
        if !(1..=4).contains(&row.quarter) {
            continue;
        }
        let cells = table
            .entry((row.department.clone(), row.job.clone()))
            .or_insert([0; 4]);
        cells[(row.quarter - 1) as usize] += row.hires;
    }
    table
        .into_iter()
        .map(|((department, job), quarters)| QuarterPivotRow { department, job, quarters })
        .collect()
}
