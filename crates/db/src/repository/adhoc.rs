//! Verbatim SQL execution for the ad-hoc query console.
//!
//! The caller's text runs as-is, reads and writes alike.  Containment
//! happens at the API layer (opt-in flag), not here.

use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

use crate::DbError;

/// Column names plus one JSON object per result row.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

/// Execute `sql` verbatim and decode every result cell to JSON.
///
/// Statements that produce no rows (DDL, DML) return empty columns and
/// rows rather than an error.
pub async fn execute_raw(pool: &SqlitePool, sql: &str) -> Result<QueryOutput, DbError> {
    let rows = sqlx::query(sql).fetch_all(pool).await?;

    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut decoded = Vec::with_capacity(rows.len());
    for row in &rows {
        decoded.push(row_to_json(row)?);
    }

    Ok(QueryOutput { columns, rows: decoded })
}

fn row_to_json(row: &SqliteRow) -> Result<Map<String, Value>, DbError> {
    let mut object = Map::new();
    for (idx, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), cell_to_json(row, idx)?);
    }
    Ok(object)
}

/// Decode one cell by its runtime SQLite storage class.
fn cell_to_json(row: &SqliteRow, idx: usize) -> Result<Value, DbError> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(idx)?),
        "REAL" => Number::from_f64(row.try_get::<f64, _>(idx)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get(idx)?;
            Value::String(bytes.iter().map(|b| format!("{b:02x}")).collect())
        }
        // TEXT and anything else decodes as a string.
        _ => Value::String(row.try_get::<String, _>(idx)?),
    };
    Ok(value)
}
