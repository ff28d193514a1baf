use rusqlite::types::Value;

use crate::error::SqlEntityError;
use crate::executor::RowSource;
use crate::types::RowValues;

/// Extract a `RowValues` from a `SQLite` row.
///
/// # Errors
///
/// Returns `SqlEntityError::ScanError` if the column does not exist.
pub fn sqlite_extract_value(
    row: &rusqlite::Row<'_>,
    idx: usize,
) -> Result<RowValues, SqlEntityError> {
    let value: Value = row
        .get(idx)
        .map_err(|e| SqlEntityError::ScanError(format!("column {idx}: {e}")))?;
    Ok(match value {
        Value::Null => RowValues::Null,
        Value::Integer(i) => RowValues::Int(i),
        Value::Real(f) => RowValues::Float(f),
        Value::Text(s) => RowValues::Text(s),
        Value::Blob(b) => RowValues::Blob(b),
    })
}

/// [`RowSource`] over the current rusqlite row.
pub(crate) struct SqliteRow<'r, 's> {
    pub(crate) row: &'r rusqlite::Row<'s>,
}

impl RowSource for SqliteRow<'_, '_> {
    fn column_count(&self) -> usize {
        let stmt: &rusqlite::Statement<'_> = self.row.as_ref();
        stmt.column_count()
    }

    fn value(&self, idx: usize) -> Result<RowValues, SqlEntityError> {
        sqlite_extract_value(self.row, idx)
    }
}
