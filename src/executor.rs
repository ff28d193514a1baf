//! The execution boundary: four primitives every backend provides.
//!
//! Each primitive prepares its statement, runs it, and releases it before returning, on
//! success and on every error path. Failures while compiling the text are
//! [`SqlEntityError::PrepareError`]; failures once arguments are bound are
//! [`SqlEntityError::ExecutionError`].

use crate::entity::Binding;
use crate::error::SqlEntityError;
use crate::statement::PlaceholderStyle;
use crate::types::RowValues;

/// Opaque handle to the current result row during [`Executor::fetch_many`].
pub trait RowSource {
    fn column_count(&self) -> usize;

    /// Value of the column at `idx` (0-based).
    ///
    /// # Errors
    /// Returns `SqlEntityError::ScanError` if the column cannot be read.
    fn value(&self, idx: usize) -> Result<RowValues, SqlEntityError>;
}

/// Callback invoked once per row by [`Executor::fetch_many`].
pub type RowCallback<'c> = dyn FnMut(&dyn RowSource) -> Result<(), SqlEntityError> + 'c;

/// A database handle able to run prepared statements with positional arguments.
pub trait Executor {
    /// Placeholder syntax the backend expects in generated SQL.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Question
    }

    /// Run a query and stream every row to `on_row`, stopping at the first error.
    ///
    /// # Errors
    /// Returns a prepare or execution error from the backend, or the first error returned
    /// by `on_row`.
    fn fetch_many(
        &self,
        sql: &str,
        args: &[RowValues],
        on_row: &mut RowCallback<'_>,
    ) -> Result<(), SqlEntityError>;

    /// Execute a write and return the identifier the backend assigned to the new row.
    ///
    /// # Errors
    /// Returns a prepare or execution error, or `IdentifierUnavailable` if the backend
    /// cannot report one for this statement.
    fn write_returning_identifier(
        &self,
        sql: &str,
        args: &[RowValues],
    ) -> Result<i64, SqlEntityError>;

    /// Execute a write, discarding the affected-row count.
    ///
    /// # Errors
    /// Returns a prepare or execution error from the backend.
    fn write_only(&self, sql: &str, args: &[RowValues]) -> Result<(), SqlEntityError>;

    /// Run a query expected to match one row and scan it into `targets`.
    ///
    /// Only the first row is scanned. The default implementation streams through
    /// [`Executor::fetch_many`]; backends can stop after the first row instead.
    ///
    /// # Errors
    /// `NotFound` if the query matched no rows, `ScanError` if the row does not fit
    /// `targets`, otherwise a prepare or execution error.
    fn fetch_one(
        &self,
        sql: &str,
        args: &[RowValues],
        targets: &mut [&mut Binding<'_>],
    ) -> Result<(), SqlEntityError> {
        let mut scanned = false;
        self.fetch_many(sql, args, &mut |row| {
            if !scanned {
                scan_row(row, targets)?;
                scanned = true;
            }
            Ok(())
        })?;
        if scanned {
            Ok(())
        } else {
            Err(SqlEntityError::NotFound(sql.to_string()))
        }
    }
}

impl<E: Executor + ?Sized> Executor for &E {
    fn placeholder_style(&self) -> PlaceholderStyle {
        (**self).placeholder_style()
    }

    fn fetch_many(
        &self,
        sql: &str,
        args: &[RowValues],
        on_row: &mut RowCallback<'_>,
    ) -> Result<(), SqlEntityError> {
        (**self).fetch_many(sql, args, on_row)
    }

    fn write_returning_identifier(
        &self,
        sql: &str,
        args: &[RowValues],
    ) -> Result<i64, SqlEntityError> {
        (**self).write_returning_identifier(sql, args)
    }

    fn write_only(&self, sql: &str, args: &[RowValues]) -> Result<(), SqlEntityError> {
        (**self).write_only(sql, args)
    }

    fn fetch_one(
        &self,
        sql: &str,
        args: &[RowValues],
        targets: &mut [&mut Binding<'_>],
    ) -> Result<(), SqlEntityError> {
        (**self).fetch_one(sql, args, targets)
    }
}

/// Scan one row positionally into `targets`.
///
/// All-or-nothing: the column count and every value are checked before any slot is
/// written, so a failed scan leaves the caller's storage untouched.
///
/// # Errors
/// Returns `SqlEntityError::ScanError` on a column count mismatch or an unconvertible value.
pub fn scan_row(
    row: &dyn RowSource,
    targets: &mut [&mut Binding<'_>],
) -> Result<(), SqlEntityError> {
    let count = row.column_count();
    if count != targets.len() {
        return Err(SqlEntityError::ScanError(format!(
            "row has {count} columns but {} bindings were supplied",
            targets.len()
        )));
    }

    let mut values = Vec::with_capacity(count);
    for (idx, target) in targets.iter().enumerate() {
        let value = row.value(idx)?;
        if !target.accepts(&value) {
            return Err(SqlEntityError::ScanError(format!(
                "column {idx}: cannot store {} value in {:?} slot",
                value.type_name(),
                target.kind()
            )));
        }
        values.push(value);
    }

    for (target, value) in targets.iter_mut().zip(values) {
        target.set(value)?;
    }
    Ok(())
}
