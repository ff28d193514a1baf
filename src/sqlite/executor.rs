use rusqlite::{Connection, Statement};

use crate::entity::Binding;
use crate::error::SqlEntityError;
use crate::executor::{Executor, RowCallback, scan_row};
use crate::types::RowValues;

use super::params::Params;
use super::query::SqliteRow;

fn prepare<'c>(conn: &'c Connection, sql: &str) -> Result<Statement<'c>, SqlEntityError> {
    conn.prepare(sql)
        .map_err(|e| SqlEntityError::PrepareError(format!("{e} (sql: {sql})")))
}

fn execution_error(sql: &str) -> impl Fn(rusqlite::Error) -> SqlEntityError + '_ {
    move |e| SqlEntityError::ExecutionError(format!("{e} (sql: {sql})"))
}

/// Convert arguments, checking them against the statement's placeholder count.
fn bind_params(stmt: &Statement<'_>, sql: &str, args: &[RowValues]) -> Result<Params, SqlEntityError> {
    let expected = stmt.parameter_count();
    if expected != args.len() {
        return Err(SqlEntityError::ParameterError(format!(
            "statement expects {expected} arguments but {} were supplied (sql: {sql})",
            args.len()
        )));
    }
    Ok(Params::convert(args))
}

/// Stream every row of a query to `on_row`.
///
/// # Errors
/// `PrepareError`, `ParameterError`, `ExecutionError`, or the first callback error.
pub fn fetch_many(
    conn: &Connection,
    sql: &str,
    args: &[RowValues],
    on_row: &mut RowCallback<'_>,
) -> Result<(), SqlEntityError> {
    tracing::debug!(sql, args = args.len(), "sqlite fetch_many");
    let mut stmt = prepare(conn, sql)?;
    let params = bind_params(&stmt, sql, args)?;
    let mut rows = stmt.query(params.as_params()).map_err(execution_error(sql))?;
    while let Some(row) = rows.next().map_err(execution_error(sql))? {
        on_row(&SqliteRow { row })?;
    }
    Ok(())
}

/// Scan the first row of a query into `targets`.
///
/// # Errors
/// `NotFound` when the query returns no rows, `ScanError` when the row does not fit
/// `targets`, otherwise `PrepareError`, `ParameterError`, or `ExecutionError`.
pub fn fetch_one(
    conn: &Connection,
    sql: &str,
    args: &[RowValues],
    targets: &mut [&mut Binding<'_>],
) -> Result<(), SqlEntityError> {
    tracing::debug!(sql, args = args.len(), "sqlite fetch_one");
    let mut stmt = prepare(conn, sql)?;
    let params = bind_params(&stmt, sql, args)?;
    let mut rows = stmt.query(params.as_params()).map_err(execution_error(sql))?;
    let Some(row) = rows.next().map_err(execution_error(sql))? else {
        return Err(SqlEntityError::NotFound(sql.to_string()));
    };
    scan_row(&SqliteRow { row }, targets)?;
    // Targets are already written, so trailing rows only warn.
    match rows.next() {
        Ok(Some(_)) => {
            tracing::warn!(sql, "fetch_one matched more than one row; extra rows ignored");
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(sql, error = %e, "fetch_one could not advance past the first row");
        }
    }
    Ok(())
}

/// Execute a write and return `last_insert_rowid`.
///
/// # Errors
/// `IdentifierUnavailable` if the statement changed no rows (nothing was inserted),
/// otherwise `PrepareError`, `ParameterError`, or `ExecutionError`.
pub fn write_returning_identifier(
    conn: &Connection,
    sql: &str,
    args: &[RowValues],
) -> Result<i64, SqlEntityError> {
    tracing::debug!(sql, args = args.len(), "sqlite write_returning_identifier");
    let mut stmt = prepare(conn, sql)?;
    let params = bind_params(&stmt, sql, args)?;
    let changed = stmt.execute(params.as_params()).map_err(execution_error(sql))?;
    if changed == 0 {
        return Err(SqlEntityError::IdentifierUnavailable(format!(
            "no row was written (sql: {sql})"
        )));
    }
    Ok(conn.last_insert_rowid())
}

/// Execute a write, discarding the change count.
///
/// # Errors
/// `PrepareError`, `ParameterError`, or `ExecutionError`.
pub fn write_only(conn: &Connection, sql: &str, args: &[RowValues]) -> Result<(), SqlEntityError> {
    tracing::debug!(sql, args = args.len(), "sqlite write_only");
    let mut stmt = prepare(conn, sql)?;
    let params = bind_params(&stmt, sql, args)?;
    stmt.execute(params.as_params()).map_err(execution_error(sql))?;
    Ok(())
}

impl Executor for Connection {
    fn fetch_many(
        &self,
        sql: &str,
        args: &[RowValues],
        on_row: &mut RowCallback<'_>,
    ) -> Result<(), SqlEntityError> {
        fetch_many(self, sql, args, on_row)
    }

    fn write_returning_identifier(
        &self,
        sql: &str,
        args: &[RowValues],
    ) -> Result<i64, SqlEntityError> {
        write_returning_identifier(self, sql, args)
    }

    fn write_only(&self, sql: &str, args: &[RowValues]) -> Result<(), SqlEntityError> {
        write_only(self, sql, args)
    }

    fn fetch_one(
        &self,
        sql: &str,
        args: &[RowValues],
        targets: &mut [&mut Binding<'_>],
    ) -> Result<(), SqlEntityError> {
        fetch_one(self, sql, args, targets)
    }
}
