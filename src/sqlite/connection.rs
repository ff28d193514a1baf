use rusqlite::Connection;

use crate::entity::Binding;
use crate::error::SqlEntityError;
use crate::executor::{Executor, RowCallback};
use crate::statement::PlaceholderStyle;
use crate::types::RowValues;

use super::executor;

/// A `SQLite` connection opened from [`SqliteOptions`](super::SqliteOptions).
///
/// Runs the execution primitives with the configured placeholder style. The raw
/// `rusqlite::Connection` also implements [`Executor`] (with `?` placeholders) for callers
/// that manage their own connections.
#[derive(Debug)]
pub struct SqliteConnection {
    conn: Connection,
    style: PlaceholderStyle,
}

impl SqliteConnection {
    pub(crate) fn new(conn: Connection, style: PlaceholderStyle) -> Self {
        Self { conn, style }
    }

    /// Borrow the underlying rusqlite connection.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    #[must_use]
    pub fn into_inner(self) -> Connection {
        self.conn
    }

    /// Run one or more `;`-separated statements without arguments (DDL, pragmas).
    ///
    /// # Errors
    ///
    /// Returns `SqlEntityError::ExecutionError` if any statement fails.
    pub fn execute_batch(&self, sql: &str) -> Result<(), SqlEntityError> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| SqlEntityError::ExecutionError(e.to_string()))
    }
}

impl Executor for SqliteConnection {
    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn fetch_many(
        &self,
        sql: &str,
        args: &[RowValues],
        on_row: &mut RowCallback<'_>,
    ) -> Result<(), SqlEntityError> {
        executor::fetch_many(&self.conn, sql, args, on_row)
    }

    fn write_returning_identifier(
        &self,
        sql: &str,
        args: &[RowValues],
    ) -> Result<i64, SqlEntityError> {
        executor::write_returning_identifier(&self.conn, sql, args)
    }

    fn write_only(&self, sql: &str, args: &[RowValues]) -> Result<(), SqlEntityError> {
        executor::write_only(&self.conn, sql, args)
    }

    fn fetch_one(
        &self,
        sql: &str,
        args: &[RowValues],
        targets: &mut [&mut Binding<'_>],
    ) -> Result<(), SqlEntityError> {
        executor::fetch_one(&self.conn, sql, args, targets)
    }
}
