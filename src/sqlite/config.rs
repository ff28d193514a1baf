use std::time::Duration;

use rusqlite::Connection;

use crate::error::SqlEntityError;
use crate::statement::PlaceholderStyle;

use super::connection::SqliteConnection;

/// `SQLite` journal mode applied when a connection is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    Wal,
    Off,
}

impl JournalMode {
    #[must_use]
    pub fn as_pragma(self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }
}

/// Options for opening a `SQLite` connection.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    /// File path, or `:memory:` for an in-memory database.
    pub db_path: String,
    pub placeholder_style: PlaceholderStyle,
    pub busy_timeout: Option<Duration>,
    pub foreign_keys: bool,
    pub journal_mode: Option<JournalMode>,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            placeholder_style: PlaceholderStyle::Question,
            busy_timeout: None,
            foreign_keys: true,
            journal_mode: None,
        }
    }

    #[must_use]
    pub fn builder(db_path: impl Into<String>) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }

    /// Open a connection and apply the configured pragmas.
    ///
    /// # Errors
    ///
    /// Returns `SqlEntityError::ConfigError` for an unusable option value, or
    /// `SqlEntityError::SqliteError` if the database cannot be opened or a pragma fails.
    pub fn open(self) -> Result<SqliteConnection, SqlEntityError> {
        if self.db_path.trim().is_empty() {
            return Err(SqlEntityError::ConfigError(
                "SQLite db_path must not be empty".to_string(),
            ));
        }
        if matches!(self.placeholder_style, PlaceholderStyle::Postgres) {
            return Err(SqlEntityError::ConfigError(
                "SQLite does not accept $N placeholders".to_string(),
            ));
        }

        let conn = if self.db_path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(&self.db_path)?
        };
        if let Some(timeout) = self.busy_timeout {
            conn.busy_timeout(timeout)?;
        }
        conn.pragma_update(None, "foreign_keys", self.foreign_keys)?;
        if let Some(mode) = self.journal_mode {
            // journal_mode reports the resulting mode as a row
            let applied: String =
                conn.pragma_update_and_check(None, "journal_mode", mode.as_pragma(), |row| {
                    row.get(0)
                })?;
            tracing::debug!(requested = mode.as_pragma(), applied = %applied, "sqlite journal mode");
        }

        tracing::debug!(path = %self.db_path, "opened sqlite connection");
        Ok(SqliteConnection::new(conn, self.placeholder_style))
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn placeholder_style(mut self, style: PlaceholderStyle) -> Self {
        self.opts.placeholder_style = style;
        self
    }

    #[must_use]
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.opts.busy_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.opts.foreign_keys = enabled;
        self
    }

    #[must_use]
    pub fn journal_mode(mut self, mode: JournalMode) -> Self {
        self.opts.journal_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Open a [`SqliteConnection`] with these options.
    ///
    /// # Errors
    ///
    /// See [`SqliteOptions::open`].
    pub fn open(self) -> Result<SqliteConnection, SqlEntityError> {
        self.finish().open()
    }
}
