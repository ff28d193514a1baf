use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlEntityError {
    /// Failures outside the execution primitives, e.g. opening a database file.
    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    /// The backend rejected the statement text before any argument was bound.
    #[error("Statement preparation error: {0}")]
    PrepareError(String),

    /// The backend failed while executing with bound arguments.
    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    /// A result row could not populate the requested bindings.
    #[error("Row scan error: {0}")]
    ScanError(String),

    /// A single-row fetch matched no rows.
    #[error("No row found: {0}")]
    NotFound(String),

    /// The backend could not report an identifier for the written row.
    #[error("Identifier unavailable: {0}")]
    IdentifierUnavailable(String),

    /// The row descriptor cannot produce well-formed SQL.
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Raised by caller code, e.g. from a `fetch_many` row callback.
    #[error("Other error: {0}")]
    Other(String),

    #[cfg(feature = "hashing")]
    #[error("Hashing error: {0}")]
    HashError(String),

    #[cfg(feature = "hashing")]
    #[error("Password does not match")]
    PasswordMismatch,
}

impl SqlEntityError {
    /// True for [`SqlEntityError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SqlEntityError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SqlEntityError>;
