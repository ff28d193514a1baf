use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::Entity;
use crate::error::SqlEntityError;

static COLUMN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid column regex"));

static RELATION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
        .expect("valid relation regex")
});

impl Entity<'_> {
    /// Check that the descriptor yields well-formed SQL: identifier-safe names and no
    /// duplicate columns (key included, compared case-insensitively).
    ///
    /// # Errors
    /// Returns `SqlEntityError::InvalidEntity` describing the first problem found.
    pub fn validate(&self) -> Result<(), SqlEntityError> {
        if !RELATION_NAME.is_match(&self.name) {
            return Err(SqlEntityError::InvalidEntity(format!(
                "relation name {:?} is not a valid identifier",
                self.name
            )));
        }

        let mut seen = HashSet::with_capacity(self.fields.len() + 1);
        for column in self.columns() {
            if !COLUMN_NAME.is_match(&column.name) {
                return Err(SqlEntityError::InvalidEntity(format!(
                    "column name {:?} on {} is not a valid identifier",
                    column.name, self.name
                )));
            }
            if !seen.insert(column.name.to_ascii_lowercase()) {
                return Err(SqlEntityError::InvalidEntity(format!(
                    "duplicate column {} on {}",
                    column.name, self.name
                )));
            }
        }
        Ok(())
    }
}
