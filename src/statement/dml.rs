use crate::entity::Entity;
use crate::error::SqlEntityError;

use super::{Placeholders, Statement, StatementGenerator};

impl StatementGenerator {
    pub(super) fn insert(&self, entity: &Entity<'_>) -> Statement {
        let mut placeholders = Placeholders::new(self.style);
        let names: Vec<&str> = entity
            .writable_columns()
            .map(|field| field.name.as_str())
            .collect();
        if names.is_empty() {
            let sql = format!("INSERT INTO {} DEFAULT VALUES", entity.name);
            return placeholders.finish(sql, Vec::new());
        }

        let mut sql = format!("INSERT INTO {}({}) VALUES (", entity.name, names.join(","));
        for (i, field) in entity.writable_columns().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            placeholders.bind(&mut sql, field.value());
        }
        sql.push(')');
        placeholders.finish(sql, Vec::new())
    }

    /// An incrementing key is never in the SET list: database-assigned keys are immutable.
    pub(super) fn update(&self, entity: &Entity<'_>) -> Result<Statement, SqlEntityError> {
        let mut placeholders = Placeholders::new(self.style);
        let mut sql = format!("UPDATE {} SET ", entity.name);
        let mut assigned = 0;
        for field in entity.writable_columns() {
            if assigned > 0 {
                sql.push(',');
            }
            sql.push_str(&field.name);
            sql.push('=');
            placeholders.bind(&mut sql, field.value());
            assigned += 1;
        }
        if assigned == 0 {
            return Err(SqlEntityError::InvalidEntity(format!(
                "{} has no writable columns to update",
                entity.name
            )));
        }

        sql.push_str(" WHERE ");
        sql.push_str(&entity.key.name);
        sql.push('=');
        placeholders.bind(&mut sql, entity.key_value());
        Ok(placeholders.finish(sql, Vec::new()))
    }

    pub(super) fn delete(&self, entity: &Entity<'_>) -> Statement {
        let mut placeholders = Placeholders::new(self.style);
        let mut sql = format!("DELETE FROM {} WHERE {}=", entity.name, entity.key.name);
        placeholders.bind(&mut sql, entity.key_value());
        placeholders.finish(sql, Vec::new())
    }
}
