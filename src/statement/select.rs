use crate::entity::Entity;
use crate::types::RowValues;

use super::{Placeholders, Statement, StatementGenerator};

/// `SELECT k,f1,f2 FROM t`, with the result columns in scan order.
fn select_prefix(entity: &Entity<'_>) -> (String, Vec<String>) {
    let columns: Vec<String> = entity.columns().map(|field| field.name.clone()).collect();
    let sql = format!("SELECT {} FROM {}", columns.join(","), entity.name);
    (sql, columns)
}

impl StatementGenerator {
    pub(super) fn get(&self, entity: &Entity<'_>) -> Statement {
        let (mut sql, columns) = select_prefix(entity);
        let mut placeholders = Placeholders::new(self.style);
        sql.push_str(" WHERE ");
        sql.push_str(&entity.key.name);
        sql.push('=');
        placeholders.bind(&mut sql, entity.key_value());
        placeholders.finish(sql, columns)
    }

    /// The caller's clause is emitted verbatim after the column list; its arguments follow
    /// in the order given.
    pub(super) fn select_where(
        &self,
        entity: &Entity<'_>,
        clause: &str,
        args: &[RowValues],
    ) -> Statement {
        let (mut sql, columns) = select_prefix(entity);
        let clause = clause.trim();
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(clause);
        }
        Statement {
            sql,
            args: args.to_vec(),
            columns,
            placeholders: 0,
        }
    }
}
