use super::Entity;
use crate::error::SqlEntityError;
use crate::executor::Executor;
use crate::statement::{Operation, Statement, StatementGenerator};
use crate::types::{ColumnKind, RowValues};

impl Entity<'_> {
    fn statement<E: Executor + ?Sized>(
        &self,
        db: &E,
        operation: Operation<'_>,
    ) -> Result<Statement, SqlEntityError> {
        StatementGenerator::new(db.placeholder_style()).generate(self, operation)
    }

    /// Load the row whose key equals the key slot's current value into every slot.
    ///
    /// ```rust,no_run
    /// # use sql_entity::prelude::*;
    /// # #[derive(Default)] struct Customer { id: i64, name: String }
    /// # impl Persistable for Customer {
    /// #     fn entity(&mut self) -> Entity<'_> {
    /// #         Entity::new("customers", Field::new("id", &mut self.id))
    /// #             .field(Field::new("name", &mut self.name))
    /// #     }
    /// #     fn blank() -> Self { Self::default() }
    /// # }
    /// # fn demo(conn: &rusqlite::Connection) -> Result<(), SqlEntityError> {
    /// let mut customer = Customer { id: 1, ..Customer::default() };
    /// customer.entity().get(conn)?;
    /// println!("{}", customer.name);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `NotFound` if no row has that key; otherwise any generation, prepare, execution, or
    /// scan error. The caller's value is unchanged on error.
    pub fn get<E: Executor + ?Sized>(&mut self, db: &E) -> Result<(), SqlEntityError> {
        let statement = self.statement(db, Operation::Get)?;
        db.fetch_one(&statement.sql, &statement.args, &mut self.read_targets())
    }

    /// Load the first row matching a raw predicate clause (`WHERE ...`, `ORDER BY ...`).
    ///
    /// # Errors
    /// `NotFound` if nothing matched; otherwise any prepare, execution, or scan error.
    pub fn get_where<E: Executor + ?Sized>(
        &mut self,
        db: &E,
        clause: &str,
        args: &[RowValues],
    ) -> Result<(), SqlEntityError> {
        let statement = self.statement(db, Operation::Where { clause, args })?;
        db.fetch_one(&statement.sql, &statement.args, &mut self.read_targets())
    }

    /// Insert the row and return the identifier the backend reports.
    ///
    /// When the key is incrementing and its slot holds integers, the identifier is also
    /// written into the key slot. Nothing is written back if the insert fails.
    ///
    /// # Errors
    /// Any generation, prepare, or execution error, or `IdentifierUnavailable`.
    pub fn insert<E: Executor + ?Sized>(&mut self, db: &E) -> Result<i64, SqlEntityError> {
        let statement = self.statement(db, Operation::Insert)?;
        let id = db.write_returning_identifier(&statement.sql, &statement.args)?;
        if !self.key.non_incrementing && self.key.binding.kind() == ColumnKind::Int {
            self.key.binding.set(RowValues::Int(id))?;
        }
        Ok(id)
    }

    /// Write every non-read-only field to the row identified by the key.
    ///
    /// # Errors
    /// Any generation, prepare, or execution error.
    pub fn update<E: Executor + ?Sized>(&self, db: &E) -> Result<(), SqlEntityError> {
        let statement = self.statement(db, Operation::Update)?;
        db.write_only(&statement.sql, &statement.args)
    }

    /// Delete the row identified by the key. Only the key slot needs a value.
    ///
    /// # Errors
    /// Any generation, prepare, or execution error.
    pub fn delete<E: Executor + ?Sized>(&self, db: &E) -> Result<(), SqlEntityError> {
        let statement = self.statement(db, Operation::Delete)?;
        db.write_only(&statement.sql, &statement.args)
    }
}
