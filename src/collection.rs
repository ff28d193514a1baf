use std::marker::PhantomData;

use crate::entity::Persistable;
use crate::error::SqlEntityError;
use crate::executor::{Executor, scan_row};
use crate::statement::{Operation, StatementGenerator};
use crate::types::RowValues;

/// Query many rows of one relation, building a fresh value per row.
///
/// Each row needs its own storage, so rows are scanned into values produced by a factory
/// (by default [`Persistable::blank`]).
///
/// ```rust,no_run
/// # use sql_entity::prelude::*;
/// # #[derive(Default)] struct Customer { id: i64, email: String }
/// # impl Persistable for Customer {
/// #     fn entity(&mut self) -> Entity<'_> {
/// #         Entity::new("customers", Field::new("id", &mut self.id))
/// #             .field(Field::new("email", &mut self.email))
/// #     }
/// #     fn blank() -> Self { Self::default() }
/// # }
/// # fn demo(conn: &rusqlite::Connection) -> Result<(), SqlEntityError> {
/// let customers = EntityCollection::<Customer>::new().select(
///     conn,
///     "WHERE email LIKE ?",
///     &[RowValues::Text("%@test.com".into())],
/// )?;
/// # let _ = customers;
/// # Ok(())
/// # }
/// ```
pub struct EntityCollection<T, F = fn() -> T> {
    factory: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Persistable> EntityCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: T::blank,
            _marker: PhantomData,
        }
    }
}

impl<T: Persistable> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> EntityCollection<T, F>
where
    T: Persistable,
    F: Fn() -> T,
{
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            _marker: PhantomData,
        }
    }

    /// Select every row matching `clause`, in the order the backend returns them.
    ///
    /// The column list comes from a prototype descriptor: key first, then fields in
    /// declared order, the same order each row is scanned in. An empty result is an empty
    /// vector, not an error.
    ///
    /// # Errors
    /// The first prepare, execution, or scan error; no partial results are returned.
    pub fn select<E: Executor + ?Sized>(
        &self,
        db: &E,
        clause: &str,
        args: &[RowValues],
    ) -> Result<Vec<T>, SqlEntityError> {
        let statement = {
            let mut prototype = (self.factory)();
            let entity = prototype.entity();
            StatementGenerator::new(db.placeholder_style())
                .generate(&entity, Operation::Where { clause, args })?
        };

        let mut values = Vec::new();
        db.fetch_many(&statement.sql, &statement.args, &mut |row| {
            let mut value = (self.factory)();
            {
                let mut entity = value.entity();
                scan_row(row, &mut entity.read_targets())?;
            }
            values.push(value);
            Ok(())
        })?;

        tracing::debug!(sql = %statement.sql, rows = values.len(), "collection select");
        Ok(values)
    }

    /// Every row of the relation.
    ///
    /// # Errors
    /// As for [`EntityCollection::select`].
    pub fn select_all<E: Executor + ?Sized>(&self, db: &E) -> Result<Vec<T>, SqlEntityError> {
        self.select(db, "", &[])
    }
}
