//! Row descriptors: the binding between a struct instance and one row of a relation.
//!
//! An [`Entity`] is built fresh for every operation by [`Persistable::entity`] and holds
//! mutable borrows of the instance's fields. Reads scan result columns back through those
//! borrows; writes read the instance's current values through them.
//!
//! ```rust
//! use sql_entity::prelude::*;
//!
//! #[derive(Default)]
//! struct Customer {
//!     id: i64,
//!     name: String,
//!     email: String,
//! }
//!
//! impl Persistable for Customer {
//!     fn entity(&mut self) -> Entity<'_> {
//!         Entity::new("customers", Field::new("id", &mut self.id))
//!             .field(Field::new("name", &mut self.name))
//!             .field(Field::new("email", &mut self.email))
//!     }
//!
//!     fn blank() -> Self {
//!         Self::default()
//!     }
//! }
//! ```

mod binding;
mod ops;
mod validate;

pub use binding::{Binding, ColumnValue};

use crate::types::RowValues;

/// One column: its name, its storage slot, and its write-eligibility flags.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: String,
    pub binding: Binding<'a>,
    /// Included in reads, never written by insert or update.
    pub read_only: bool,
    /// Only meaningful on the key: the caller assigns the key value, so insert and update
    /// write it. Incrementing keys are generated by the database and only read back.
    pub non_incrementing: bool,
}

impl<'a> Field<'a> {
    pub fn new(name: impl Into<String>, binding: impl Into<Binding<'a>>) -> Self {
        Self {
            name: name.into(),
            binding: binding.into(),
            read_only: false,
            non_incrementing: false,
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn non_incrementing(mut self) -> Self {
        self.non_incrementing = true;
        self
    }

    /// Current value of the bound storage.
    #[must_use]
    pub fn value(&self) -> RowValues {
        self.binding.value()
    }
}

/// A row descriptor: relation name, key field, and the ordered non-key fields.
///
/// The declared order of `fields` is the column order of every generated statement and
/// of every positional scan. The key is mandatory, so every key-dependent operation has a
/// predicate to work with.
#[derive(Debug)]
pub struct Entity<'a> {
    pub name: String,
    pub key: Field<'a>,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Entity<'a> {
    pub fn new(name: impl Into<String>, key: Field<'a>) -> Self {
        Self {
            name: name.into(),
            key,
            fields: Vec::new(),
        }
    }

    /// Append a non-key field; order of calls is column order.
    #[must_use]
    pub fn field(mut self, field: Field<'a>) -> Self {
        self.fields.push(field);
        self
    }

    /// Key first, then fields in declared order.
    pub fn columns(&self) -> impl Iterator<Item = &Field<'a>> {
        std::iter::once(&self.key).chain(self.fields.iter())
    }

    /// Fields that insert and update write, in column order.
    pub fn writable_columns(&self) -> impl Iterator<Item = &Field<'a>> {
        let key = self.key.non_incrementing.then_some(&self.key);
        key.into_iter()
            .chain(self.fields.iter().filter(|field| !field.read_only))
    }

    /// Mutable slots for a positional scan, in the same order as [`Entity::columns`].
    pub fn read_targets(&mut self) -> Vec<&mut Binding<'a>> {
        std::iter::once(&mut self.key.binding)
            .chain(self.fields.iter_mut().map(|field| &mut field.binding))
            .collect()
    }

    #[must_use]
    pub fn key_value(&self) -> RowValues {
        self.key.value()
    }
}

/// Capability of a domain type that maps onto one row of a relation.
pub trait Persistable {
    /// A descriptor bound to this instance's own storage.
    fn entity(&mut self) -> Entity<'_>;

    /// A fresh instance whose descriptor a result row can be scanned into.
    fn blank() -> Self
    where
        Self: Sized;
}
