//! Bind a struct instance to one row of a relation and generate the parameterized SQL to
//! get, filter, insert, update, or delete it.
//!
//! A type implements [`Persistable`] by returning an [`Entity`] whose fields borrow its own
//! storage. Reads scan result columns back through those borrows; writes bind their current
//! values. [`EntityCollection`] runs one query and builds a fresh value per row.
//!
//! ```rust,no_run
//! use sql_entity::prelude::*;
//!
//! #[derive(Default)]
//! struct Car {
//!     vin: String,
//!     color: String,
//! }
//!
//! impl Persistable for Car {
//!     fn entity(&mut self) -> Entity<'_> {
//!         Entity::new("cars", Field::new("vin", &mut self.vin).non_incrementing())
//!             .field(Field::new("color", &mut self.color))
//!     }
//!
//!     fn blank() -> Self {
//!         Self::default()
//!     }
//! }
//!
//! # fn demo() -> Result<(), SqlEntityError> {
//! let db = SqliteOptions::builder(":memory:").open()?;
//! db.execute_batch("CREATE TABLE cars(vin TEXT PRIMARY KEY, color TEXT)")?;
//!
//! let mut car = Car { vin: "JF2SHBDC5BH745690".into(), color: "red".into() };
//! car.entity().insert(&db)?;
//! car.color = "blue".into();
//! car.entity().update(&db)?;
//!
//! let mut loaded = Car { vin: car.vin.clone(), ..Car::default() };
//! loaded.entity().get(&db)?;
//! assert_eq!(loaded.color, "blue");
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod entity;
pub mod error;
pub mod executor;
pub mod prelude;
pub mod statement;
pub mod types;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "hashing")]
pub mod transform;

pub use collection::EntityCollection;
pub use entity::{Binding, ColumnValue, Entity, Field, Persistable};
pub use error::{Result, SqlEntityError};
pub use executor::{Executor, RowCallback, RowSource, scan_row};
pub use statement::{Operation, PlaceholderStyle, Statement, StatementGenerator};
pub use types::{ColumnKind, RowValues};
