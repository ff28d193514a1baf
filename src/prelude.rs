//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::collection::EntityCollection;
pub use crate::entity::{Binding, ColumnValue, Entity, Field, Persistable};
pub use crate::error::SqlEntityError;
pub use crate::executor::{Executor, RowSource};
pub use crate::statement::{Operation, PlaceholderStyle, Statement, StatementGenerator};
pub use crate::types::{ColumnKind, RowValues};

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{JournalMode, SqliteConnection, SqliteOptions};

#[cfg(feature = "hashing")]
pub use crate::transform::{Md5Hash, Password, Sha256Hash};
