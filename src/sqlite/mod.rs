// SQLite module - the rusqlite-backed execution adapter
//
// - config: connection options and the fluent builder that opens a connection
// - connection: `SqliteConnection`, a configured handle implementing `Executor`
// - params: conversion from `RowValues` to rusqlite values
// - query: value extraction from rusqlite rows
// - executor: the four primitives over any `rusqlite::Connection`

pub mod config;
pub mod connection;
pub mod executor;
pub mod params;
pub mod query;

pub use config::{JournalMode, SqliteOptions, SqliteOptionsBuilder};
pub use connection::SqliteConnection;
pub use params::{Params, row_value_to_sqlite_value};
pub use query::sqlite_extract_value;
