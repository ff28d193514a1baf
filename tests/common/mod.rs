#![allow(dead_code)]

use chrono::{NaiveDateTime, Utc};
use sql_entity::prelude::*;

pub const SCHEMA: &str = "
    CREATE TABLE customers (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        name    VARCHAR(255),
        email   VARCHAR(255),
        created DATETIME,
        updated DATETIME
    );
    CREATE TABLE cars (
        vin   VARCHAR(17) NOT NULL PRIMARY KEY,
        color VARCHAR(20),
        make  VARCHAR(50),
        model VARCHAR(50)
    );
    CREATE TABLE accounts (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        login      TEXT NOT NULL UNIQUE,
        password   TEXT NOT NULL,
        balance    REAL NOT NULL,
        active     BOOLEAN NOT NULL,
        nickname   TEXT,
        settings   JSON,
        avatar     BLOB,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
";

/// A typical model with an auto incrementing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

impl Customer {
    pub fn new(name: &str, email: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: 0,
            name: name.to_string(),
            email: email.to_string(),
            created: now,
            updated: now,
        }
    }
}

impl Persistable for Customer {
    fn entity(&mut self) -> Entity<'_> {
        Entity::new("customers", Field::new("id", &mut self.id))
            .field(Field::new("name", &mut self.name))
            .field(Field::new("email", &mut self.email))
            .field(Field::new("created", &mut self.created))
            .field(Field::new("updated", &mut self.updated))
    }

    fn blank() -> Self {
        Self::default()
    }
}

/// A model with a caller-assigned text key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Car {
    pub vin: String,
    pub color: String,
    pub make: String,
    pub model: String,
}

impl Persistable for Car {
    fn entity(&mut self) -> Entity<'_> {
        Entity::new("cars", Field::new("vin", &mut self.vin).non_incrementing())
            .field(Field::new("color", &mut self.color))
            .field(Field::new("make", &mut self.make))
            .field(Field::new("model", &mut self.model))
    }

    fn blank() -> Self {
        Self::default()
    }
}

/// Covers every slot kind, nullable columns, a read-only column, and a hashed password.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: i64,
    pub login: String,
    pub password: Password,
    pub balance: f64,
    pub active: bool,
    pub nickname: Option<String>,
    pub settings: serde_json::Value,
    pub avatar: Vec<u8>,
    pub created_at: NaiveDateTime,
}

impl Persistable for Account {
    fn entity(&mut self) -> Entity<'_> {
        Entity::new("accounts", Field::new("id", &mut self.id))
            .field(Field::new("login", &mut self.login))
            .field(Field::new("password", &mut self.password))
            .field(Field::new("balance", &mut self.balance))
            .field(Field::new("active", &mut self.active))
            .field(Field::new("nickname", &mut self.nickname))
            .field(Field::new("settings", &mut self.settings))
            .field(Field::new("avatar", &mut self.avatar))
            .field(Field::new("created_at", &mut self.created_at).read_only())
    }

    fn blank() -> Self {
        Self::default()
    }
}

pub fn memory_db() -> SqliteConnection {
    let db = SqliteOptions::builder(":memory:")
        .open()
        .expect("open in-memory sqlite");
    db.execute_batch(SCHEMA).expect("create schema");
    db
}
