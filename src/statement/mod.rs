//! SQL text generation from a row descriptor.
//!
//! Generation is pure: the same descriptor, operation, and placeholder style always yield
//! the same text. Column lists, placeholders, arguments, and result columns are all produced
//! by one traversal (key first when it applies, then fields in declared order), so the
//! positional correspondence between them cannot drift.

mod dml;
mod select;

use crate::entity::Entity;
use crate::error::SqlEntityError;
use crate::types::RowValues;

/// Placeholder syntax emitted for generated arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// Anonymous `?` placeholders.
    #[default]
    Question,
    /// `SQLite` numbered placeholders like `?1`.
    Sqlite,
    /// `PostgreSQL`-style placeholders like `$1`.
    Postgres,
}

impl PlaceholderStyle {
    /// Append the placeholder for the 1-based argument position `n`.
    pub fn push(self, buf: &mut String, n: usize) {
        match self {
            PlaceholderStyle::Question => buf.push('?'),
            PlaceholderStyle::Sqlite => buf.push_str(&format!("?{n}")),
            PlaceholderStyle::Postgres => buf.push_str(&format!("${n}")),
        }
    }
}

/// The statement shapes the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation<'q> {
    /// Read the row whose key equals the descriptor's key value.
    Get,
    /// Read with a caller-supplied predicate clause and arguments.
    Where {
        clause: &'q str,
        args: &'q [RowValues],
    },
    Insert,
    Update,
    Delete,
}

impl Operation<'_> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Where { .. } => "where",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Generated SQL with its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    /// Bound positionally; for generated placeholders `args.len() == placeholders`.
    pub args: Vec<RowValues>,
    /// Result columns in scan order. Empty for writes.
    pub columns: Vec<String>,
    /// Number of placeholders the generator emitted.
    pub placeholders: usize,
}

/// Builds [`Statement`]s for one placeholder style.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementGenerator {
    style: PlaceholderStyle,
}

impl StatementGenerator {
    #[must_use]
    pub fn new(style: PlaceholderStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Generate the statement for `operation` over `entity`.
    ///
    /// # Errors
    /// Returns `SqlEntityError::InvalidEntity` if the descriptor fails validation or the
    /// operation would produce malformed SQL (an update with nothing to set).
    pub fn generate(
        &self,
        entity: &Entity<'_>,
        operation: Operation<'_>,
    ) -> Result<Statement, SqlEntityError> {
        entity.validate()?;
        let statement = match operation {
            Operation::Get => self.get(entity),
            Operation::Where { clause, args } => self.select_where(entity, clause, args),
            Operation::Insert => self.insert(entity),
            Operation::Update => self.update(entity)?,
            Operation::Delete => self.delete(entity),
        };
        tracing::trace!(
            operation = operation.name(),
            relation = %entity.name,
            sql = %statement.sql,
            "generated statement"
        );
        Ok(statement)
    }
}

/// Accumulates `col=?` style fragments and their arguments with running numbering.
struct Placeholders {
    style: PlaceholderStyle,
    args: Vec<RowValues>,
}

impl Placeholders {
    fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            args: Vec::new(),
        }
    }

    /// Record `value` and append its placeholder to `buf`.
    fn bind(&mut self, buf: &mut String, value: RowValues) {
        self.args.push(value);
        self.style.push(buf, self.args.len());
    }

    fn finish(self, sql: String, columns: Vec<String>) -> Statement {
        Statement {
            sql,
            placeholders: self.args.len(),
            args: self.args,
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Field;

    struct Customer {
        id: i64,
        name: String,
        created: String,
    }

    impl Customer {
        fn entity(&mut self) -> Entity<'_> {
            Entity::new("customers", Field::new("id", &mut self.id))
                .field(Field::new("name", &mut self.name))
                .field(Field::new("created", &mut self.created).read_only())
        }
    }

    struct Car {
        vin: String,
        color: String,
        make: String,
    }

    impl Car {
        fn entity(&mut self) -> Entity<'_> {
            Entity::new("cars", Field::new("vin", &mut self.vin).non_incrementing())
                .field(Field::new("color", &mut self.color))
                .field(Field::new("make", &mut self.make))
        }
    }

    fn customer() -> Customer {
        Customer {
            id: 9,
            name: "John".into(),
            created: "2024-01-01".into(),
        }
    }

    fn car() -> Car {
        Car {
            vin: "JF2SHBDC5BH745690".into(),
            color: "red".into(),
            make: "honda".into(),
        }
    }

    fn text(s: &str) -> RowValues {
        RowValues::Text(s.into())
    }

    #[test]
    fn get_reads_key_and_every_field() {
        let mut c = customer();
        let stmt = StatementGenerator::default()
            .generate(&c.entity(), Operation::Get)
            .unwrap();
        assert_eq!(stmt.sql, "SELECT id,name,created FROM customers WHERE id=?");
        assert_eq!(stmt.columns, ["id", "name", "created"]);
        assert_eq!(stmt.args, vec![RowValues::Int(9)]);
    }

    #[test]
    fn insert_skips_incrementing_key_and_read_only() {
        let mut c = customer();
        let stmt = StatementGenerator::default()
            .generate(&c.entity(), Operation::Insert)
            .unwrap();
        assert_eq!(stmt.sql, "INSERT INTO customers(name) VALUES (?)");
        assert_eq!(stmt.args, vec![text("John")]);
        assert!(stmt.columns.is_empty());
    }

    #[test]
    fn update_sets_writable_fields_then_key_predicate() {
        let mut c = customer();
        let stmt = StatementGenerator::default()
            .generate(&c.entity(), Operation::Update)
            .unwrap();
        assert_eq!(stmt.sql, "UPDATE customers SET name=? WHERE id=?");
        assert_eq!(stmt.args, vec![text("John"), RowValues::Int(9)]);
    }

    #[test]
    fn non_incrementing_key_is_written() {
        let mut car = car();
        let generator = StatementGenerator::default();

        let insert = generator.generate(&car.entity(), Operation::Insert).unwrap();
        assert_eq!(insert.sql, "INSERT INTO cars(vin,color,make) VALUES (?,?,?)");
        assert_eq!(
            insert.args,
            vec![text("JF2SHBDC5BH745690"), text("red"), text("honda")]
        );

        let update = generator.generate(&car.entity(), Operation::Update).unwrap();
        assert_eq!(update.sql, "UPDATE cars SET vin=?,color=?,make=? WHERE vin=?");
        assert_eq!(update.placeholders, 4);
        assert_eq!(update.args.first(), update.args.last());
    }

    #[test]
    fn delete_uses_key_only() {
        let mut car = car();
        let stmt = StatementGenerator::default()
            .generate(&car.entity(), Operation::Delete)
            .unwrap();
        assert_eq!(stmt.sql, "DELETE FROM cars WHERE vin=?");
        assert_eq!(stmt.args, vec![text("JF2SHBDC5BH745690")]);
    }

    #[test]
    fn where_appends_caller_clause_and_args() {
        let mut c = customer();
        let args = [text("%@test.com")];
        let stmt = StatementGenerator::default()
            .generate(
                &c.entity(),
                Operation::Where {
                    clause: "WHERE email LIKE ? ORDER BY id",
                    args: &args,
                },
            )
            .unwrap();
        assert_eq!(
            stmt.sql,
            "SELECT id,name,created FROM customers WHERE email LIKE ? ORDER BY id"
        );
        assert_eq!(stmt.args, args.to_vec());
        assert_eq!(stmt.placeholders, 0);

        let bare = StatementGenerator::default()
            .generate(&c.entity(), Operation::Where { clause: "  ", args: &[] })
            .unwrap();
        assert_eq!(bare.sql, "SELECT id,name,created FROM customers");
    }

    #[test]
    fn numbered_styles_continue_into_predicate() {
        let mut car = car();
        let pg = StatementGenerator::new(PlaceholderStyle::Postgres)
            .generate(&car.entity(), Operation::Update)
            .unwrap();
        assert_eq!(pg.sql, "UPDATE cars SET vin=$1,color=$2,make=$3 WHERE vin=$4");

        let sqlite = StatementGenerator::new(PlaceholderStyle::Sqlite)
            .generate(&car.entity(), Operation::Insert)
            .unwrap();
        assert_eq!(sqlite.sql, "INSERT INTO cars(vin,color,make) VALUES (?1,?2,?3)");
    }

    #[test]
    fn update_with_nothing_to_set_is_rejected() {
        let mut id = 1_i64;
        let mut created = String::new();
        let entity = Entity::new("audit", Field::new("id", &mut id))
            .field(Field::new("created", &mut created).read_only());
        let err = StatementGenerator::default()
            .generate(&entity, Operation::Update)
            .unwrap_err();
        assert!(matches!(err, SqlEntityError::InvalidEntity(_)));
    }

    #[test]
    fn insert_with_no_columns_uses_default_values() {
        let mut id = 0_i64;
        let entity = Entity::new("counters", Field::new("id", &mut id));
        let stmt = StatementGenerator::default()
            .generate(&entity, Operation::Insert)
            .unwrap();
        assert_eq!(stmt.sql, "INSERT INTO counters DEFAULT VALUES");
        assert!(stmt.args.is_empty());
    }
}
