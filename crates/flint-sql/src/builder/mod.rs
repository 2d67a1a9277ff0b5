//! Fluent statement builders.
//!
//! [`QueryBuilder`] binds a dialect once and hands out one builder per
//! statement kind. Builders accumulate intent through chained calls; the
//! terminal `build()` assembles an immutable statement tree and renders it
//! into a [`Statement`](crate::Statement). Builders are single-shot: build,
//! then discard.

mod alter_table;
mod create_table;
mod delete;
mod expr;
mod insert;
mod select;
mod table;
mod update;

pub use alter_table::AlterTableBuilder;
pub use create_table::CreateTableBuilder;
pub use delete::DeleteBuilder;
pub use expr::{column, ColumnExpr};
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use table::{IntoTableExpr, JoinBuilder, Table};
pub use update::UpdateBuilder;

use crate::ast::TableExpr;
use crate::dialect::Dialect;

/// Entry point: a dialect plus an optional database qualifier for table
/// names.
#[derive(Debug, Clone)]
pub struct QueryBuilder<D> {
    dialect: D,
    database: Option<String>,
}

impl<D: Dialect + Clone> QueryBuilder<D> {
    /// Creates a builder for the given dialect.
    #[must_use]
    pub const fn new(dialect: D) -> Self {
        Self {
            dialect,
            database: None,
        }
    }

    /// Qualifies every plain table name with a database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    fn table(&self, name: &str) -> TableExpr {
        TableExpr::Name {
            database: self.database.clone(),
            name: String::from(name),
        }
    }

    /// Starts a SELECT from a plain table name.
    #[must_use]
    pub fn select_from(&self, table: &str) -> SelectBuilder<D> {
        SelectBuilder::new(self.dialect.clone(), self.table(table))
    }

    /// Starts a SELECT from an arbitrary table expression, e.g. a join
    /// chain. The database qualifier is not applied.
    #[must_use]
    pub fn select(&self, target: impl IntoTableExpr) -> SelectBuilder<D> {
        SelectBuilder::new(self.dialect.clone(), target.into_table_expr())
    }

    /// Starts an INSERT into a table.
    #[must_use]
    pub fn insert(&self, table: &str) -> InsertBuilder<D> {
        InsertBuilder::new(self.dialect.clone(), self.table(table))
    }

    /// Starts an UPDATE of a table.
    #[must_use]
    pub fn update(&self, table: &str) -> UpdateBuilder<D> {
        UpdateBuilder::new(self.dialect.clone(), self.table(table))
    }

    /// Starts a DELETE from a table.
    #[must_use]
    pub fn delete(&self, table: &str) -> DeleteBuilder<D> {
        DeleteBuilder::new(self.dialect.clone(), self.table(table))
    }

    /// Starts a CREATE TABLE.
    #[must_use]
    pub fn create_table(&self, name: &str) -> CreateTableBuilder<D> {
        CreateTableBuilder::new(self.dialect.clone(), name)
    }

    /// Starts an ALTER TABLE.
    #[must_use]
    pub fn alter_table(&self, name: &str) -> AlterTableBuilder<D> {
        AlterTableBuilder::new(self.dialect.clone(), name)
    }
}
