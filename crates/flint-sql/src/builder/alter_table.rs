//! ALTER TABLE statement builder.

use crate::ast::{AlterTable, ColumnSpec, IndexSpec, NodeRef};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::Result;
use crate::statement::Statement;

/// Builds an ALTER TABLE statement that adds columns and indices.
#[derive(Debug, Clone)]
pub struct AlterTableBuilder<D> {
    dialect: D,
    name: String,
    add_columns: Vec<ColumnSpec>,
    add_indices: Vec<IndexSpec>,
}

impl<D: Dialect> AlterTableBuilder<D> {
    pub(crate) fn new(dialect: D, name: impl Into<String>) -> Self {
        Self {
            dialect,
            name: name.into(),
            add_columns: Vec::new(),
            add_indices: Vec::new(),
        }
    }

    /// Appends a column to add.
    #[must_use]
    pub fn add_column(mut self, spec: ColumnSpec) -> Self {
        self.add_columns.push(spec);
        self
    }

    /// Appends an index to add.
    #[must_use]
    pub fn add_index(mut self, spec: IndexSpec) -> Self {
        self.add_indices.push(spec);
        self
    }

    /// Assembles the statement node and renders it.
    pub fn build(self) -> Result<Statement> {
        let mut node = AlterTable::new(self.name);
        node.add_columns = self.add_columns;
        node.add_indices = self.add_indices;

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::AlterTable(&node));
        Ok(w.into_statement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::column::{int, text};
    use crate::dialect::{MysqlDialect, SqliteDialect};
    use crate::index::IndexBuilder;

    #[test]
    fn test_mysql_add_columns_and_index() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .alter_table("t")
            .add_column(int("A").build())
            .add_column(text("B", 10).build())
            .add_index(IndexBuilder::named("idx").on_columns(["A", "B"]).unique().build())
            .build()
            .unwrap();

        assert_eq!(
            stmt.sql,
            "ALTER TABLE t ADD COLUMN A INT, ADD COLUMN B TEXT(10), ADD UNIQUE INDEX idx (A,B)"
        );
    }

    #[test]
    fn test_sqlite_add_columns() {
        let stmt = QueryBuilder::new(SqliteDialect::new())
            .alter_table("t")
            .add_column(int("A").build())
            .build()
            .unwrap();

        assert_eq!(stmt.sql, "ALTER TABLE t ADD COLUMN A INTEGER");
    }

    #[test]
    #[should_panic(expected = "sqlite cannot add an index")]
    fn test_sqlite_add_index_fails_fast() {
        let _ = QueryBuilder::new(SqliteDialect::new())
            .alter_table("t")
            .add_index(IndexBuilder::named("idx").on_columns(["A"]).build())
            .build();
    }
}
