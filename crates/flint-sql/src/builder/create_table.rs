//! CREATE TABLE statement builder.

use crate::ast::{ColumnSpec, CreateTable, NodeRef};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::Result;
use crate::statement::Statement;

/// Builds a CREATE TABLE statement.
///
/// The primary-key clause is derived from the column specs; there is no way
/// to declare one directly.
#[derive(Debug, Clone)]
pub struct CreateTableBuilder<D> {
    dialect: D,
    name: String,
    columns: Vec<ColumnSpec>,
    if_not_exists: bool,
}

impl<D: Dialect> CreateTableBuilder<D> {
    pub(crate) fn new(dialect: D, name: impl Into<String>) -> Self {
        Self {
            dialect,
            name: name.into(),
            columns: Vec::new(),
            if_not_exists: false,
        }
    }

    /// Renders `IF NOT EXISTS`.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Appends a column definition.
    #[must_use]
    pub fn column(mut self, spec: ColumnSpec) -> Self {
        self.columns.push(spec);
        self
    }

    /// Appends several column definitions.
    #[must_use]
    pub fn columns(mut self, specs: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns.extend(specs);
        self
    }

    /// Assembles the statement node and renders it.
    pub fn build(self) -> Result<Statement> {
        let mut node = CreateTable::new(self.name);
        if self.if_not_exists {
            node.if_not_exists = true;
        }
        for spec in self.columns {
            node.add_column(spec);
        }

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::CreateTable(&node));
        Ok(w.into_statement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::column::{int, varchar};
    use crate::dialect::{MysqlDialect, SqliteDialect};

    #[test]
    fn test_mysql_trailing_primary_key() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .create_table("t")
            .if_not_exists()
            .column(int("A").not_null().auto_increment().primary_key().build())
            .column(varchar("B", 10).null().build())
            .build()
            .unwrap();

        assert_eq!(
            stmt.sql,
            "CREATE TABLE IF NOT EXISTS t(A INT NOT NULL AUTO_INCREMENT,B VARCHAR(10) NULL,PRIMARY KEY (A))"
        );
        assert!(stmt.args.is_empty());
    }

    #[test]
    fn test_sqlite_inline_primary_key() {
        let stmt = QueryBuilder::new(SqliteDialect::new())
            .create_table("t")
            .column(int("A").not_null().primary_key().build())
            .column(varchar("B", 10).null().build())
            .build()
            .unwrap();

        assert_eq!(
            stmt.sql,
            "CREATE TABLE t(A INTEGER NOT NULL PRIMARY KEY,B TEXT NULL)"
        );
    }

    #[test]
    fn test_composite_primary_key_is_ordered() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .create_table("t")
            .column(int("B").primary_key().build())
            .column(int("A").primary_key().build())
            .build()
            .unwrap();

        assert!(stmt.sql.ends_with("PRIMARY KEY (B,A))"));
    }

    #[test]
    fn test_column_default_rendering() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .create_table("t")
            .column(varchar("A", 5).not_null().default_str("x").build())
            .build()
            .unwrap();

        assert_eq!(stmt.sql, "CREATE TABLE t(A VARCHAR(5) NOT NULL DEFAULT 'x')");
    }
}
