//! UPDATE statement builder.

use crate::ast::{BinaryOp, Expr, NodeRef, TableExpr, Update, Where};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::Result;
use crate::filter::{self, Filter};
use crate::statement::Statement;
use crate::value::{ToValue, Value};

/// Builds an UPDATE statement.
///
/// Assignment arguments precede filter arguments in the rendered statement,
/// in assignment order.
#[derive(Debug, Clone)]
pub struct UpdateBuilder<D> {
    dialect: D,
    table: TableExpr,
    assignments: Vec<(String, Value)>,
    filter: Option<Filter>,
}

impl<D: Dialect> UpdateBuilder<D> {
    pub(crate) fn new(dialect: D, table: TableExpr) -> Self {
        Self {
            dialect,
            table,
            assignments: Vec::new(),
            filter: None,
        }
    }

    /// Appends a `field = ?` assignment.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl ToValue) -> Self {
        self.assignments.push((field.into(), value.to_value()));
        self
    }

    /// Sets the WHERE filter.
    #[must_use]
    pub fn filter(mut self, f: Filter) -> Self {
        self.filter = Some(f);
        self
    }

    /// Sets the WHERE filter to a conjunction of filters.
    #[must_use]
    pub fn filter_all(self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filter(filter::all(filters))
    }

    /// Sets the WHERE filter to a disjunction of filters.
    #[must_use]
    pub fn filter_any(self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filter(filter::any(filters))
    }

    /// Assembles the statement node and renders it.
    pub fn build(self) -> Result<Statement> {
        let assignments = self
            .assignments
            .into_iter()
            .map(|(field, value)| {
                Expr::identifier(field).binary(BinaryOp::Eq, Expr::Placeholder(value))
            })
            .collect();

        let mut node = Update {
            table: self.table,
            assignments,
            where_clause: None,
            order_by: None,
            limit: None,
        };
        if let Some(f) = self.filter {
            node.where_clause = Some(Where {
                expr: f.into_expr()?,
            });
        }

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::Update(&node));
        Ok(w.into_statement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::dialect::MysqlDialect;
    use crate::filter::equals;

    #[test]
    fn test_update_argument_order() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .update("t")
            .set("A", 123_i64)
            .set("B", "foo")
            .filter(equals("ID", 1_i64))
            .build()
            .unwrap();

        assert_eq!(stmt.sql, "UPDATE t SET A = ?,B = ? WHERE (ID = ?)");
        assert_eq!(
            stmt.args,
            vec![
                Value::Int(123),
                Value::Text(String::from("foo")),
                Value::Int(1),
            ]
        );
    }

    #[test]
    fn test_update_without_filter() {
        let stmt = QueryBuilder::new(MysqlDialect::new())
            .update("t")
            .set("A", 1_i64)
            .build()
            .unwrap();

        assert_eq!(stmt.sql, "UPDATE t SET A = ?");
    }
}
