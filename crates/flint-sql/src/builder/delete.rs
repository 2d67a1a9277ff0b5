//! DELETE statement builder.

use crate::ast::{Delete, Expr, Limit, NodeRef, TableExpr, Where};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::Result;
use crate::filter::{self, Filter};
use crate::statement::Statement;

/// Builds a DELETE statement.
#[derive(Debug, Clone)]
pub struct DeleteBuilder<D> {
    dialect: D,
    table: TableExpr,
    filter: Option<Filter>,
    limit: Option<u32>,
}

impl<D: Dialect> DeleteBuilder<D> {
    pub(crate) fn new(dialect: D, table: TableExpr) -> Self {
        Self {
            dialect,
            table,
            filter: None,
            limit: None,
        }
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

    /// Sets the row limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Assembles the statement node and renders it.
    pub fn build(self) -> Result<Statement> {
        let mut node = Delete {
            from: self.table,
            where_clause: None,
            order_by: None,
            limit: None,
        };
        if let Some(f) = self.filter {
            node.where_clause = Some(Where {
                expr: f.into_expr()?,
            });
        }
        if let Some(limit) = self.limit {
            node.limit = Some(Limit {
                offset: None,
                count: Expr::Integer(i64::from(limit)),
            });
        }

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::Delete(&node));
        Ok(w.into_statement())
    }
}
