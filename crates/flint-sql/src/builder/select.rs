//! SELECT statement builder.

use crate::ast::{Expr, Limit, Lock, NodeRef, OrderBy, Select, TableExpr, Where};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::Result;
use crate::filter::{self, Filter, Order};
use crate::statement::Statement;

/// Builds a SELECT statement.
#[derive(Debug, Clone)]
pub struct SelectBuilder<D> {
    dialect: D,
    target: TableExpr,
    fields: Vec<Expr>,
    filter: Option<Filter>,
    order: Option<Order>,
    limit: Option<u32>,
    for_update: bool,
}

impl<D: Dialect> SelectBuilder<D> {
    pub(crate) fn new(dialect: D, target: TableExpr) -> Self {
        Self {
            dialect,
            target,
            fields: Vec::new(),
            filter: None,
            order: None,
            limit: None,
            for_update: false,
        }
    }

    /// Appends bare column names to the output list.
    #[must_use]
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.fields
            .extend(names.iter().map(|name| Expr::identifier(*name)));
        self
    }

    /// Appends arbitrary output expressions.
    #[must_use]
    pub fn fields<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.fields.extend(exprs.into_iter().map(Into::into));
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

    /// Sets the ordering.
    #[must_use]
    pub fn order_by(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the row limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Requests an exclusive row lock where the dialect supports one.
    #[must_use]
    pub const fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    /// Assembles the statement node and renders it.
    pub fn build(self) -> Result<Statement> {
        let mut node = Select::new(self.target, self.fields);

        if let Some(f) = self.filter {
            node.where_clause = Some(Where {
                expr: f.into_expr()?,
            });
        }
        if let Some(order) = self.order {
            node.order_by = Some(OrderBy {
                orders: vec![order.into_ast()],
            });
        }
        if let Some(limit) = self.limit {
            node.limit = Some(Limit {
                offset: None,
                count: Expr::Integer(i64::from(limit)),
            });
        }
        if self.for_update {
            node.lock = Some(Lock::ForUpdate);
        }

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::Select(&node));
        Ok(w.into_statement())
    }
}
