//! Table expression builders: names, aliases, and join chains.

use crate::ast::{Expr, JoinKind, TableExpr};

/// Types that can act as the row source of a statement.
pub trait IntoTableExpr {
    /// Converts the value into a table expression node.
    fn into_table_expr(self) -> TableExpr;
}

impl IntoTableExpr for TableExpr {
    fn into_table_expr(self) -> TableExpr {
        self
    }
}

impl IntoTableExpr for &str {
    fn into_table_expr(self) -> TableExpr {
        TableExpr::named(self)
    }
}

impl IntoTableExpr for String {
    fn into_table_expr(self) -> TableExpr {
        TableExpr::named(self)
    }
}

/// A table expression under construction.
#[derive(Debug, Clone)]
pub struct Table {
    expr: TableExpr,
}

impl Table {
    /// Starts from a bare table name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            expr: TableExpr::named(name),
        }
    }

    /// Applies an alias to the expression built so far.
    #[must_use]
    pub fn aliased_as(self, alias: impl Into<String>) -> Self {
        Self {
            expr: TableExpr::Alias {
                table: Box::new(self.expr),
                alias: alias.into(),
            },
        }
    }

    /// Starts an inner join against another table expression.
    #[must_use]
    pub fn inner_join(self, other: impl IntoTableExpr) -> JoinBuilder {
        JoinBuilder {
            kind: JoinKind::Inner,
            left: self.expr,
            right: other.into_table_expr(),
        }
    }

    /// Starts a left join against another table expression.
    #[must_use]
    pub fn left_join(self, other: impl IntoTableExpr) -> JoinBuilder {
        JoinBuilder {
            kind: JoinKind::Left,
            left: self.expr,
            right: other.into_table_expr(),
        }
    }
}

impl IntoTableExpr for Table {
    fn into_table_expr(self) -> TableExpr {
        self.expr
    }
}

/// An in-progress join awaiting its ON condition.
#[derive(Debug, Clone)]
pub struct JoinBuilder {
    kind: JoinKind,
    left: TableExpr,
    right: TableExpr,
}

impl JoinBuilder {
    /// Completes the join with an arbitrary ON condition.
    #[must_use]
    pub fn on(self, condition: Expr) -> Table {
        Table {
            expr: TableExpr::Join {
                kind: self.kind,
                left: Box::new(self.left),
                right: Box::new(self.right),
                on: condition,
            },
        }
    }

    /// Completes the join on equality of two columns.
    #[must_use]
    pub fn on_equal_columns(self, left: impl Into<String>, right: impl Into<String>) -> Table {
        let condition = Expr::identifier(left).eq(Expr::identifier(right));
        self.on(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_chain_shape() {
        let table = Table::named("a")
            .inner_join(Table::named("b"))
            .on_equal_columns("a.id", "b.a_id");

        let TableExpr::Join { kind, .. } = table.into_table_expr() else {
            panic!("expected join");
        };
        assert_eq!(kind, JoinKind::Inner);
    }
}
