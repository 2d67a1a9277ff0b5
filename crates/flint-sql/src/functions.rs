//! Aggregate function helpers.

use crate::ast::Expr;

/// `COUNT(*)`
#[must_use]
pub fn count_all() -> Expr {
    Expr::Function {
        name: String::from("COUNT"),
        args: vec![Expr::Star],
    }
}

/// `COUNT(column)`
#[must_use]
pub fn count(column: impl Into<String>) -> Expr {
    Expr::Function {
        name: String::from("COUNT"),
        args: vec![Expr::identifier(column)],
    }
}

/// `COUNT(DISTINCT column)`
#[must_use]
pub fn count_distinct(column: impl Into<String>) -> Expr {
    Expr::Function {
        name: String::from("COUNT"),
        args: vec![Expr::Distinct(vec![Expr::identifier(column)])],
    }
}
