//! Filter composition for WHERE clauses.
//!
//! Filters are pure data until a builder lowers them into an expression tree
//! at build time. Every leaf that carries a value produces exactly one
//! placeholder; argument order follows traversal order of the lowered tree,
//! not the order filters were combined in.

use crate::ast::{BinaryOp, Expr, Order as AstOrder, OrderDirection};
use crate::error::{Error, Result};
use crate::value::{ToValue, Value};

/// A composable boolean condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = ?`
    Equals {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column != ?`
    NotEquals {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column > ?`
    Greater {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column >= ?`
    GreaterOrEqual {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column < ?`
    Less {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column <= ?`
    LessOrEqual {
        /// Column name.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// `column IN (?, ...)`
    In {
        /// Column name.
        column: String,
        /// Bound values, one placeholder each.
        values: Vec<Value>,
    },
    /// `column IS NULL`
    IsNull {
        /// Column name.
        column: String,
    },
    /// `column IS NOT NULL`
    IsNotNull {
        /// Column name.
        column: String,
    },
    /// Conjunction of sub-filters.
    All(Vec<Filter>),
    /// Disjunction of sub-filters.
    Any(Vec<Filter>),
}

/// Creates a `column = ?` filter.
#[must_use]
pub fn equals(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::Equals {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column != ?` filter.
#[must_use]
pub fn not_equals(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::NotEquals {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column > ?` filter.
#[must_use]
pub fn greater(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::Greater {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column >= ?` filter.
#[must_use]
pub fn greater_or_equal(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::GreaterOrEqual {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column < ?` filter.
#[must_use]
pub fn less(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::Less {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column <= ?` filter.
#[must_use]
pub fn less_or_equal(column: impl Into<String>, value: impl ToValue) -> Filter {
    Filter::LessOrEqual {
        column: column.into(),
        value: value.to_value(),
    }
}

/// Creates a `column IN (...)` filter with one placeholder per value.
#[must_use]
pub fn in_list<I>(column: impl Into<String>, values: I) -> Filter
where
    I: IntoIterator,
    I::Item: ToValue,
{
    Filter::In {
        column: column.into(),
        values: values.into_iter().map(ToValue::to_value).collect(),
    }
}

/// Creates a `column IS NULL` filter.
#[must_use]
pub fn is_null(column: impl Into<String>) -> Filter {
    Filter::IsNull {
        column: column.into(),
    }
}

/// Creates a `column IS NOT NULL` filter.
#[must_use]
pub fn is_not_null(column: impl Into<String>) -> Filter {
    Filter::IsNotNull {
        column: column.into(),
    }
}

/// Combines filters so that all of them must hold.
#[must_use]
pub fn all(filters: impl IntoIterator<Item = Filter>) -> Filter {
    Filter::All(filters.into_iter().collect())
}

/// Combines filters so that at least one of them must hold.
#[must_use]
pub fn any(filters: impl IntoIterator<Item = Filter>) -> Filter {
    Filter::Any(filters.into_iter().collect())
}

impl Filter {
    /// Lowers the filter into an expression tree.
    ///
    /// Fails when an `All`/`Any` group contains no sub-filters.
    pub fn into_expr(self) -> Result<Expr> {
        match self {
            Self::Equals { column, value } => Ok(compare(column, BinaryOp::Eq, value)),
            Self::NotEquals { column, value } => Ok(compare(column, BinaryOp::NotEq, value)),
            Self::Greater { column, value } => Ok(compare(column, BinaryOp::Gt, value)),
            Self::GreaterOrEqual { column, value } => Ok(compare(column, BinaryOp::GtEq, value)),
            Self::Less { column, value } => Ok(compare(column, BinaryOp::Lt, value)),
            Self::LessOrEqual { column, value } => Ok(compare(column, BinaryOp::LtEq, value)),
            Self::In { column, values } => Ok(Expr::identifier(column).in_tuple(
                values.into_iter().map(Expr::Placeholder).collect(),
            )),
            Self::IsNull { column } => Ok(Expr::identifier(column).is_null()),
            Self::IsNotNull { column } => Ok(Expr::identifier(column).is_not_null()),
            Self::All(filters) => {
                fold_filters(filters, BinaryOp::And).map(Expr::parenthesized)
            }
            Self::Any(filters) => fold_filters(filters, BinaryOp::Or).map(Expr::parenthesized),
        }
    }
}

fn compare(column: String, op: BinaryOp, value: Value) -> Expr {
    Expr::identifier(column).binary(op, Expr::Placeholder(value))
}

/// Right-folds sub-filters into a chain of binary expressions. The caller
/// parenthesizes the chain so nested groups keep their boolean grouping.
fn fold_filters(filters: Vec<Filter>, op: BinaryOp) -> Result<Expr> {
    let mut iter = filters.into_iter().rev();
    let Some(last) = iter.next() else {
        return Err(Error::EmptyFilterGroup);
    };
    let mut expr = last.into_expr()?;
    for filter in iter {
        expr = filter.into_expr()?.binary(op, expr);
    }
    Ok(expr)
}

/// Sort direction for a query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending.
    Ascending,
    /// Descending.
    Descending,
}

impl Direction {
    pub(crate) const fn to_ast(self) -> OrderDirection {
        match self {
            Self::Ascending => OrderDirection::Asc,
            Self::Descending => OrderDirection::Desc,
        }
    }
}

/// A single-column ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// The column to order by.
    pub column: String,
    /// The direction.
    pub direction: Direction,
}

impl Order {
    pub(crate) fn into_ast(self) -> AstOrder {
        AstOrder {
            expr: Expr::Identifier(self.column),
            direction: self.direction.to_ast(),
        }
    }
}

/// Creates an ascending order on `column`.
#[must_use]
pub fn order_asc(column: impl Into<String>) -> Order {
    Order {
        column: column.into(),
        direction: Direction::Ascending,
    }
}

/// Creates a descending order on `column`.
#[must_use]
pub fn order_desc(column: impl Into<String>) -> Order {
    Order {
        column: column.into(),
        direction: Direction::Descending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::collect_args;

    #[test]
    fn test_leaf_filters_produce_one_placeholder() {
        let expr = equals("A", 1_i64).into_expr().unwrap();
        assert_eq!(collect_args(&expr), vec![Value::Int(1)]);
    }

    #[test]
    fn test_in_produces_one_placeholder_per_value() {
        let expr = in_list("A", [1_i64, 2, 3]).into_expr().unwrap();
        assert_eq!(
            collect_args(&expr),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn test_all_right_folds() {
        let expr = all([equals("A", 1_i64), equals("B", 2_i64), equals("C", 3_i64)])
            .into_expr()
            .unwrap();

        // (A = ? AND (B = ? AND C = ?))
        let Expr::Paren(chain) = expr else {
            panic!("expected parenthesized group");
        };
        let Expr::Binary { op, right, .. } = *chain else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(
            *right,
            Expr::Binary {
                op: BinaryOp::And,
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_group_of_one() {
        let expr = any([is_null("A")]).into_expr().unwrap();
        let Expr::Paren(inner) = expr else {
            panic!("expected parenthesized group");
        };
        assert!(matches!(*inner, Expr::Unary { .. }));
    }

    #[test]
    fn test_empty_group_is_an_error() {
        assert_eq!(all([]).into_expr(), Err(Error::EmptyFilterGroup));
        assert_eq!(any([]).into_expr(), Err(Error::EmptyFilterGroup));
    }

    #[test]
    fn test_argument_order_follows_traversal() {
        let expr = all([
            in_list("A", [1_i64, 2, 3]),
            any([equals("B", "abc"), equals("B", "def")]),
        ])
        .into_expr()
        .unwrap();

        assert_eq!(
            collect_args(&expr),
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Text(String::from("abc")),
                Value::Text(String::from("def")),
            ]
        );
    }
}
