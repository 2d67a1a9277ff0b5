//! Expression AST types.

use crate::value::{ToValue, Value};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Equality (`=`).
    Eq,
    /// Inequality (`!=`).
    NotEq,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    GtEq,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    LtEq,
    /// Membership (`IN`).
    In,
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
}

impl BinaryOp {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::In => "IN",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Postfix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `IS NULL`
    IsNull,
    /// `IS NOT NULL`
    IsNotNull,
}

impl UnaryOp {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }
}

/// A value-producing SQL fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare identifier (column or table name).
    Identifier(String),

    /// A qualified field reference (`qualifier.field`).
    Selector {
        /// The qualifier (table name or alias).
        qualifier: String,
        /// The field name.
        field: String,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A postfix unary expression (`expr IS NULL`).
    Unary {
        /// Operand.
        expr: Box<Expr>,
        /// Operator.
        op: UnaryOp,
    },

    /// A function call.
    Function {
        /// The function name.
        name: String,
        /// The arguments.
        args: Vec<Expr>,
    },

    /// A `DISTINCT` wrapper around one or more expressions.
    Distinct(Vec<Expr>),

    /// A parenthesized value list, as used by `IN (...)` and `VALUES (...)`.
    Tuple(Vec<Expr>),

    /// A parenthesized sub-expression, preserving boolean grouping.
    Paren(Box<Expr>),

    /// A `?` placeholder carrying the runtime value it binds.
    Placeholder(Value),

    /// An integer literal rendered inline.
    Integer(i64),

    /// A string literal rendered inline.
    Str(String),

    /// The NULL literal.
    Null,

    /// The `*` literal.
    Star,

    /// An aliased expression (`expr AS name`).
    Alias {
        /// The aliased expression.
        expr: Box<Expr>,
        /// The alias name.
        alias: String,
    },
}

impl Expr {
    /// Creates a bare identifier.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a qualified field reference.
    #[must_use]
    pub fn selector(qualifier: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Selector {
            qualifier: qualifier.into(),
            field: field.into(),
        }
    }

    /// Creates a placeholder bound to `value`.
    #[must_use]
    pub fn placeholder(value: impl ToValue) -> Self {
        Self::Placeholder(value.to_value())
    }

    /// Creates a binary expression with `self` as the left operand.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::Unary {
            expr: Box::new(self),
            op: UnaryOp::IsNull,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::Unary {
            expr: Box::new(self),
            op: UnaryOp::IsNotNull,
        }
    }

    /// Creates an IN expression over a tuple of values.
    #[must_use]
    pub fn in_tuple(self, values: Vec<Self>) -> Self {
        self.binary(BinaryOp::In, Self::Tuple(values))
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn parenthesized(self) -> Self {
        Self::Paren(Box::new(self))
    }

    /// Creates an aliased expression.
    #[must_use]
    pub fn aliased_as(self, alias: impl Into<String>) -> Self {
        Self::Alias {
            expr: Box::new(self),
            alias: alias.into(),
        }
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Identifier(String::from(name))
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::Identifier(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_spelling() {
        assert_eq!(BinaryOp::Eq.as_str(), "=");
        assert_eq!(BinaryOp::GtEq.as_str(), ">=");
        assert_eq!(BinaryOp::In.as_str(), "IN");
    }

    #[test]
    fn test_expr_chaining() {
        let expr = Expr::identifier("A")
            .eq(Expr::placeholder(1_i64))
            .and(Expr::identifier("B").is_null());

        assert!(matches!(
            expr,
            Expr::Binary {
                op: BinaryOp::And,
                ..
            }
        ));
    }
}
