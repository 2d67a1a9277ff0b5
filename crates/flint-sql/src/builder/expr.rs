//! Column expression builder for select lists and join conditions.

use crate::ast::Expr;

/// Starts a column expression.
#[must_use]
pub fn column(name: impl Into<String>) -> ColumnExpr {
    ColumnExpr {
        name: name.into(),
        qualifier: None,
        alias: None,
    }
}

/// A column reference, optionally qualified and aliased.
#[derive(Debug, Clone)]
pub struct ColumnExpr {
    name: String,
    qualifier: Option<String>,
    alias: Option<String>,
}

impl ColumnExpr {
    /// Qualifies the column (`qualifier.name`).
    #[must_use]
    pub fn qualified_by(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Aliases the column (`... AS alias`).
    #[must_use]
    pub fn aliased_as(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<ColumnExpr> for Expr {
    fn from(c: ColumnExpr) -> Self {
        let expr = match c.qualifier {
            Some(qualifier) => Expr::selector(qualifier, c.name),
            None => Expr::Identifier(c.name),
        };
        match c.alias {
            Some(alias) => expr.aliased_as(alias),
            None => expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_aliased_column() {
        let expr: Expr = column("Name").qualified_by("u").aliased_as("UserName").into();
        let Expr::Alias { expr, alias } = expr else {
            panic!("expected alias");
        };
        assert_eq!(alias, "UserName");
        assert!(matches!(*expr, Expr::Selector { .. }));
    }
}
