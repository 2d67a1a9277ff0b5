//! Statement, clause, and table-expression AST types.

use super::ddl::{ColumnSpec, IndexSpec, PrimaryKey};
use super::expr::Expr;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction.
    pub direction: OrderDirection,
}

/// An ORDER BY clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The ordered list of entries.
    pub orders: Vec<Order>,
}

/// A WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    /// The boolean expression.
    pub expr: Expr,
}

/// A LIMIT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// Optional offset, rendered before the count.
    pub offset: Option<Expr>,
    /// The row count.
    pub count: Expr,
}

/// A row-locking clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    /// Shared lock (`FOR SHARE` where supported).
    Shared,
    /// Exclusive lock (`FOR UPDATE` where supported).
    ForUpdate,
}

/// Join kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
}

impl JoinKind {
    /// Returns the SQL spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
        }
    }
}

/// A source of rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableExpr {
    /// A table name, optionally qualified by a database name.
    Name {
        /// The database qualifier.
        database: Option<String>,
        /// The table name.
        name: String,
    },
    /// Two table expressions joined on a condition.
    Join {
        /// The join kind.
        kind: JoinKind,
        /// Left side.
        left: Box<TableExpr>,
        /// Right side.
        right: Box<TableExpr>,
        /// The ON condition.
        on: Expr,
    },
    /// An aliased table expression.
    Alias {
        /// The underlying table expression.
        table: Box<TableExpr>,
        /// The alias name.
        alias: String,
    },
}

impl TableExpr {
    /// Creates an unqualified table name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name {
            database: None,
            name: name.into(),
        }
    }
}

/// What an upsert does with one field of the rejected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Keep the existing row's value.
    KeepExisting,
    /// Replace it with the value from the incoming row.
    TakeNew,
}

/// One field assignment in a conflict clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictUpdate {
    /// The field being assigned.
    pub field: String,
    /// The action applied to it.
    pub action: ConflictAction,
}

/// The conflict-resolution clause of an insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictClause {
    /// The columns of the uniqueness constraint that may be violated.
    pub key: Vec<String>,
    /// The per-field assignments.
    pub updates: Vec<ConflictUpdate>,
}

impl ConflictClause {
    /// Returns true when every update keeps the existing value.
    #[must_use]
    pub fn all_keep_existing(&self) -> bool {
        self.updates
            .iter()
            .all(|u| u.action == ConflictAction::KeepExisting)
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The output expressions.
    pub exprs: Vec<Expr>,
    /// The FROM clause.
    pub from: TableExpr,
    /// The WHERE clause.
    pub where_clause: Option<Where>,
    /// The ORDER BY clause.
    pub order_by: Option<OrderBy>,
    /// The LIMIT clause.
    pub limit: Option<Limit>,
    /// The row-locking clause.
    pub lock: Option<Lock>,
}

impl Select {
    /// Creates a SELECT over `from` with the given output expressions.
    #[must_use]
    pub fn new(from: TableExpr, exprs: Vec<Expr>) -> Self {
        Self {
            exprs,
            from,
            where_clause: None,
            order_by: None,
            limit: None,
            lock: None,
        }
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// The target table.
    pub into: TableExpr,
    /// The column names, in insertion order.
    pub columns: Vec<String>,
    /// One tuple of expressions per row.
    pub rows: Vec<Vec<Expr>>,
    /// The conflict-resolution clause.
    pub conflict: Option<ConflictClause>,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// The target table.
    pub table: TableExpr,
    /// The SET assignments, each a `field = expr` binary expression.
    pub assignments: Vec<Expr>,
    /// The WHERE clause.
    pub where_clause: Option<Where>,
    /// The ORDER BY clause.
    pub order_by: Option<OrderBy>,
    /// The LIMIT clause.
    pub limit: Option<Limit>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// The target table.
    pub from: TableExpr,
    /// The WHERE clause.
    pub where_clause: Option<Where>,
    /// The ORDER BY clause.
    pub order_by: Option<OrderBy>,
    /// The LIMIT clause.
    pub limit: Option<Limit>,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// The table name.
    pub name: String,
    /// Whether to render `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// The column definitions.
    pub columns: Vec<ColumnSpec>,
    /// The primary key, derived from the column flags.
    pub primary_key: Option<PrimaryKey>,
}

impl CreateTable {
    /// Creates an empty CREATE TABLE for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_not_exists: false,
            columns: Vec::new(),
            primary_key: None,
        }
    }

    /// Adds a column, extending the derived primary key when the column is
    /// flagged as part of it.
    pub fn add_column(&mut self, spec: ColumnSpec) {
        if spec.primary_key {
            self.primary_key
                .get_or_insert_with(PrimaryKey::default)
                .columns
                .push(spec.name.clone());
        }
        self.columns.push(spec);
    }
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// The table name.
    pub name: String,
    /// Columns to add.
    pub add_columns: Vec<ColumnSpec>,
    /// Indices to add.
    pub add_indices: Vec<IndexSpec>,
}

impl AlterTable {
    /// Creates an empty ALTER TABLE for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            add_columns: Vec::new(),
            add_indices: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ddl::{ColumnType, Nullability};

    #[test]
    fn test_primary_key_derivation() {
        let mut ct = CreateTable::new("t");
        ct.add_column(ColumnSpec {
            name: String::from("A"),
            column_type: ColumnType::Int,
            nullability: Nullability::NotNull,
            default: None,
            auto_increment: false,
            primary_key: true,
        });
        ct.add_column(ColumnSpec {
            name: String::from("B"),
            column_type: ColumnType::VarChar(10),
            nullability: Nullability::Null,
            default: None,
            auto_increment: false,
            primary_key: false,
        });

        let pk = ct.primary_key.expect("primary key should be derived");
        assert_eq!(pk.columns, vec![String::from("A")]);
    }

    #[test]
    fn test_all_keep_existing() {
        let clause = ConflictClause {
            key: vec![String::from("ID")],
            updates: vec![
                ConflictUpdate {
                    field: String::from("ID"),
                    action: ConflictAction::KeepExisting,
                },
                ConflictUpdate {
                    field: String::from("V"),
                    action: ConflictAction::TakeNew,
                },
            ],
        };
        assert!(!clause.all_keep_existing());
    }
}
