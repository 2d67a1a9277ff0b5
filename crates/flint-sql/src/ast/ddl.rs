//! Column, index, and primary-key AST types for DDL statements.

use super::expr::Expr;

/// The logical type of a column.
///
/// Dialect formatters alone decide the physical type keyword; the same spec
/// renders differently under different dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 1-byte integer.
    TinyInt,
    /// 2-byte integer.
    SmallInt,
    /// 4-byte integer.
    Int,
    /// 8-byte integer.
    BigInt,
    /// Fixed-width character string of the given size.
    Char(u16),
    /// Variable-width character string of the given size.
    VarChar(u16),
    /// Text column with the given maximum size.
    Text(u32),
    /// Small blob.
    TinyBlob,
    /// Blob.
    Blob,
    /// Medium blob.
    MediumBlob,
    /// Large blob.
    LongBlob,
    /// Date and time.
    DateTime,
}

/// Tri-state nullability of a column.
///
/// `Unspecified` renders nothing and leaves the choice to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullability {
    /// No nullability rendered.
    #[default]
    Unspecified,
    /// Explicitly nullable.
    Null,
    /// Explicitly not nullable.
    NotNull,
}

impl Nullability {
    /// Returns the SQL spelling, or `None` when unspecified.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Null => Some("NULL"),
            Self::NotNull => Some("NOT NULL"),
        }
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// The column name.
    pub name: String,
    /// The logical type.
    pub column_type: ColumnType,
    /// Nullability.
    pub nullability: Nullability,
    /// Optional default value expression.
    pub default: Option<Expr>,
    /// Whether the column auto-increments (rendered only where supported).
    pub auto_increment: bool,
    /// Whether the column is part of the table's primary key.
    pub primary_key: bool,
}

impl ColumnSpec {
    /// Creates a column spec with everything unset beyond name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullability: Nullability::Unspecified,
            default: None,
            auto_increment: false,
            primary_key: false,
        }
    }
}

/// A derived primary-key clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimaryKey {
    /// The ordered column names.
    pub columns: Vec<String>,
}

/// An index definition, as added by ALTER TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    /// The index name.
    pub name: String,
    /// The ordered column names.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}
