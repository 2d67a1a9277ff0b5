//! Column definition builders for DDL statements.
//!
//! Each constructor fixes the logical type; the builder then layers on
//! nullability, defaults, primary-key membership, and auto-increment before
//! producing a [`ColumnSpec`].

use crate::ast::{ColumnSpec, ColumnType, Expr, Nullability};

/// Fluent builder for one column definition.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    name: String,
    column_type: ColumnType,
    nullability: Nullability,
    default: Option<Expr>,
    auto_increment: bool,
    primary_key: bool,
}

impl ColumnBuilder {
    fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullability: Nullability::Unspecified,
            default: None,
            auto_increment: false,
            primary_key: false,
        }
    }

    /// Marks the column as explicitly nullable.
    #[must_use]
    pub fn null(mut self) -> Self {
        self.nullability = Nullability::Null;
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullability = Nullability::NotNull;
        self
    }

    /// Marks the column as part of the table's primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as auto-incrementing.
    ///
    /// Rendered only by dialects that have an auto-increment keyword.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets an integer default value.
    #[must_use]
    pub fn default_int(mut self, value: i64) -> Self {
        self.default = Some(Expr::Integer(value));
        self
    }

    /// Sets a string default value.
    #[must_use]
    pub fn default_str(mut self, value: impl Into<String>) -> Self {
        self.default = Some(Expr::Str(value.into()));
        self
    }

    /// Sets NULL as the default value.
    #[must_use]
    pub fn default_null(mut self) -> Self {
        self.default = Some(Expr::Null);
        self
    }

    /// Returns the column name, for building indices over columns.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.name
    }

    /// Produces the column spec.
    #[must_use]
    pub fn build(self) -> ColumnSpec {
        ColumnSpec {
            name: self.name,
            column_type: self.column_type,
            nullability: self.nullability,
            default: self.default,
            auto_increment: self.auto_increment,
            primary_key: self.primary_key,
        }
    }
}

/// A 1-byte integer column.
#[must_use]
pub fn tinyint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::TinyInt)
}

/// A 2-byte integer column.
#[must_use]
pub fn smallint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::SmallInt)
}

/// A 4-byte integer column.
#[must_use]
pub fn int(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Int)
}

/// An 8-byte integer column.
#[must_use]
pub fn bigint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::BigInt)
}

/// A fixed-width character column.
#[must_use]
pub fn char(name: impl Into<String>, size: u16) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Char(size))
}

/// A variable-width character column.
#[must_use]
pub fn varchar(name: impl Into<String>, size: u16) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::VarChar(size))
}

/// A text column with the given maximum size.
#[must_use]
pub fn text(name: impl Into<String>, size: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Text(size))
}

/// A small blob column.
#[must_use]
pub fn tinyblob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::TinyBlob)
}

/// A blob column.
#[must_use]
pub fn blob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Blob)
}

/// A medium blob column.
#[must_use]
pub fn mediumblob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::MediumBlob)
}

/// A large blob column.
#[must_use]
pub fn longblob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::LongBlob)
}

/// A date-and-time column.
#[must_use]
pub fn datetime(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::DateTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_flags() {
        let spec = bigint("ID").not_null().primary_key().auto_increment().build();
        assert_eq!(spec.name, "ID");
        assert_eq!(spec.column_type, ColumnType::BigInt);
        assert_eq!(spec.nullability, Nullability::NotNull);
        assert!(spec.primary_key);
        assert!(spec.auto_increment);
        assert!(spec.default.is_none());
    }

    #[test]
    fn test_typed_defaults() {
        let spec = varchar("Name", 64).default_str("anon").build();
        assert_eq!(spec.default, Some(Expr::Str(String::from("anon"))));

        let spec = int("Count").default_int(0).build();
        assert_eq!(spec.default, Some(Expr::Integer(0)));
    }
}
