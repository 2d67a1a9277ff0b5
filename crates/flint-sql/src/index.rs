//! Index definition builder for ALTER TABLE statements.

use crate::ast::IndexSpec;

/// Fluent builder for one index definition.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    name: String,
    columns: Vec<String>,
    unique: bool,
}

impl IndexBuilder {
    /// Creates an index builder for the given index name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique: false,
        }
    }

    /// Appends the columns the index covers, in order.
    #[must_use]
    pub fn on_columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Makes the index enforce uniqueness.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Produces the index spec.
    #[must_use]
    pub fn build(self) -> IndexSpec {
        IndexSpec {
            name: self.name,
            columns: self.columns,
            unique: self.unique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_builder() {
        let spec = IndexBuilder::named("idx_ab")
            .on_columns(["A", "B"])
            .unique()
            .build();
        assert_eq!(spec.name, "idx_ab");
        assert_eq!(spec.columns, ["A", "B"]);
        assert!(spec.unique);
    }

    #[test]
    fn test_index_over_column_builders() {
        let id = crate::column::bigint("ID");
        let spec = IndexBuilder::named("idx_id")
            .on_columns([id.column_name()])
            .build();
        assert_eq!(spec.columns, ["ID"]);
        assert!(!spec.unique);
    }
}
