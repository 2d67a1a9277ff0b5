//! Conflict-resolution (upsert) model for inserts.

use crate::ast::ConflictAction;

/// The ordered set of columns whose uniqueness constraint may be violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictKey {
    fields: Vec<String>,
}

impl ConflictKey {
    /// Creates a conflict key over the given columns.
    #[must_use]
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the key columns.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// What to do with one field of a row that was rejected by a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Behavior {
    field: String,
    action: ConflictAction,
}

impl Behavior {
    /// Keeps the existing row's value for `field`.
    #[must_use]
    pub fn ignore(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            action: ConflictAction::KeepExisting,
        }
    }

    /// Replaces `field` with the value from the rejected incoming row.
    #[must_use]
    pub fn overwrite(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            action: ConflictAction::TakeNew,
        }
    }

    /// Returns the field this behavior applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the action applied to the field.
    #[must_use]
    pub fn action(&self) -> ConflictAction {
        self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_constructors() {
        assert_eq!(Behavior::ignore("A").action(), ConflictAction::KeepExisting);
        assert_eq!(Behavior::overwrite("A").action(), ConflictAction::TakeNew);
        assert_eq!(Behavior::overwrite("A").field(), "A");
    }

    #[test]
    fn test_key_preserves_order() {
        let key = ConflictKey::new(["B", "A"]);
        assert_eq!(key.fields(), ["B", "A"]);
    }
}
