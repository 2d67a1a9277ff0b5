//! Rendered statement output.

use crate::value::Value;

/// A rendered SQL statement plus its positional arguments.
///
/// The Nth `?` placeholder in [`sql`](Self::sql) corresponds to the Nth entry
/// of [`args`](Self::args).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The SQL text, with `?` placeholders for every bound value.
    pub sql: String,
    /// The positional arguments, in placeholder order.
    pub args: Vec<Value>,
}

impl Statement {
    /// Returns the number of placeholders the statement binds.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}
