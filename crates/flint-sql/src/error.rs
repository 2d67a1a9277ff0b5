//! Error types for statement building.

/// Errors reported while building a statement.
///
/// All of these are detected before any SQL text is generated; a successful
/// build always yields a complete, internally consistent [`Statement`].
///
/// [`Statement`]: crate::Statement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An insert was built without any fields.
    #[error("must provide fields to insert")]
    EmptyFieldList,

    /// The flat argument list of an insert does not divide evenly into rows.
    #[error("number of arguments ({args}) must be divisible by the number of fields being set ({fields})")]
    ArgumentCountMismatch {
        /// Number of arguments provided.
        args: usize,
        /// Number of fields being set.
        fields: usize,
    },

    /// A batched insert was requested with a batch size of zero.
    #[error("batch size must be greater than 0")]
    InvalidBatchSize,

    /// An `all`/`any` filter group was built without any sub-filters.
    #[error("filter group must contain at least one filter")]
    EmptyFilterGroup,

    /// A conflict behavior references a field outside the insert field list.
    #[error("conflict behavior references unknown field `{0}`")]
    UnknownConflictField(String),

    /// A conflict key with behaviors attached names no columns.
    #[error("conflict key must name at least one column")]
    EmptyConflictKey,
}

/// Result type for statement building.
pub type Result<T> = std::result::Result<T, Error>;
