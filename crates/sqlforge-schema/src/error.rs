//! Error types for schema value construction.

use crate::constraint::ConstraintKind;

/// Errors that can occur when building schema values.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A constraint was declared with no columns.
    #[error("{kind} constraint requires at least one column")]
    EmptyColumns {
        /// The kind of constraint being constructed.
        kind: ConstraintKind,
    },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
