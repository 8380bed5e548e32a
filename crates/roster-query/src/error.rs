//! Error types for the roster-query crate.

use thiserror::Error;

/// Errors that can occur when sorting a record set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A sort rule names a field with no registered comparator.
    #[error("no comparator registered for sort field '{0}'")]
    UnknownField(String),
}

/// Result type for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;
