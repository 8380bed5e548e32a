//! Error types for list pages.
//!
//! [`ListError`] is what page events return. Nothing here is retried or
//! rolled back: the page keeps its pagination, filter and sort state so the
//! same request can be issued again.

use std::path::PathBuf;

use roster_query::SortError;
use thiserror::Error;

/// Failure reported by the data-access collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{status} {text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status text as reported by the transport.
        text: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The resource does not offer this operation.
    #[error("operation '{0}' is not supported for this resource")]
    Unsupported(&'static str),
}

/// Errors produced by page events.
#[derive(Debug, Error)]
pub enum ListError {
    /// A required input is missing; nothing was sent to the server.
    #[error("{message}")]
    Validation {
        /// Name of the offending input.
        field: &'static str,
        /// Message to show next to the input.
        message: String,
    },

    /// A fetch or mutation was rejected.
    #[error("{action} failed: {source}")]
    Api {
        /// What the page was doing, e.g. `"fetch roles"`.
        action: String,
        /// The collaborator's error.
        #[source]
        source: ApiError,
    },

    /// A record in a list response did not have the expected shape.
    #[error("malformed {resource} record at index {index}: {source}")]
    DataShape {
        /// Resource the response belongs to.
        resource: &'static str,
        /// Position of the record in the response.
        index: usize,
        /// Decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A sort was requested on a field with no registered comparator.
    #[error(transparent)]
    Sort(#[from] SortError),
}

impl ListError {
    /// Builds a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ListError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if the error was raised locally before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::Validation { .. })
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}", path = .path.display())]
    Load {
        /// Path of the file.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML content could not be parsed.
    #[error("invalid list configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Result type for page events.
pub type Result<T> = std::result::Result<T, ListError>;
