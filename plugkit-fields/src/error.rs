//! Error types for field construction and rendering

use plugkit_common::{ErrorSeverity, Severity};
use plugkit_templating::TemplatingError;
use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building or rendering fields.
///
/// Failed validation of submitted values is not an error; it is reported
/// through [`ErrorCollection`](crate::ErrorCollection).
#[derive(Debug, Error)]
pub enum FieldsError {
    /// A configuration value does not fit the declared type
    #[error("invalid configuration for {kind} field: {message}")]
    InvalidProperty { kind: String, message: String },

    /// Attempt to set a property the field was not constructed with
    #[error("field '{field}' has no property '{key}'")]
    UnknownProperty { field: String, key: String },

    /// No variant registered under this kind
    #[error("unknown field kind: {kind}")]
    UnknownKind { kind: String },

    /// Two variants registered under the same kind
    #[error("field kind already registered: {kind}")]
    DuplicateKind { kind: String },

    /// Template lookup, parsing or rendering failed
    #[error(transparent)]
    Template(#[from] TemplatingError),

    /// Writing rendered markup to the host output failed
    #[error("failed to write field markup: {0}")]
    Io(#[from] std::io::Error),
}

impl Severity for FieldsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FieldsError::InvalidProperty { .. }
            | FieldsError::UnknownKind { .. }
            | FieldsError::DuplicateKind { .. } => ErrorSeverity::Critical,
            FieldsError::UnknownProperty { .. } | FieldsError::Io(_) => ErrorSeverity::Error,
            FieldsError::Template(e) => e.severity(),
        }
    }
}
