//! Error severity shared by the plugkit crates
//!
//! Each crate defines its own `thiserror` enum. This module only provides the
//! classification that lets the host decide how loudly to report a failure.

use std::fmt;

/// Severity levels for error classification
///
/// - **Warning**: something looked odd but the operation completed.
/// - **Error**: one operation failed, the rest of the plugin keeps working
///   (a template failed to render for a single field).
/// - **Critical**: a declaration is broken and the entity was not registered
///   (missing required key, missing template, unknown field kind).
///
/// # Examples
///
/// ```rust
/// use plugkit_common::ErrorSeverity;
///
/// let missing_capability = ErrorSeverity::Critical;
/// assert!(missing_capability > ErrorSeverity::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but the plugin can continue
    Error,

    /// Configuration is broken, the affected entity is not registered
    Critical,
}

impl ErrorSeverity {
    /// The tracing level a failure of this severity should be logged at
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Error | ErrorSeverity::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use plugkit_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MenuError {
///     MissingTitle,
///     DuplicateSlug,
/// }
///
/// impl Severity for MenuError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             MenuError::MissingTitle => ErrorSeverity::Critical,
///             MenuError::DuplicateSlug => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(MenuError::MissingTitle.severity(), ErrorSeverity::Critical);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
