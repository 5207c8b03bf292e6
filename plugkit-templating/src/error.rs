//! Error types for template loading and rendering

use plugkit_common::{ErrorSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for templating operations
pub type Result<T> = std::result::Result<T, TemplatingError>;

/// Errors that can occur while loading, parsing or rendering templates
#[derive(Debug, Error)]
pub enum TemplatingError {
    /// No template registered under the requested name
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// The template source is not valid liquid
    #[error("failed to parse template '{name}': {message}")]
    Parse { name: String, message: String },

    /// Rendering failed (unknown variable, bad filter argument, missing partial)
    #[error("failed to render template '{name}': {message}")]
    Render { name: String, message: String },

    /// The template parsed but cannot render the properties it is bound to
    #[error("template '{name}' cannot render its declared properties: {message}")]
    Unrenderable { name: String, message: String },

    /// An override template was rejected by the security checks
    #[error("template security violation: {0}")]
    Security(String),

    /// Template override directory could not be read
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Severity for TemplatingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TemplatingError::TemplateNotFound { .. }
            | TemplatingError::Parse { .. }
            | TemplatingError::Unrenderable { .. }
            | TemplatingError::Security(_)
            | TemplatingError::Io { .. } => ErrorSeverity::Critical,
            TemplatingError::Render { .. } => ErrorSeverity::Error,
        }
    }
}
