//! Error types for admin menus and assets

use plugkit_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors raised while building menus or applying an asset manifest
#[derive(Debug, Error)]
pub enum AdminError {
    /// A mandatory configuration key is absent or blank
    #[error("{entity} configuration is missing required key '{key}'")]
    MissingKey {
        entity: &'static str,
        key: &'static str,
    },

    /// A title has no letters or digits to derive a slug from
    #[error("{entity} title '{title}' does not yield a slug")]
    EmptySlug { entity: &'static str, title: String },

    /// An asset entry cannot be handed to the host
    #[error("invalid asset '{handle}': {message}")]
    InvalidAsset { handle: String, message: String },
}

impl AdminError {
    /// The missing key, if this is a [`AdminError::MissingKey`]
    pub fn missing_key(&self) -> Option<&'static str> {
        match self {
            AdminError::MissingKey { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl Severity for AdminError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AdminError::MissingKey { .. }
            | AdminError::EmptySlug { .. }
            | AdminError::InvalidAsset { .. } => ErrorSeverity::Critical,
        }
    }
}
