//! # plugkit Common
//!
//! Foundational types and helpers shared by every plugkit crate.
//!
//! ## Modules
//!
//! - [`error`] - Severity classification implemented by each crate's error type
//! - [`logging`] - Tracing setup and the [`Pretty`] log formatter
//! - [`slug`] - Title to slug normalization used for menu and page identifiers

pub mod error;
pub mod logging;
pub mod slug;

// Re-export error types for convenience
pub use error::{ErrorSeverity, Severity};

// Re-export logging helpers for convenience
pub use logging::{init_tracing, Pretty, LOG_ENV_VAR};

pub use slug::slugify;
