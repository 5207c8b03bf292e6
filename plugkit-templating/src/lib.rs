//! # plugkit Templating
//!
//! The template renderer behind every plugkit form field and admin page.
//!
//! - [`TemplateRegistry`] holds named liquid sources: the built-in field
//!   templates embedded in the binary plus any override directory.
//! - [`TemplateEngine`] builds liquid parsers wired to a partial source so
//!   templates can `{% include '_partials/label' %}`.
//! - [`TemplateRenderer`] is the set-properties-then-render contract consumed
//!   by fields; [`LiquidRenderer`] is its liquid implementation.
//!
//! ```rust
//! use plugkit_templating::{Properties, TemplateRegistry, TemplateRenderer};
//! use serde_json::json;
//!
//! let mut registry = TemplateRegistry::new();
//! registry.add("greeting", "Hello {{ name }}!");
//!
//! let mut renderer = registry.compile("greeting").unwrap();
//! let mut properties = Properties::new();
//! properties.insert("name".into(), json!("World"));
//! renderer.set_properties(properties);
//! assert_eq!(renderer.render().unwrap(), "Hello World!");
//! ```

pub mod engine;
pub mod error;
pub mod partials;
pub mod registry;
pub mod renderer;
pub mod security;

pub use engine::TemplateEngine;
pub use error::{Result, TemplatingError};
pub use partials::{normalize_partial_name, PartialLoader, PartialLoaderAdapter};
pub use registry::{TemplateOrigin, TemplateRegistry, TEMPLATE_EXTENSION};
pub use renderer::{to_liquid_object, LiquidRenderer, Properties, TemplateRenderer};
pub use security::validate_template_security;
