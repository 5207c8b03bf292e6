//! # plugkit
//!
//! Declarative registration-form fields, admin menus and assets for CMS
//! plugins.
//!
//! ## Features
//!
//! - **Form fields**: text, email, textarea, checkbox and select inputs that
//!   render through liquid templates and validate submitted values
//! - **Template overrides**: any built-in template can be shadowed from a
//!   directory of `*.liquid` files
//! - **Admin menus**: top-level menus with submenu pages, slugs derived from
//!   titles
//! - **Assets**: scripts and styles enqueued per page context
//! - **Layered configuration**: TOML, YAML or JSON files plus `PLUGKIT_`
//!   environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use plugkit::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = PluginConfig {
//!     fields: vec![FieldDeclaration {
//!         kind: "text".into(),
//!         properties: json!({ "name": "first_name", "label": "First name", "required": true })
//!             .as_object()
//!             .cloned()
//!             .unwrap_or_default(),
//!     }],
//!     ..Default::default()
//! };
//!
//! let mut plugin = Plugin::from_config(&config)?;
//!
//! let mut page = Vec::new();
//! plugin.render_registration_form(&mut page)?;
//! assert!(String::from_utf8(page)?.contains(r#"name="first_name""#));
//!
//! let errors = plugin.process_registration_submission(
//!     &Submission::new(),
//!     ErrorCollection::new(),
//!     "ada",
//!     "ada@example.com",
//! );
//! assert!(errors.has_code("first_name_error"));
//! # Ok(())
//! # }
//! ```

/// Error types used throughout the facade
pub mod error;

/// Plugin assembly and host event handlers
pub mod plugin;

pub use error::{PluginError, Result};
pub use plugin::{init_logging, Plugin};

pub use plugkit_admin as admin;
pub use plugkit_common as common;
pub use plugkit_config as config;
pub use plugkit_fields as fields;
pub use plugkit_templating as templating;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Plugin, PluginError, Result};

    pub use plugkit_admin::{
        AdminHooks, Asset, AssetManifest, AssetQueue, Facing, MenuConfig, MenuEntry, MenuPage,
        Navigation, PageConfig, SubmenuEntry,
    };
    pub use plugkit_common::{ErrorSeverity, Severity};
    pub use plugkit_config::{
        ConfigProvider, FieldDeclaration, MenuDeclaration, PageDeclaration, PluginConfig,
    };
    pub use plugkit_fields::{
        ErrorCollection, Field, FieldFactory, FieldVariant, HostEvent, RegistrationForm,
        Submission,
    };
    pub use plugkit_templating::{TemplateRegistry, TemplateRenderer};
}
