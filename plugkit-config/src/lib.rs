//! Plugin configuration management using Figment
//!
//! This crate loads a plugin's declared fields, admin menus, assets and
//! template settings from layered sources with a clear precedence order.
//!
//! # Configuration Files
//!
//! Files are discovered in these locations:
//!
//! - Global: `~/.plugkit/plugkit.{toml,yaml,yml,json}`
//! - Project: `./.plugkit/plugkit.{toml,yaml,yml,json}`
//!
//! Explicit files passed to [`ConfigProvider::with_file`] override both, and
//! `PLUGKIT_` environment variables override everything
//! (`PLUGKIT_TEMPLATES__DIRECTORY=./templates`).
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [[fields]]
//! kind = "text"
//! properties = { name = "first_name", label = "First name", required = true }
//!
//! [[fields]]
//! kind = "checkbox"
//! properties = { name = "accept_terms", label = "I accept the terms", required = true }
//!
//! [[menus]]
//! title = "Acme Tools"
//! icon = "dashicons-admin-tools"
//!
//! [[menus.pages]]
//! title = "Overview"
//! capability = "manage_options"
//! template = "admin/overview"
//!
//! [[assets.scripts.register]]
//! handle = "acme-admin"
//! src = "/assets/admin.js"
//! facing = ["admin"]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use plugkit_config::load_configuration;
//!
//! let config = load_configuration()?;
//! config.validate(&["text", "checkbox"])?;
//! println!("{} fields declared", config.fields.len());
//! # Ok::<(), plugkit_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX, ENV_SEPARATOR};
pub use types::{
    FieldDeclaration, LoggingSettings, MenuDeclaration, PageDeclaration, PluginConfig,
    TemplateSettings,
};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configuration from the standard locations and the environment
pub fn load_configuration() -> ConfigResult<PluginConfig> {
    ConfigProvider::new().load()
}
