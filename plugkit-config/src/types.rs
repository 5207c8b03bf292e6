//! Plugin configuration data structures

use crate::{ConfigError, ConfigResult};
use plugkit_admin::AssetManifest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Everything a plugin declares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Registration-form fields, in display order
    pub fields: Vec<FieldDeclaration>,
    /// Admin menus, in registration order
    pub menus: Vec<MenuDeclaration>,
    pub assets: AssetManifest,
    pub templates: TemplateSettings,
    pub logging: LoggingSettings,
}

/// One registration-form field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDeclaration {
    /// Variant kind, e.g. `text`
    pub kind: String,
    /// Overrides merged onto the variant's defaults
    pub properties: Map<String, Value>,
}

impl FieldDeclaration {
    /// The `name` property, if it is a non-blank string
    pub fn name(&self) -> Option<&str> {
        self.properties
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }
}

/// One admin menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDeclaration {
    pub title: String,
    pub slug: Option<String>,
    pub icon: Option<String>,
    pub position: Option<u32>,
    /// CSS rules added to the admin pages
    pub styles: Vec<String>,
    pub pages: Vec<PageDeclaration>,
}

/// One page under a menu.
///
/// Missing keys are reported when the page is added to its menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDeclaration {
    pub title: Option<String>,
    pub capability: Option<String>,
    /// Template rendered to produce the page body
    pub template: Option<String>,
    /// Properties passed to the template
    pub properties: Map<String, Value>,
}

/// Where to find templates that shadow the built-ins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory of `*.liquid` files, relative to the working directory
    pub directory: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when `PLUGKIT_LOG` is not set
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl PluginConfig {
    /// Check the configuration against the field kinds the caller can build.
    ///
    /// Fails on the first field with an unknown kind or without a `name`, or
    /// the first menu with an empty title.
    pub fn validate(&self, known_kinds: &[&str]) -> ConfigResult<()> {
        for (index, field) in self.fields.iter().enumerate() {
            if !known_kinds.contains(&field.kind.as_str()) {
                return Err(ConfigError::validation(format!(
                    "fields[{index}]: unknown kind '{}' (expected one of: {})",
                    field.kind,
                    known_kinds.join(", ")
                )));
            }
            if field.name().is_none() {
                return Err(ConfigError::validation(format!(
                    "fields[{index}]: properties.name is required"
                )));
            }
        }

        for (index, menu) in self.menus.iter().enumerate() {
            if menu.title.trim().is_empty() {
                return Err(ConfigError::validation(format!(
                    "menus[{index}]: title is required"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KINDS: &[&str] = &["checkbox", "email", "select", "text", "textarea"];

    fn field(kind: &str, properties: Value) -> FieldDeclaration {
        FieldDeclaration {
            kind: kind.to_string(),
            properties: properties.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert!(config.fields.is_empty());
        assert!(config.assets.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate(KINDS).is_ok());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let config = PluginConfig {
            fields: vec![field("rating", json!({ "name": "stars" }))],
            ..Default::default()
        };
        let err = config.validate(KINDS).unwrap_err();
        assert!(err.to_string().contains("unknown kind 'rating'"));
    }

    #[test]
    fn test_field_without_name_fails() {
        let config = PluginConfig {
            fields: vec![field("text", json!({ "name": "  " }))],
            ..Default::default()
        };
        let err = config.validate(KINDS).unwrap_err();
        assert!(err.to_string().contains("properties.name is required"));
    }

    #[test]
    fn test_empty_menu_title_fails() {
        let config = PluginConfig {
            menus: vec![MenuDeclaration::default()],
            ..Default::default()
        };
        let err = config.validate(KINDS).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
