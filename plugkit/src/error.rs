//! Unified error handling for the plugkit facade

use plugkit_admin::AdminError;
use plugkit_common::{ErrorSeverity, Severity};
use plugkit_config::ConfigError;
use plugkit_fields::FieldsError;
use plugkit_templating::TemplatingError;
use thiserror::Error as ThisError;

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Any error raised while building or running a plugin
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum PluginError {
    /// Loading or validating configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Building or rendering a field failed
    #[error("Field error: {0}")]
    Fields(#[from] FieldsError),

    /// Building a menu or applying assets failed
    #[error("Admin error: {0}")]
    Admin(#[from] AdminError),

    /// Loading or compiling a template failed
    #[error("Template error: {0}")]
    Template(#[from] TemplatingError),

    /// A declared entity failed to build; names which one
    #[error("{entity}: {source}")]
    Declaration {
        /// Position in the configuration, e.g. `menus[1].pages[0]`
        entity: String,
        #[source]
        source: Box<PluginError>,
    },
}

impl PluginError {
    /// Attach the configuration path of the entity that failed
    pub fn in_declaration(self, entity: impl Into<String>) -> Self {
        PluginError::Declaration {
            entity: entity.into(),
            source: Box::new(self),
        }
    }
}

impl Severity for PluginError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PluginError::Config(e) => e.severity(),
            PluginError::Fields(e) => e.severity(),
            PluginError::Admin(e) => e.severity(),
            PluginError::Template(e) => e.severity(),
            PluginError::Declaration { source, .. } => source.severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_context() {
        let err = PluginError::from(AdminError::MissingKey {
            entity: "submenu page",
            key: "capability",
        })
        .in_declaration("menus[0].pages[1]");

        assert_eq!(
            err.to_string(),
            "menus[0].pages[1]: Admin error: submenu page configuration is missing required key 'capability'"
        );
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
