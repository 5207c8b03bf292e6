//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery},
    error::ConfigError,
    types::PluginConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use plugkit_common::Pretty;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "PLUGKIT_";

/// Separator for nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Loads [`PluginConfig`] from every source in precedence order.
///
/// Later sources override earlier ones:
/// 1. Defaults
/// 2. Discovered files, global then project
/// 3. Explicit files, in the order they were added
/// 4. `PLUGKIT_` environment variables, nested with `__`
///    (`PLUGKIT_LOGGING__LEVEL=debug`)
///
/// Nothing is cached; every [`load`](Self::load) reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
    files: Vec<PathBuf>,
}

impl ConfigProvider {
    /// Provider over the standard discovery locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that discovers files with `discovery`
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self {
            discovery,
            files: Vec::new(),
        }
    }

    /// Add an explicit configuration file, overriding discovered ones
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Load and extract the configuration.
    ///
    /// Only parsing is checked here; see [`PluginConfig::validate`].
    pub fn load(&self) -> ConfigResult<PluginConfig> {
        let config: PluginConfig = self.figment()?.extract()?;
        debug!(
            fields = config.fields.len(),
            menus = config.menus.len(),
            "loaded plugin configuration"
        );
        trace!(config = %Pretty(&config), "effective configuration");
        Ok(config)
    }

    /// Build the merged figment
    pub fn figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(PluginConfig::default()));

        for file in self.discovery.discover_all() {
            figment = figment.merge(Self::file_provider(&file));
        }

        for path in &self.files {
            let file = Self::explicit_file(path)?;
            trace!(path = %path.display(), "merging explicit config file");
            figment = figment.merge(Self::file_provider(&file));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR)))
    }

    fn explicit_file(path: &Path) -> ConfigResult<ConfigFile> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        Ok(ConfigFile::new(
            path.to_path_buf(),
            format,
            ConfigScope::Explicit,
        ))
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
            ConfigFormat::Json => Figment::from(Json::file(&file.path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn isolated() -> ConfigProvider {
        let temp_dir = std::env::temp_dir();
        let missing = temp_dir.join("plugkit-config-tests-missing");
        ConfigProvider::with_discovery(FileDiscovery::with_directories(
            Some(missing.clone()),
            Some(missing),
        ))
    }

    #[test]
    fn test_load_explicit_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("acme.toml");
        fs::write(
            &path,
            r#"
[[fields]]
kind = "text"
properties = { name = "first_name", label = "First name", required = true }

[[menus]]
title = "Acme Tools"
styles = [".acme { color: red; }"]

[[menus.pages]]
title = "Overview"
capability = "manage_options"
template = "admin/overview"
"#,
        )
        .unwrap();

        let config = isolated().with_file(&path).load().unwrap();
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].name(), Some("first_name"));
        assert_eq!(config.fields[0].properties["required"], true);
        assert_eq!(config.menus[0].pages[0].template.as_deref(), Some("admin/overview"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base.yaml");
        let local = temp_dir.path().join("local.json");
        fs::write(&base, "logging:\n  level: warn\ntemplates:\n  directory: tpl\n").unwrap();
        fs::write(&local, r#"{ "logging": { "level": "debug" } }"#).unwrap();

        let config = isolated().with_file(&base).with_file(&local).load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.templates.directory, Some(PathBuf::from("tpl")));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = isolated().with_file("/no/such/plugkit.toml").load().unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugkit.ini");
        fs::write(&path, "level=debug").unwrap();

        let err = isolated().with_file(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugkit.toml");
        fs::write(&path, "fields = \"none\"").unwrap();

        let err = isolated().with_file(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
