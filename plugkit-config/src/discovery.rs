//! Configuration file discovery
//!
//! Looks for `plugkit.{toml,yaml,yml,json}` in the global `~/.plugkit/`
//! directory and the project `./.plugkit/` directory.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the configuration directory, both global and per project
pub const CONFIG_DIR_NAME: &str = ".plugkit";

/// File stem of configuration files
pub const CONFIG_FILE_STEM: &str = "plugkit";

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
    /// Higher values take precedence
    pub priority: u8,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        let priority = scope.priority();
        Self {
            path,
            format,
            scope,
            priority,
        }
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where a configuration file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `~/.plugkit/`
    Global,
    /// `./.plugkit/`
    Project,
    /// Passed by the caller
    Explicit,
}

impl ConfigScope {
    /// Priority for this scope (higher values override lower ones)
    pub fn priority(self) -> u8 {
        match self {
            Self::Global => 10,
            Self::Project => 20,
            Self::Explicit => 30,
        }
    }
}

/// Finds configuration files in the global and project directories
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery that resolves `./.plugkit/` and `~/.plugkit/` when run
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery over fixed directories instead of the standard locations
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest priority first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }
        files.sort_by_key(|f| f.priority);

        debug!(count = files.len(), "discovered configuration files");
        for file in &files {
            trace!(path = %file.path.display(), format = ?file.format, "found config");
        }
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            trace!(dir = %dir.display(), "configuration directory does not exist");
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!(path = %dir.display(), "configuration path exists but is not a directory");
            return Vec::new();
        }

        Self::file_candidates(dir)
            .into_iter()
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| {
                let format = ConfigFormat::from_path(&candidate)?;
                Some(ConfigFile::new(candidate, format, scope))
            })
            .collect()
    }

    fn file_candidates(dir: &Path) -> Vec<PathBuf> {
        ["toml", "yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
            .collect()
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("YML"),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension("json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_config_scope_priority() {
        assert!(ConfigScope::Project.priority() > ConfigScope::Global.priority());
        assert!(ConfigScope::Explicit.priority() > ConfigScope::Project.priority());
    }

    #[test]
    fn test_search_directory_ignores_other_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("plugkit.toml"), "").unwrap();
        fs::write(temp_dir.path().join("plugkit.yaml"), "").unwrap();
        fs::write(temp_dir.path().join("config.toml"), "").unwrap();

        let discovery = FileDiscovery::new();
        let files = discovery.search_directory(temp_dir.path(), ConfigScope::Project);

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.scope == ConfigScope::Project));
        assert_eq!(files[0].format, ConfigFormat::Toml);
        assert_eq!(files[1].format, ConfigFormat::Yaml);
    }

    #[test]
    fn test_search_directory_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let discovery = FileDiscovery::new();
        let files =
            discovery.search_directory(&temp_dir.path().join("missing"), ConfigScope::Global);
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_priority_ordering() {
        let temp_dir = TempDir::new().unwrap();
        let global_dir = temp_dir.path().join("global");
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&global_dir).unwrap();
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(global_dir.join("plugkit.toml"), "").unwrap();
        fs::write(project_dir.join("plugkit.json"), "{}").unwrap();

        let discovery = FileDiscovery::with_directories(Some(project_dir), Some(global_dir));
        let files = discovery.discover_all();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].scope, ConfigScope::Global);
        assert_eq!(files[1].scope, ConfigScope::Project);
    }
}
