//! Template registry
//!
//! Maps template identifiers (`fields/text`, `_partials/label`, ...) to liquid
//! sources. Sources stack in precedence order, later wins:
//! 1. Built-in templates embedded in the binary
//! 2. Templates loaded from an override directory
//! 3. Templates added programmatically
//!
//! A field binds its template once, at construction, through
//! [`TemplateRegistry::compile`].

use crate::engine::TemplateEngine;
use crate::error::{Result, TemplatingError};
use crate::partials::PartialLoader;
use crate::renderer::LiquidRenderer;
use crate::security::validate_template_security;
use include_dir::{include_dir, Dir};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Extension of template files, both built-in and on disk
pub const TEMPLATE_EXTENSION: &str = "liquid";

static BUILTIN_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/builtin");

/// Where a registered template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// Embedded in the binary
    Builtin,
    /// Loaded from an override directory
    File(PathBuf),
    /// Added in code
    Inline,
}

#[derive(Debug, Clone)]
struct TemplateSource {
    content: String,
    origin: TemplateOrigin,
}

/// Registry of named liquid templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateSource>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in field templates and partials
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let mut stack = vec![&BUILTIN_TEMPLATES];
        while let Some(dir) = stack.pop() {
            stack.extend(dir.dirs());
            for file in dir.files() {
                let Some(name) = template_name(file.path()) else {
                    continue;
                };
                let Some(content) = file.contents_utf8() else {
                    continue;
                };
                registry.insert(name, content.to_string(), TemplateOrigin::Builtin);
            }
        }
        debug!(count = registry.len(), "loaded builtin templates");
        registry
    }

    /// Add or replace a template from a string
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.insert(name.into(), content.into(), TemplateOrigin::Inline);
    }

    /// Load every `*.liquid` file under `dir`, shadowing templates of the same name.
    ///
    /// The template name is the path relative to `dir` without the extension,
    /// with `/` separators: `dir/fields/text.liquid` becomes `fields/text`.
    /// Files are treated as untrusted and must pass the security checks.
    /// Returns the number of templates loaded.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(TemplatingError::Io {
                path: dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "template directory does not exist",
                ),
            });
        }

        let mut loaded = 0;
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.map_err(|e| TemplatingError::Io {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            let Some(name) = template_name(relative) else {
                continue;
            };

            let content = std::fs::read_to_string(path).map_err(|source| TemplatingError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            validate_template_security(&content, false)?;

            trace!(template = %name, path = %path.display(), "loaded override template");
            self.insert(name, content, TemplateOrigin::File(path.to_path_buf()));
            loaded += 1;
        }

        debug!(count = loaded, dir = %dir.display(), "loaded override templates");
        Ok(loaded)
    }

    /// Check if a template is registered
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get the source of a template
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(|t| t.content.as_str())
    }

    /// Where a template came from
    pub fn origin(&self, name: &str) -> Option<&TemplateOrigin> {
        self.templates.get(name).map(|t| &t.origin)
    }

    /// All registered template names, sorted
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse the named template into a renderer.
    ///
    /// Includes inside the template resolve against a snapshot of this
    /// registry taken now. Fails if the name is unknown or the source does not
    /// parse.
    pub fn compile(&self, name: &str) -> Result<LiquidRenderer> {
        let source = self
            .get(name)
            .ok_or_else(|| TemplatingError::TemplateNotFound {
                name: name.to_string(),
            })?;

        let engine = TemplateEngine::with_partials(self.clone())?;
        let template = engine.parse(name, source)?;
        debug!(template = %name, "compiled template");
        Ok(LiquidRenderer::new(name, template))
    }

    fn insert(&mut self, name: String, content: String, origin: TemplateOrigin) {
        self.templates
            .insert(name, TemplateSource { content, origin });
    }
}

impl PartialLoader for TemplateRegistry {
    fn contains(&self, name: &str) -> bool {
        TemplateRegistry::contains(self, name)
    }

    fn names(&self) -> Vec<String> {
        TemplateRegistry::names(self)
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }
}

/// Template name for a relative path, or None if it is not a template file
fn template_name(relative: &Path) -> Option<String> {
    if relative.extension()?.to_str()? != TEMPLATE_EXTENSION {
        return None;
    }
    let stem = relative.with_extension("");
    let parts: Vec<&str> = stem
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
