//! Template engine for parsing liquid templates
//!
//! The engine owns a `liquid::Parser` whose `{% include %}` tags resolve
//! through a [`PartialLoader`]. Includes are looked up when a template
//! renders, not when it parses.

use crate::error::{Result, TemplatingError};
use crate::partials::{PartialLoader, PartialLoaderAdapter};

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: liquid::Parser,
}

impl TemplateEngine {
    /// Create a template engine whose includes are served by `loader`
    pub fn with_partials<T: PartialLoader + 'static>(loader: T) -> Result<Self> {
        let adapter = PartialLoaderAdapter::new(loader);
        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(liquid::partials::LazyCompiler::new(adapter))
            .build()
            .map_err(|e| TemplatingError::Parse {
                name: "<parser>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse a template source; `name` is only used for error reporting
    pub fn parse(&self, name: &str, source: &str) -> Result<liquid::Template> {
        self.parser
            .parse(source)
            .map_err(|e| TemplatingError::Parse {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}
