//! The set-properties-then-render contract used by fields

use crate::error::{Result, TemplatingError};
use std::fmt;
use std::sync::Arc;

/// Property bag handed to a template: string keys to JSON-like values
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A compiled template that renders whatever properties it was last given.
///
/// Callers pass the full property snapshot before every render.
pub trait TemplateRenderer: Send + Sync + fmt::Debug {
    /// Name the template was registered under
    fn name(&self) -> &str;

    /// Replace the properties used by the next [`render`](Self::render)
    fn set_properties(&mut self, properties: Properties);

    /// Render the template with the current properties
    fn render(&self) -> Result<String>;

    /// Bind `properties` and render once, discarding the output.
    ///
    /// Includes and variables are only resolved at render time, so this is
    /// how a caller proves a template works before handing it to the host.
    /// A render failure becomes [`TemplatingError::Unrenderable`].
    fn check(&mut self, properties: Properties) -> Result<()> {
        self.set_properties(properties);
        match self.render() {
            Ok(_) => Ok(()),
            Err(TemplatingError::Render { name, message }) => {
                Err(TemplatingError::Unrenderable { name, message })
            }
            Err(e) => Err(e),
        }
    }
}

/// Convert a property bag into the liquid globals object
pub fn to_liquid_object(properties: &Properties) -> liquid::Object {
    let mut globals = liquid::Object::new();
    for (key, value) in properties {
        globals.insert(
            key.clone().into(),
            liquid::model::to_value(value).unwrap_or(liquid::model::Value::Nil),
        );
    }
    globals
}

/// [`TemplateRenderer`] backed by a parsed liquid template
#[derive(Clone)]
pub struct LiquidRenderer {
    name: String,
    template: Arc<liquid::Template>,
    globals: liquid::Object,
}

impl LiquidRenderer {
    /// Wrap a parsed template
    pub fn new(name: impl Into<String>, template: liquid::Template) -> Self {
        Self {
            name: name.into(),
            template: Arc::new(template),
            globals: liquid::Object::new(),
        }
    }
}

impl fmt::Debug for LiquidRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiquidRenderer")
            .field("name", &self.name)
            .field("properties", &self.globals.len())
            .finish()
    }
}

impl TemplateRenderer for LiquidRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_properties(&mut self, properties: Properties) {
        self.globals = to_liquid_object(&properties);
    }

    fn render(&self) -> Result<String> {
        tracing::trace!(template = %self.name, "rendering template");
        self.template
            .render(&self.globals)
            .map_err(|e| TemplatingError::Render {
                name: self.name.clone(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TemplateRegistry;
    use serde_json::json;

    fn renderer(source: &str) -> LiquidRenderer {
        let mut registry = TemplateRegistry::new();
        registry.add("test", source);
        registry.compile("test").unwrap()
    }

    #[test]
    fn test_to_liquid_object() {
        let mut properties = Properties::new();
        properties.insert("name".into(), json!("email"));
        properties.insert("options".into(), json!([{ "value": "a" }]));

        let globals = to_liquid_object(&properties);
        assert_eq!(globals.len(), 2);
        assert!(globals.contains_key("name"));
        assert!(globals.contains_key("options"));
    }

    #[test]
    fn test_render_uses_latest_properties() {
        let mut r = renderer("value={{ value }}");

        let mut first = Properties::new();
        first.insert("value".into(), json!("one"));
        r.set_properties(first);
        assert_eq!(r.render().unwrap(), "value=one");

        let mut second = Properties::new();
        second.insert("value".into(), json!("two"));
        r.set_properties(second);
        assert_eq!(r.render().unwrap(), "value=two");
    }

    #[test]
    fn test_render_unknown_variable_fails() {
        let r = renderer("{{ missing }}");
        let err = r.render().unwrap_err();
        assert!(matches!(err, TemplatingError::Render { ref name, .. } if name == "test"));
    }

    #[test]
    fn test_check_reports_unrenderable_template() {
        let mut r = renderer("{{ label }} {{ missing }}");
        let mut properties = Properties::new();
        properties.insert("label".into(), json!("Name"));

        let err = r.check(properties).unwrap_err();
        assert!(matches!(err, TemplatingError::Unrenderable { ref name, .. } if name == "test"));
    }

    #[test]
    fn test_check_reports_missing_partial() {
        let mut r = renderer("{% include '_partials/nope' %}");
        let err = r.check(Properties::new()).unwrap_err();
        assert!(matches!(err, TemplatingError::Unrenderable { .. }));
    }

    #[test]
    fn test_check_passes_and_keeps_properties() {
        let mut r = renderer("value={{ value }}");
        let mut properties = Properties::new();
        properties.insert("value".into(), json!("one"));

        r.check(properties).unwrap();
        assert_eq!(r.render().unwrap(), "value=one");
    }
}
