//! The field contract and its generic implementation
//!
//! [`FieldVariant`] is what a new input kind implements: its default
//! properties, its template, and how it validates and reports failures.
//! [`FormField`] wraps a variant with a property bag and a compiled template
//! and exposes the object-safe [`Field`] trait used by forms and factories.

use crate::error::Result;
use crate::hooks::Submission;
use crate::properties::{declared_properties, PropertyBag};
use crate::validation::ErrorCollection;
use crate::variants::CommonProps;
use plugkit_templating::{Properties, TemplateRegistry, TemplateRenderer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Where a field is in its per-request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// Built from configuration, not yet shown
    Constructed,
    /// Markup produced for the form
    Rendered,
    /// Last validation passed
    Accepted,
    /// Last validation failed and an error was reported
    Rejected,
}

/// One kind of form input.
///
/// Implementations are stateless; all state lives in `Config`.
pub trait FieldVariant: Send + Sync + 'static {
    /// Typed declared properties. Its serialized form is the default table.
    type Config: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync;

    /// Registry key, e.g. `"text"`
    const KIND: &'static str;

    /// Template identifier resolved through the template registry
    const TEMPLATE: &'static str;

    /// Default property values
    fn defaults() -> Self::Config;

    /// The properties every variant shares
    fn common(config: &Self::Config) -> &CommonProps;

    /// Check a merged config for problems that make the field unusable
    fn check_config(_config: &Self::Config) -> Result<()> {
        Ok(())
    }

    /// Whether the current values are acceptable. Must not mutate anything.
    fn validate(config: &Self::Config) -> bool;

    /// Append a message describing why [`validate`](Self::validate) failed
    fn on_error(config: &Self::Config, errors: &mut ErrorCollection);

    /// Copy the submitted value for this field into the config
    fn populate(config: &mut Self::Config, submitted: Option<&str>);
}

/// Object-safe view of a constructed field
pub trait Field: Send + Sync + fmt::Debug {
    /// Variant kind
    fn kind(&self) -> &'static str;

    /// Form input name
    fn name(&self) -> &str;

    /// Lifecycle phase
    fn phase(&self) -> FieldPhase;

    /// The variant's default properties, before overrides
    fn defaults(&self) -> Properties;

    /// Current value of every property, declared and extra
    fn properties(&self) -> Properties;

    /// Current value of one property
    fn property(&self, key: &str) -> Option<Value>;

    /// Replace the value of an existing property
    fn set_property(&mut self, key: &str, value: Value) -> Result<()>;

    /// Refresh the field's value from submitted form data
    fn populate(&mut self, submission: &Submission);

    /// Whether the current values are acceptable
    fn validate(&self) -> bool;

    /// Append this field's failure message to `errors`
    fn on_error(&self, errors: &mut ErrorCollection);

    /// Render the current properties and return the markup
    fn render(&mut self) -> Result<String>;

    /// Render the current properties and write the markup to `out`
    fn write_to(&mut self, out: &mut dyn Write) -> Result<()> {
        let markup = self.render()?;
        out.write_all(markup.as_bytes())?;
        Ok(())
    }

    /// Handler for the host's "render registration form" event
    fn on_render_form_event(&mut self, out: &mut dyn Write) -> Result<()> {
        self.write_to(out)
    }

    /// Handler for the host's "process registration submission" event.
    ///
    /// Validates, appends a failure to `errors` if invalid, and returns the
    /// collection so the host can hand it to the next field.
    fn on_validate_submission_event(
        &mut self,
        errors: ErrorCollection,
        login: &str,
        email: &str,
    ) -> ErrorCollection;
}

/// A field of variant `V` bound to its compiled template
pub struct FormField<V: FieldVariant> {
    properties: PropertyBag<V::Config>,
    renderer: Box<dyn TemplateRenderer>,
    phase: FieldPhase,
    _variant: PhantomData<V>,
}

impl<V: FieldVariant> FormField<V> {
    /// Build a field from configuration overrides.
    ///
    /// Fails if an override has the wrong type, the variant rejects the
    /// config, or `V::TEMPLATE` is not in `templates` or cannot render.
    pub fn new(overrides: &Properties, templates: &TemplateRegistry) -> Result<Self> {
        let renderer = templates.compile(V::TEMPLATE)?;
        Self::with_renderer(overrides, Box::new(renderer))
    }

    /// Build a field that renders through a caller-supplied renderer.
    ///
    /// The template is rendered once against the merged properties, so an
    /// unresolvable include or variable fails here instead of on the first
    /// form render.
    pub fn with_renderer(
        overrides: &Properties,
        mut renderer: Box<dyn TemplateRenderer>,
    ) -> Result<Self> {
        let properties = PropertyBag::merge(V::KIND, V::defaults(), overrides)?;
        V::check_config(properties.config())?;
        renderer.check(properties.snapshot())?;

        debug!(
            kind = V::KIND,
            name = %V::common(properties.config()).name,
            template = renderer.name(),
            extra = properties.extra().len(),
            "constructed field"
        );

        Ok(Self {
            properties,
            renderer,
            phase: FieldPhase::Constructed,
            _variant: PhantomData,
        })
    }

    /// Typed access to the declared properties
    pub fn config(&self) -> &V::Config {
        self.properties.config()
    }
}

impl<V: FieldVariant> fmt::Debug for FormField<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("kind", &V::KIND)
            .field("config", self.properties.config())
            .field("extra", self.properties.extra())
            .field("phase", &self.phase)
            .finish()
    }
}

impl<V: FieldVariant> Field for FormField<V> {
    fn kind(&self) -> &'static str {
        V::KIND
    }

    fn name(&self) -> &str {
        &V::common(self.properties.config()).name
    }

    fn phase(&self) -> FieldPhase {
        self.phase
    }

    fn defaults(&self) -> Properties {
        declared_properties(V::KIND, &V::defaults()).unwrap_or_default()
    }

    fn properties(&self) -> Properties {
        self.properties.snapshot()
    }

    fn property(&self, key: &str) -> Option<Value> {
        self.properties.get(key)
    }

    fn set_property(&mut self, key: &str, value: Value) -> Result<()> {
        let name = self.name().to_string();
        self.properties.set(&name, key, value)
    }

    fn populate(&mut self, submission: &Submission) {
        let name = self.name().to_string();
        let submitted = submission.get(&name);
        trace!(field = %name, present = submitted.is_some(), "populating field");
        V::populate(self.properties.config_mut(), submitted);
    }

    fn validate(&self) -> bool {
        V::validate(self.properties.config())
    }

    fn on_error(&self, errors: &mut ErrorCollection) {
        V::on_error(self.properties.config(), errors);
    }

    fn render(&mut self) -> Result<String> {
        self.renderer.set_properties(self.properties.snapshot());
        let markup = self.renderer.render()?;
        self.phase = FieldPhase::Rendered;
        Ok(markup)
    }

    fn on_validate_submission_event(
        &mut self,
        mut errors: ErrorCollection,
        login: &str,
        email: &str,
    ) -> ErrorCollection {
        if self.phase == FieldPhase::Constructed {
            debug!(field = %self.name(), "validating a field that was not rendered this request");
        }

        if self.validate() {
            self.phase = FieldPhase::Accepted;
        } else {
            self.on_error(&mut errors);
            self.phase = FieldPhase::Rejected;
            debug!(
                field = %self.name(),
                login = %login,
                email = %email,
                errors = errors.len(),
                "field rejected submission"
            );
        }
        errors
    }
}
