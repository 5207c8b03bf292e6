//! Registration-form lifecycle hooks
//!
//! The host emits two events around its registration form. [`RegistrationForm`]
//! owns the declared fields and dispatches both events to each of them in
//! declaration order.

use crate::error::Result;
use crate::field::Field;
use crate::validation::ErrorCollection;
use std::collections::HashMap;
use std::io::Write;
use tracing::{debug, warn};

/// Host events the form listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The host is printing its registration form
    RenderRegistrationForm,
    /// The host is collecting errors for a registration submission
    ProcessRegistrationSubmission,
}

impl HostEvent {
    /// Name of the host action this event is emitted under
    pub fn hook_name(self) -> &'static str {
        match self {
            HostEvent::RenderRegistrationForm => "register_form",
            HostEvent::ProcessRegistrationSubmission => "registration_errors",
        }
    }

    /// Look up an event by host action name
    pub fn from_hook_name(name: &str) -> Option<Self> {
        match name {
            "register_form" => Some(HostEvent::RenderRegistrationForm),
            "registration_errors" => Some(HostEvent::ProcessRegistrationSubmission),
            _ => None,
        }
    }
}

/// Submitted form values keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The fields shown on the host's registration form
#[derive(Debug, Default)]
pub struct RegistrationForm {
    fields: Vec<Box<dyn Field>>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Fields render and validate in insertion order.
    pub fn add(&mut self, field: Box<dyn Field>) {
        if self.field(field.name()).is_some() {
            warn!(field = %field.name(), "registration form already has a field with this name");
        }
        debug!(kind = field.kind(), field = %field.name(), "added field to registration form");
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[Box<dyn Field>] {
        &self.fields
    }

    /// First field with the given input name
    pub fn field(&self, name: &str) -> Option<&dyn Field> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Mutable access to the first field with the given input name
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Box<dyn Field>> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Render every field and return the concatenated markup
    pub fn render(&mut self) -> Result<String> {
        let mut markup = String::new();
        for field in &mut self.fields {
            markup.push_str(&field.render()?);
        }
        Ok(markup)
    }

    /// `register_form` handler: write every field to the host output
    pub fn on_render_form(&mut self, out: &mut dyn Write) -> Result<()> {
        for field in &mut self.fields {
            field.on_render_form_event(out)?;
        }
        Ok(())
    }

    /// `registration_errors` handler: thread `errors` through every field
    pub fn on_registration_errors(
        &mut self,
        errors: ErrorCollection,
        login: &str,
        email: &str,
    ) -> ErrorCollection {
        let before = errors.len();
        let errors = self.fields.iter_mut().fold(errors, |errors, field| {
            field.on_validate_submission_event(errors, login, email)
        });
        debug!(
            fields = self.fields.len(),
            added = errors.len() - before,
            "processed registration submission"
        );
        errors
    }

    /// Refresh every field from `submission`, then run
    /// [`on_registration_errors`](Self::on_registration_errors)
    pub fn on_submission(
        &mut self,
        submission: &Submission,
        errors: ErrorCollection,
        login: &str,
        email: &str,
    ) -> ErrorCollection {
        for field in &mut self.fields {
            field.populate(submission);
        }
        self.on_registration_errors(errors, login, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_round_trip() {
        for event in [
            HostEvent::RenderRegistrationForm,
            HostEvent::ProcessRegistrationSubmission,
        ] {
            assert_eq!(HostEvent::from_hook_name(event.hook_name()), Some(event));
        }
        assert_eq!(HostEvent::from_hook_name("admin_menu"), None);
    }

    #[test]
    fn test_submission_from_pairs() {
        let submission: Submission = [("first_name", "Ada"), ("role", "author")]
            .into_iter()
            .collect();
        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get("first_name"), Some("Ada"));
        assert_eq!(submission.get("missing"), None);
    }

    #[test]
    fn test_empty_form_passes_errors_through() {
        let mut form = RegistrationForm::new();
        let mut errors = ErrorCollection::new();
        errors.add("empty_username", "Please enter a username.");

        let errors = form.on_registration_errors(errors, "", "");
        assert_eq!(errors.len(), 1);
        assert_eq!(form.render().unwrap(), "");
    }
}
