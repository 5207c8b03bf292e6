//! Field factory keyed by variant kind

use crate::error::{FieldsError, Result};
use crate::field::{Field, FieldVariant, FormField};
use crate::variants::{CheckboxField, EmailField, SelectField, TextField, TextareaField};
use plugkit_templating::{Properties, TemplateRegistry};
use std::collections::BTreeMap;
use tracing::debug;

type Constructor = fn(&Properties, &TemplateRegistry) -> Result<Box<dyn Field>>;

fn construct<V: FieldVariant>(
    overrides: &Properties,
    templates: &TemplateRegistry,
) -> Result<Box<dyn Field>> {
    Ok(Box::new(FormField::<V>::new(overrides, templates)?))
}

/// Builds fields from a kind name and configuration overrides
///
/// ```rust
/// use plugkit_fields::FieldFactory;
/// use plugkit_templating::TemplateRegistry;
/// use serde_json::json;
///
/// let factory = FieldFactory::with_builtins();
/// let templates = TemplateRegistry::with_builtins();
/// let overrides = json!({ "name": "first_name", "label": "First name" });
///
/// let field = factory
///     .create("text", overrides.as_object().unwrap(), &templates)
///     .unwrap();
/// assert_eq!(field.name(), "first_name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldFactory {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl FieldFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with every built-in variant registered
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.constructors.insert(TextField::KIND, construct::<TextField>);
        factory.constructors.insert(EmailField::KIND, construct::<EmailField>);
        factory
            .constructors
            .insert(TextareaField::KIND, construct::<TextareaField>);
        factory
            .constructors
            .insert(CheckboxField::KIND, construct::<CheckboxField>);
        factory
            .constructors
            .insert(SelectField::KIND, construct::<SelectField>);
        factory
    }

    /// Register a variant. Fails if its kind is already taken.
    pub fn register<V: FieldVariant>(&mut self) -> Result<()> {
        if self.constructors.contains_key(V::KIND) {
            return Err(FieldsError::DuplicateKind {
                kind: V::KIND.to_string(),
            });
        }
        self.constructors.insert(V::KIND, construct::<V>);
        debug!(kind = V::KIND, template = V::TEMPLATE, "registered field variant");
        Ok(())
    }

    /// Whether `kind` is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Construct a field of `kind`
    pub fn create(
        &self,
        kind: &str,
        overrides: &Properties,
        templates: &TemplateRegistry,
    ) -> Result<Box<dyn Field>> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| FieldsError::UnknownKind {
                kind: kind.to_string(),
            })?;
        constructor(overrides, templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorCollection;
    use crate::variants::{CommonProps, TextConfig};
    use serde_json::json;

    struct NicknameField;

    impl FieldVariant for NicknameField {
        type Config = TextConfig;
        const KIND: &'static str = "nickname";
        const TEMPLATE: &'static str = "fields/text";

        fn defaults() -> TextConfig {
            TextConfig {
                common: CommonProps {
                    name: "nickname".into(),
                    label: "Nickname".into(),
                    ..Default::default()
                },
                max_length: Some(20),
                ..Default::default()
            }
        }

        fn common(config: &TextConfig) -> &CommonProps {
            &config.common
        }

        fn validate(config: &TextConfig) -> bool {
            !config.common.value.contains(' ')
        }

        fn on_error(config: &TextConfig, errors: &mut ErrorCollection) {
            config
                .common
                .report(errors, "Nicknames cannot contain spaces.".into());
        }

        fn populate(config: &mut TextConfig, submitted: Option<&str>) {
            config.common.value = submitted.unwrap_or_default().to_string();
        }
    }

    #[test]
    fn test_builtin_kinds() {
        let factory = FieldFactory::with_builtins();
        assert_eq!(
            factory.kinds(),
            vec!["checkbox", "email", "select", "text", "textarea"]
        );
    }

    #[test]
    fn test_unknown_kind() {
        let factory = FieldFactory::with_builtins();
        let err = factory
            .create("rating", &Properties::new(), &TemplateRegistry::with_builtins())
            .unwrap_err();
        assert!(matches!(err, FieldsError::UnknownKind { kind } if kind == "rating"));
    }

    #[test]
    fn test_register_custom_variant() {
        let mut factory = FieldFactory::with_builtins();
        factory.register::<NicknameField>().unwrap();
        assert!(factory.contains("nickname"));

        let field = factory
            .create("nickname", &Properties::new(), &TemplateRegistry::with_builtins())
            .unwrap();
        assert_eq!(field.kind(), "nickname");
        assert_eq!(field.property("max_length"), Some(json!(20)));
    }

    #[test]
    fn test_register_duplicate_kind() {
        let mut factory = FieldFactory::with_builtins();
        factory.register::<NicknameField>().unwrap();
        assert!(matches!(
            factory.register::<NicknameField>(),
            Err(FieldsError::DuplicateKind { .. })
        ));
    }
}
