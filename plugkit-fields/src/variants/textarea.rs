//! Multi-line text input

use super::{required_message, CommonProps};
use crate::field::FieldVariant;
use crate::validation::ErrorCollection;
use serde::{Deserialize, Serialize};

/// Properties of a textarea field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextareaConfig {
    #[serde(flatten)]
    pub common: CommonProps,
    /// Visible rows
    pub rows: u32,
    /// Maximum length in characters
    pub max_length: Option<u32>,
}

impl Default for TextareaConfig {
    fn default() -> Self {
        Self {
            common: CommonProps::default(),
            rows: 4,
            max_length: None,
        }
    }
}

/// The `textarea` variant
pub struct TextareaField;

fn failure(config: &TextareaConfig) -> Option<String> {
    let common = &config.common;
    let value = common.trimmed_value();

    if value.is_empty() {
        return common.required.then(|| required_message(common));
    }
    match config.max_length {
        Some(max) if value.chars().count() as u32 > max => Some(format!(
            "{} must be at most {max} characters.",
            common.display_label()
        )),
        _ => None,
    }
}

impl FieldVariant for TextareaField {
    type Config = TextareaConfig;

    const KIND: &'static str = "textarea";
    const TEMPLATE: &'static str = "fields/textarea";

    fn defaults() -> TextareaConfig {
        TextareaConfig::default()
    }

    fn common(config: &TextareaConfig) -> &CommonProps {
        &config.common
    }

    fn validate(config: &TextareaConfig) -> bool {
        failure(config).is_none()
    }

    fn on_error(config: &TextareaConfig, errors: &mut ErrorCollection) {
        if let Some(message) = failure(config) {
            config.common.report(errors, message);
        }
    }

    fn populate(config: &mut TextareaConfig, submitted: Option<&str>) {
        config.common.value = submitted.unwrap_or_default().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length() {
        let mut c = TextareaField::defaults();
        c.common.name = "bio".into();
        c.max_length = Some(10);
        c.common.value = "short".into();
        assert!(TextareaField::validate(&c));

        c.common.value = "far too long for this".into();
        assert!(!TextareaField::validate(&c));

        let mut errors = ErrorCollection::new();
        TextareaField::on_error(&c, &mut errors);
        assert_eq!(
            errors.messages_for("bio_error"),
            vec!["bio must be at most 10 characters."]
        );
    }

    #[test]
    fn test_default_rows() {
        assert_eq!(TextareaField::defaults().rows, 4);
    }
}
