//! Single-line text input

use super::{required_message, CommonProps};
use crate::error::{FieldsError, Result};
use crate::field::FieldVariant;
use crate::validation::ErrorCollection;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Properties of a text field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    #[serde(flatten)]
    pub common: CommonProps,
    /// Minimum length in characters of a non-empty value
    pub min_length: Option<u32>,
    /// Maximum length in characters
    pub max_length: Option<u32>,
    /// Regex the whole value must match; empty for none
    pub pattern: String,
}

/// The `text` variant
pub struct TextField;

fn anchored(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

fn failure(config: &TextConfig) -> Option<String> {
    let common = &config.common;
    let value = common.trimmed_value();
    let label = common.display_label();

    if value.is_empty() {
        return common.required.then(|| required_message(common));
    }

    let length = value.chars().count() as u32;
    if let Some(min) = config.min_length {
        if length < min {
            return Some(format!("{label} must be at least {min} characters."));
        }
    }
    if let Some(max) = config.max_length {
        if length > max {
            return Some(format!("{label} must be at most {max} characters."));
        }
    }
    if !config.pattern.is_empty() {
        let matches = anchored(&config.pattern)
            .map(|re| re.is_match(value))
            .unwrap_or(false);
        if !matches {
            return Some(format!("{label} is not in the expected format."));
        }
    }
    None
}

impl FieldVariant for TextField {
    type Config = TextConfig;

    const KIND: &'static str = "text";
    const TEMPLATE: &'static str = "fields/text";

    fn defaults() -> TextConfig {
        TextConfig::default()
    }

    fn common(config: &TextConfig) -> &CommonProps {
        &config.common
    }

    fn check_config(config: &TextConfig) -> Result<()> {
        if !config.pattern.is_empty() {
            anchored(&config.pattern).map_err(|e| FieldsError::InvalidProperty {
                kind: Self::KIND.to_string(),
                message: format!("pattern: {e}"),
            })?;
        }
        if let (Some(min), Some(max)) = (config.min_length, config.max_length) {
            if min > max {
                return Err(FieldsError::InvalidProperty {
                    kind: Self::KIND.to_string(),
                    message: format!("min_length {min} exceeds max_length {max}"),
                });
            }
        }
        Ok(())
    }

    fn validate(config: &TextConfig) -> bool {
        failure(config).is_none()
    }

    fn on_error(config: &TextConfig, errors: &mut ErrorCollection) {
        if let Some(message) = failure(config) {
            config.common.report(errors, message);
        }
    }

    fn populate(config: &mut TextConfig, submitted: Option<&str>) {
        config.common.value = submitted.unwrap_or_default().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(value: &str) -> TextConfig {
        TextConfig {
            common: CommonProps {
                name: "first_name".into(),
                label: "First name".into(),
                value: value.into(),
                required: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_required_blank_fails() {
        assert!(!TextField::validate(&config("   ")));

        let mut errors = ErrorCollection::new();
        TextField::on_error(&config(""), &mut errors);
        assert_eq!(
            errors.messages_for("first_name_error"),
            vec!["First name is required."]
        );
    }

    #[test]
    fn test_optional_blank_passes() {
        let mut c = config("");
        c.common.required = false;
        c.min_length = Some(3);
        assert!(TextField::validate(&c));
    }

    #[test]
    fn test_length_bounds() {
        let mut c = config("Al");
        c.min_length = Some(3);
        assert!(!TextField::validate(&c));

        let mut c = config("Bartholomew");
        c.max_length = Some(5);
        assert!(!TextField::validate(&c));

        let mut c = config("Ada");
        c.min_length = Some(3);
        c.max_length = Some(5);
        assert!(TextField::validate(&c));
    }

    #[test]
    fn test_pattern_is_anchored() {
        let mut c = config("abc123");
        c.pattern = "[a-z]+".into();
        assert!(!TextField::validate(&c));

        c.common.value = "abc".into();
        assert!(TextField::validate(&c));
    }

    #[test]
    fn test_check_config_rejects_bad_pattern() {
        let mut c = config("x");
        c.pattern = "([a-z".into();
        assert!(TextField::check_config(&c).is_err());
    }

    #[test]
    fn test_check_config_rejects_inverted_bounds() {
        let mut c = config("x");
        c.min_length = Some(10);
        c.max_length = Some(2);
        assert!(TextField::check_config(&c).is_err());
    }

    #[test]
    fn test_populate_missing_value_clears() {
        let mut c = config("old");
        TextField::populate(&mut c, None);
        assert_eq!(c.common.value, "");
        TextField::populate(&mut c, Some("new"));
        assert_eq!(c.common.value, "new");
    }
}
