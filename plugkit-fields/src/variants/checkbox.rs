//! Single checkbox, e.g. "I accept the terms"

use super::CommonProps;
use crate::field::FieldVariant;
use crate::validation::ErrorCollection;
use serde::{Deserialize, Serialize};

/// Properties of a checkbox field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxConfig {
    #[serde(flatten)]
    pub common: CommonProps,
    pub checked: bool,
}

/// The `checkbox` variant
pub struct CheckboxField;

impl FieldVariant for CheckboxField {
    type Config = CheckboxConfig;

    const KIND: &'static str = "checkbox";
    const TEMPLATE: &'static str = "fields/checkbox";

    fn defaults() -> CheckboxConfig {
        CheckboxConfig {
            common: CommonProps {
                value: "1".to_string(),
                ..Default::default()
            },
            checked: false,
        }
    }

    fn common(config: &CheckboxConfig) -> &CommonProps {
        &config.common
    }

    fn validate(config: &CheckboxConfig) -> bool {
        !config.common.required || config.checked
    }

    fn on_error(config: &CheckboxConfig, errors: &mut ErrorCollection) {
        if !Self::validate(config) {
            config.common.report(
                errors,
                format!("You must check \"{}\".", config.common.display_label()),
            );
        }
    }

    /// Browsers omit unchecked boxes from the submission entirely
    fn populate(config: &mut CheckboxConfig, submitted: Option<&str>) {
        config.checked = matches!(submitted, Some(v) if !v.is_empty() && v != "0");
    }
}
