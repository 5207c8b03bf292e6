//! Drop-down select

use super::{required_message, CommonProps};
use crate::field::FieldVariant;
use crate::validation::ErrorCollection;
use serde::{Deserialize, Serialize};

/// One choice in a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    /// Text shown for the option; the value when absent
    #[serde(default)]
    pub label: Option<String>,
}

/// Properties of a select field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    #[serde(flatten)]
    pub common: CommonProps,
    pub options: Vec<SelectOption>,
}

/// The `select` variant
pub struct SelectField;

fn failure(config: &SelectConfig) -> Option<String> {
    let common = &config.common;
    let value = common.trimmed_value();

    if value.is_empty() {
        return common.required.then(|| required_message(common));
    }
    if !config.options.iter().any(|o| o.value == value) {
        return Some(format!(
            "Please choose a valid option for {}.",
            common.display_label()
        ));
    }
    None
}

impl FieldVariant for SelectField {
    type Config = SelectConfig;

    const KIND: &'static str = "select";
    const TEMPLATE: &'static str = "fields/select";

    fn defaults() -> SelectConfig {
        SelectConfig::default()
    }

    fn common(config: &SelectConfig) -> &CommonProps {
        &config.common
    }

    fn validate(config: &SelectConfig) -> bool {
        failure(config).is_none()
    }

    fn on_error(config: &SelectConfig, errors: &mut ErrorCollection) {
        if let Some(message) = failure(config) {
            config.common.report(errors, message);
        }
    }

    fn populate(config: &mut SelectConfig, submitted: Option<&str>) {
        config.common.value = submitted.unwrap_or_default().to_string();
    }
}
