//! Email address input

use super::{required_message, CommonProps};
use crate::field::FieldVariant;
use crate::validation::ErrorCollection;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("static email pattern is valid")
});

/// Properties of an email field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    #[serde(flatten)]
    pub common: CommonProps,
}

/// The `email` variant
pub struct EmailField;

fn failure(config: &EmailConfig) -> Option<String> {
    let common = &config.common;
    let value = common.trimmed_value();

    if value.is_empty() {
        return common.required.then(|| required_message(common));
    }
    if !EMAIL_RE.is_match(value) {
        return Some(format!(
            "{} must be a valid email address.",
            common.display_label()
        ));
    }
    None
}

impl FieldVariant for EmailField {
    type Config = EmailConfig;

    const KIND: &'static str = "email";
    const TEMPLATE: &'static str = "fields/email";

    fn defaults() -> EmailConfig {
        EmailConfig {
            common: CommonProps {
                label: "Email".to_string(),
                ..Default::default()
            },
        }
    }

    fn common(config: &EmailConfig) -> &CommonProps {
        &config.common
    }

    fn validate(config: &EmailConfig) -> bool {
        failure(config).is_none()
    }

    fn on_error(config: &EmailConfig, errors: &mut ErrorCollection) {
        if let Some(message) = failure(config) {
            config.common.report(errors, message);
        }
    }

    fn populate(config: &mut EmailConfig, submitted: Option<&str>) {
        config.common.value = submitted.unwrap_or_default().to_string();
    }
}
