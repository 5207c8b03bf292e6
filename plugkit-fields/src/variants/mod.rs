//! Built-in field variants
//!
//! | kind | template |
//! |---|---|
//! | `text` | `fields/text` |
//! | `email` | `fields/email` |
//! | `textarea` | `fields/textarea` |
//! | `checkbox` | `fields/checkbox` |
//! | `select` | `fields/select` |

mod checkbox;
mod email;
mod select;
mod text;
mod textarea;

pub use checkbox::{CheckboxConfig, CheckboxField};
pub use email::{EmailConfig, EmailField};
pub use select::{SelectConfig, SelectField, SelectOption};
pub use text::{TextConfig, TextField};
pub use textarea::{TextareaConfig, TextareaField};

use crate::validation::ErrorCollection;
use serde::{Deserialize, Serialize};

/// Properties shared by every variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonProps {
    /// Form input name; required
    pub name: String,
    pub label: String,
    /// Current value, refreshed from submissions
    pub value: String,
    pub required: bool,
    pub description: String,
    pub placeholder: String,
    pub css_class: String,
    /// Code reported on failure; `<name>_error` when empty
    pub error_code: String,
    /// Message reported on failure; a variant default when empty
    pub error_message: String,
}

impl CommonProps {
    /// Label for messages, falling back to the input name
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// The code this field reports failures under
    pub fn effective_error_code(&self) -> String {
        if self.error_code.trim().is_empty() {
            format!("{}_error", self.name)
        } else {
            self.error_code.clone()
        }
    }

    /// Trimmed current value
    pub fn trimmed_value(&self) -> &str {
        self.value.trim()
    }

    /// Append one failure, preferring the configured message over `default_message`
    pub fn report(&self, errors: &mut ErrorCollection, default_message: String) {
        let message = if self.error_message.trim().is_empty() {
            default_message
        } else {
            self.error_message.clone()
        };
        errors.add(self.effective_error_code(), message);
    }
}

pub(crate) fn required_message(common: &CommonProps) -> String {
    format!("{} is required.", common.display_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_falls_back_to_name() {
        let common = CommonProps {
            name: "nickname".into(),
            ..Default::default()
        };
        assert_eq!(common.display_label(), "nickname");
    }

    #[test]
    fn test_report_prefers_configured_message() {
        let common = CommonProps {
            name: "nickname".into(),
            error_code: "nick_bad".into(),
            error_message: "Pick a nickname.".into(),
            ..Default::default()
        };
        let mut errors = ErrorCollection::new();
        common.report(&mut errors, "fallback".into());
        assert_eq!(errors.messages_for("nick_bad"), vec!["Pick a nickname."]);
    }

    #[test]
    fn test_report_default_code() {
        let common = CommonProps {
            name: "nickname".into(),
            ..Default::default()
        };
        let mut errors = ErrorCollection::new();
        common.report(&mut errors, "fallback".into());
        assert_eq!(errors.messages_for("nickname_error"), vec!["fallback"]);
    }
}
