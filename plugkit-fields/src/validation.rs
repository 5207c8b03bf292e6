//! The error collection threaded through field validators
//!
//! The host creates one collection per submission and every field's validator
//! receives it, appends to it, and hands it back. Entries can only be
//! appended, never removed or edited.

use serde::{Deserialize, Serialize};

/// One validation failure reported by a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Machine-readable code, e.g. `first_name_error`
    pub code: String,
    /// Message shown to the person filling in the form
    pub message: String,
}

/// Ordered, append-only collection of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCollection {
    entries: Vec<ValidationError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure
    pub fn add(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.entries.push(ValidationError {
            code: code.into(),
            message: message.into(),
        });
    }

    /// Append every entry of `other`, keeping order
    pub fn merge(&mut self, other: ErrorCollection) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any entry carries `code`
    pub fn has_code(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Messages recorded under `code`, in insertion order
    pub fn messages_for(&self, code: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.code == code)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Distinct codes in first-seen order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !codes.contains(&entry.code.as_str()) {
                codes.push(&entry.code);
            }
        }
        codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query() {
        let mut errors = ErrorCollection::new();
        assert!(errors.is_empty());

        errors.add("empty_username", "Please enter a username.");
        errors.add("first_name_error", "First name is required.");
        errors.add("empty_username", "Usernames cannot be blank.");

        assert_eq!(errors.len(), 3);
        assert!(errors.has_code("first_name_error"));
        assert!(!errors.has_code("last_name_error"));
        assert_eq!(
            errors.messages_for("empty_username"),
            vec!["Please enter a username.", "Usernames cannot be blank."]
        );
        assert_eq!(errors.codes(), vec!["empty_username", "first_name_error"]);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ErrorCollection::new();
        first.add("a", "first");
        let mut second = ErrorCollection::new();
        second.add("b", "second");

        first.merge(second);
        let codes: Vec<&str> = first.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b"]);
    }
}
