//! Property bag: typed declared properties plus untyped extras
//!
//! A field's declared properties live in its variant's config struct. Keys the
//! caller supplies that the struct does not declare are kept in a side map and
//! still reach the template. The set of keys is fixed once the bag is built.

use crate::error::{FieldsError, Result};
use plugkit_templating::Properties;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Declared config of type `C` plus extra template-only properties
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBag<C> {
    kind: &'static str,
    config: C,
    extra: Properties,
}

impl<C> PropertyBag<C>
where
    C: Serialize + DeserializeOwned,
{
    /// Merge `overrides` onto `defaults`.
    ///
    /// Keys present in the defaults are replaced (override wins) and must fit
    /// the declared type. Keys absent from the defaults become extras.
    pub fn merge(kind: &'static str, defaults: C, overrides: &Properties) -> Result<Self> {
        let mut declared = declared_properties(kind, &defaults)?;
        let mut extra = Properties::new();

        for (key, value) in overrides {
            match declared.get_mut(key) {
                Some(slot) => *slot = value.clone(),
                None => {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }

        let config = parse_config(kind, declared)?;
        Ok(Self {
            kind,
            config,
            extra,
        })
    }

    /// The typed declared properties
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Mutable access for variant code that refreshes values in place
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    /// Properties that were supplied but not declared by the variant
    pub fn extra(&self) -> &Properties {
        &self.extra
    }

    /// Every property, declared and extra
    pub fn snapshot(&self) -> Properties {
        let mut properties = declared_properties(self.kind, &self.config).unwrap_or_default();
        for (key, value) in &self.extra {
            properties
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        properties
    }

    /// Look up one property by key
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.extra.get(key) {
            return Some(value.clone());
        }
        declared_properties(self.kind, &self.config)
            .ok()
            .and_then(|mut declared| declared.remove(key))
    }

    /// Replace the value of an existing property.
    ///
    /// Declared properties are re-validated against their type. Setting a key
    /// the bag does not have fails with [`FieldsError::UnknownProperty`].
    pub fn set(&mut self, field: &str, key: &str, value: Value) -> Result<()> {
        if let Some(slot) = self.extra.get_mut(key) {
            *slot = value;
            return Ok(());
        }

        let mut declared = declared_properties(self.kind, &self.config)?;
        match declared.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                return Err(FieldsError::UnknownProperty {
                    field: field.to_string(),
                    key: key.to_string(),
                })
            }
        }
        self.config = parse_config(self.kind, declared)?;
        Ok(())
    }

    /// All property keys
    pub fn keys(&self) -> Vec<String> {
        self.snapshot().keys().cloned().collect()
    }
}

/// Serialize a config struct into its property map
pub fn declared_properties<C: Serialize>(kind: &str, config: &C) -> Result<Properties> {
    match serde_json::to_value(config) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(FieldsError::InvalidProperty {
            kind: kind.to_string(),
            message: format!("config must serialize to a map, got {other}"),
        }),
        Err(e) => Err(FieldsError::InvalidProperty {
            kind: kind.to_string(),
            message: e.to_string(),
        }),
    }
}

fn parse_config<C: DeserializeOwned>(kind: &str, declared: Properties) -> Result<C> {
    serde_json::from_value(Value::Object(declared)).map_err(|e| FieldsError::InvalidProperty {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Demo {
        label: String,
        required: bool,
    }

    fn defaults() -> Demo {
        Demo {
            label: "Nickname".into(),
            required: false,
        }
    }

    fn overrides(value: Value) -> Properties {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_merge_override_wins() {
        let bag = PropertyBag::merge("demo", defaults(), &overrides(json!({ "required": true })))
            .unwrap();
        assert!(bag.config().required);
        assert_eq!(bag.config().label, "Nickname");
        assert!(bag.extra().is_empty());
    }

    #[test]
    fn test_merge_keeps_unknown_keys() {
        let bag = PropertyBag::merge(
            "demo",
            defaults(),
            &overrides(json!({ "data_hint": "shown in tooltip" })),
        )
        .unwrap();
        assert_eq!(bag.get("data_hint"), Some(json!("shown in tooltip")));
        assert_eq!(bag.snapshot().len(), 3);
    }

    #[test]
    fn test_merge_rejects_wrong_type() {
        let err = PropertyBag::merge("demo", defaults(), &overrides(json!({ "required": "yes" })))
            .unwrap_err();
        assert!(matches!(err, FieldsError::InvalidProperty { .. }));
    }

    #[test]
    fn test_set_existing_and_unknown() {
        let mut bag =
            PropertyBag::merge("demo", defaults(), &overrides(json!({ "hint": "a" }))).unwrap();

        bag.set("nick", "label", json!("Alias")).unwrap();
        bag.set("nick", "hint", json!("b")).unwrap();
        assert_eq!(bag.config().label, "Alias");
        assert_eq!(bag.get("hint"), Some(json!("b")));

        let err = bag.set("nick", "color", json!("red")).unwrap_err();
        assert!(matches!(err, FieldsError::UnknownProperty { ref key, .. } if key == "color"));
        assert_eq!(bag.keys().len(), 3);
    }

    #[test]
    fn test_set_wrong_type_leaves_config_untouched() {
        let mut bag = PropertyBag::merge("demo", defaults(), &Properties::new()).unwrap();
        assert!(bag.set("nick", "required", json!(12)).is_err());
        assert!(!bag.config().required);
    }
}
