//! The record model.

use super::{RecordId, RecordKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry in a store.
///
/// Serialized as a single flat object, with the kind's attributes next to
/// `id` and `name`:
///
/// ```json
/// {"id": 1, "name": "Sword", "category": "weapon", "rarity": "rare"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Record {
    /// Create a record with no attributes.
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, builder style.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Value of an attribute, empty if unset.
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes.get(key).map_or("", String::as_str)
    }

    /// Bring a new record into the shape `kind` expects.
    ///
    /// Trims every value, fills missing attributes with empty strings and
    /// rejects blank names or attributes the kind does not define.
    pub fn normalized(mut self, kind: RecordKind) -> Result<Self, String> {
        self.name = super::validate::require_name(&self.name)?;

        if let Some(key) = self.attributes.keys().find(|k| kind.field(k).is_none()) {
            return Err(format!("unknown {} field '{}'", kind.noun(), key));
        }

        for field in kind.fields() {
            let value = self
                .attributes
                .get(field.key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            self.attributes.insert(field.key.to_string(), value);
        }

        Ok(self)
    }

    /// Check a persisted record against the kind's schema.
    ///
    /// Every field must be present and no others may appear.
    pub fn conforms_to(&self, kind: RecordKind) -> Result<(), String> {
        if let Some(field) = kind
            .fields()
            .iter()
            .find(|f| !self.attributes.contains_key(f.key))
        {
            return Err(format!("record {} is missing '{}'", self.id, field.key));
        }

        if let Some(key) = self.attributes.keys().find(|k| kind.field(k).is_none()) {
            return Err(format!("record {} has unknown field '{}'", self.id, key));
        }

        Ok(())
    }

    /// Apply a partial update. Returns whether anything changed.
    pub fn apply(&mut self, patch: &RecordPatch) -> bool {
        let mut changed = false;

        if let Some(name) = patch.supplied_name() {
            changed |= self.name != name;
            self.name = name.to_string();
        }

        for (key, value) in patch.supplied_attributes() {
            let slot = self.attributes.entry(key.to_string()).or_default();
            changed |= *slot != value;
            *slot = value.to_string();
        }

        changed
    }

    /// Compact description used in log lines.
    pub fn summary(&self) -> String {
        let mut out = format!("id={} name={}", self.id, self.name);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}={}", key, value));
        }
        out
    }
}

/// A partial update. Blank values count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a replacement attribute value.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// True if applying the patch cannot change anything.
    pub fn is_empty(&self) -> bool {
        self.supplied_name().is_none() && self.supplied_attributes().next().is_none()
    }

    /// First attribute key the kind does not define.
    pub fn unknown_field(&self, kind: RecordKind) -> Option<&str> {
        self.attributes
            .keys()
            .map(String::as_str)
            .find(|k| kind.field(k).is_none())
    }

    fn supplied_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    fn supplied_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> Record {
        Record::new(RecordId::new(1), "Sword")
            .with_attribute("category", "weapon")
            .with_attribute("rarity", "rare")
    }

    #[test]
    fn test_flat_serialization() {
        let json = serde_json::to_value(sword()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Sword", "category": "weapon", "rarity": "rare"})
        );

        let parsed: Record = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sword());
    }

    #[test]
    fn test_non_string_attribute_is_rejected() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"id": 1, "name": "Sword", "rarity": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_fills_missing_fields() {
        let record = Record::new(RecordId::new(1), "  Estus Flask ")
            .normalized(RecordKind::Item)
            .unwrap();
        assert_eq!(record.name, "Estus Flask");
        assert_eq!(record.attribute("category"), "");
        assert_eq!(record.attributes.len(), 2);
    }

    #[test]
    fn test_normalized_rejects_blank_name_and_unknown_field() {
        assert!(Record::new(RecordId::new(1), "   ").normalized(RecordKind::Item).is_err());
        assert!(Record::new(RecordId::new(1), "Sword")
            .with_attribute("team", "Ferrari")
            .normalized(RecordKind::Item)
            .is_err());
    }

    #[test]
    fn test_conforms_to() {
        assert!(sword().conforms_to(RecordKind::Item).is_ok());
        assert!(sword().conforms_to(RecordKind::Driver).is_err());
        assert!(Record::new(RecordId::new(1), "Sword")
            .with_attribute("category", "weapon")
            .conforms_to(RecordKind::Item)
            .is_err());
    }

    #[test]
    fn test_apply_skips_blank_values() {
        let mut record = sword();
        let patch = RecordPatch::new()
            .name("")
            .attribute("category", "  ")
            .attribute("rarity", "legendary");

        assert!(record.apply(&patch));
        assert_eq!(record.name, "Sword");
        assert_eq!(record.attribute("category"), "weapon");
        assert_eq!(record.attribute("rarity"), "legendary");
    }

    #[test]
    fn test_empty_patch() {
        assert!(RecordPatch::new().name(" ").attribute("rarity", "").is_empty());
        assert!(!RecordPatch::new().name("Axe").is_empty());

        let mut record = sword();
        assert!(!record.apply(&RecordPatch::new()));
        assert_eq!(record, sword());
    }

    #[test]
    fn test_unknown_patch_field() {
        let patch = RecordPatch::new().attribute("team", "Ferrari");
        assert_eq!(patch.unknown_field(RecordKind::Item), Some("team"));
        assert_eq!(patch.unknown_field(RecordKind::Driver), None);
    }
}
