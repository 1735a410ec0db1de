//! Form drafts
//!
//! A draft maps every schema field to a value of the field's kind. Updates
//! return a new draft and leave the original untouched.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::schema::{FieldKind, FormSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choices(BTreeSet<String>),
}

impl FieldValue {
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Choices => FieldValue::Choices(BTreeSet::new()),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Choices(_) => FieldKind::Choices,
        }
    }

    /// Whether a required field holding this value is satisfied
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Flag(flag) => *flag,
            FieldValue::Choices(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    #[serde(skip)]
    schema: &'static FormSchema,
    #[serde(flatten)]
    values: BTreeMap<&'static str, FieldValue>,
}

impl Draft {
    /// Every field at its zero value
    pub fn new(schema: &'static FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name, FieldValue::zero(f.kind)))
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Text value, empty for unknown or non-text fields
    pub fn text(&self, field: &str) -> &str {
        match self.get(field) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.get(field), Some(FieldValue::Flag(true)))
    }

    pub fn contains(&self, field: &str, item: &str) -> bool {
        match self.get(field) {
            Some(FieldValue::Choices(items)) => items.contains(item),
            _ => false,
        }
    }

    pub fn is_pristine(&self) -> bool {
        *self == Draft::new(self.schema)
    }

    /// Replace exactly one field
    ///
    /// Unknown fields and kind mismatches leave the draft unchanged.
    pub fn set_field(&self, field: &str, value: FieldValue) -> Draft {
        let Some(spec) = self.schema.field(field) else {
            log::warn!("[{}] Ignoring update of unknown field {}", self.schema.id, field);
            return self.clone();
        };
        if spec.kind != value.kind() {
            log::warn!(
                "[{}] Ignoring {:?} value for {:?} field {}",
                self.schema.id,
                value.kind(),
                spec.kind,
                field
            );
            return self.clone();
        }
        let mut next = self.clone();
        next.values.insert(spec.name, value);
        next
    }

    /// Add or remove one item of a multi-select field
    pub fn toggle(&self, field: &str, item: &str, included: bool) -> Draft {
        let Some(FieldValue::Choices(items)) = self.get(field) else {
            log::warn!("[{}] {} is not a multi-select field", self.schema.id, field);
            return self.clone();
        };
        if items.contains(item) == included {
            return self.clone();
        }
        let mut items = items.clone();
        if included {
            items.insert(item.to_string());
        } else {
            items.remove(item);
        }
        self.set_field(field, FieldValue::Choices(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::{CONTACT, GET_INVOLVED};

    #[test]
    fn test_new_draft_is_zeroed() {
        let draft = Draft::new(&CONTACT);
        assert_eq!(draft.text("name"), "");
        assert!(!draft.flag("agreed_to_terms"));
        assert!(draft.is_pristine());
        assert_eq!(draft.get("interests"), None);
    }

    #[test]
    fn test_set_field_replaces_exactly_one() {
        let draft = Draft::new(&CONTACT);
        let next = draft.set_field("email", "jane@example.com".into());

        assert_eq!(next.text("email"), "jane@example.com");
        assert_eq!(draft.text("email"), "");
        for spec in CONTACT.fields.iter().filter(|f| f.name != "email") {
            assert_eq!(next.get(spec.name), draft.get(spec.name));
        }
    }

    #[test]
    fn test_set_field_rejects_unknown_and_mismatched() {
        let draft = Draft::new(&CONTACT);
        assert_eq!(draft.set_field("nickname", "J".into()), draft);
        assert_eq!(draft.set_field("agreed_to_terms", "yes".into()), draft);
        assert_eq!(draft.set_field("name", true.into()), draft);
    }

    #[test]
    fn test_toggle() {
        let draft = Draft::new(&GET_INVOLVED);
        let one = draft.toggle("interests", "Agriculture", true);
        assert!(one.contains("interests", "Agriculture"));

        // Adding twice is a no-op
        assert_eq!(one.toggle("interests", "Agriculture", true), one);
        // Removing an absent item is a no-op
        assert_eq!(one.toggle("interests", "Youth Programs", false), one);

        let none = one.toggle("interests", "Agriculture", false);
        assert!(!none.contains("interests", "Agriculture"));
        assert!(none.is_pristine());

        // Not a multi-select field
        assert_eq!(draft.toggle("name", "x", true), draft);
    }

    #[test]
    fn test_serializes_flat() {
        let draft = Draft::new(&GET_INVOLVED)
            .set_field("name", "Jane".into())
            .toggle("interests", "Agriculture", true);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["agreed_to_terms"], false);
        assert_eq!(json["interests"], serde_json::json!(["Agriculture"]));
    }
}
