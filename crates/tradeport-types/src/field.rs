//! Form field types and the per-step field store.
//!
//! A `FieldStore` holds the values a user has entered so far, keyed per step
//! so that back-navigation and re-entry never clobber unrelated steps. A
//! text value consisting only of whitespace counts as empty for gating.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wizard::StepId;

/// Key identifying a form field (e.g. "beneficiary", "amount").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldKey(pub String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A field's current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum FieldValue {
    /// Free-form text (names, amounts, dates are all entered as text).
    Text(String),
    /// One option out of a fixed set (currency, LC type, project type).
    Choice(String),
    /// A yes/no toggle (partial shipment allowed, terms accepted).
    Flag(bool),
}

impl FieldValue {
    /// Whether the value counts as empty for gating purposes.
    ///
    /// Whitespace-only text is empty; a `Flag` is never empty (false is a
    /// deliberate answer, not a missing one).
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }

    /// The value rendered for preview substitution and submission payloads.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clone(),
            FieldValue::Flag(b) => {
                let s = if *b { "Allowed" } else { "Not Allowed" };
                s.to_string()
            }
        }
    }
}

/// What shape of value a field accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    /// Any non-empty text.
    Text,
    /// Must be one of the listed options.
    Choice { options: Vec<String> },
    /// Boolean toggle.
    Flag,
}

/// Specification of a single field on a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Label shown next to the input.
    pub label: String,
    /// Required fields gate forward navigation.
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A required free-text field.
    pub fn required_text(key: &str, label: &str) -> Self {
        Self {
            key: FieldKey::from(key),
            label: label.to_string(),
            required: true,
            kind: FieldKind::Text,
        }
    }

    /// An optional free-text field.
    pub fn optional_text(key: &str, label: &str) -> Self {
        Self {
            key: FieldKey::from(key),
            label: label.to_string(),
            required: false,
            kind: FieldKind::Text,
        }
    }

    /// A required single-choice field.
    pub fn required_choice(key: &str, label: &str, options: &[&str]) -> Self {
        Self {
            key: FieldKey::from(key),
            label: label.to_string(),
            required: true,
            kind: FieldKind::Choice {
                options: options.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// An optional yes/no toggle.
    pub fn flag(key: &str, label: &str) -> Self {
        Self {
            key: FieldKey::from(key),
            label: label.to_string(),
            required: false,
            kind: FieldKind::Flag,
        }
    }

    /// Whether `value` satisfies this spec's kind constraint.
    ///
    /// Blank checks are the gating policy's concern; this only validates
    /// shape (a `Choice` value must be one of the declared options).
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (&self.kind, value) {
            (FieldKind::Text, FieldValue::Text(_)) => true,
            (FieldKind::Choice { options }, FieldValue::Choice(v)) => options.contains(v),
            (FieldKind::Flag, FieldValue::Flag(_)) => true,
            _ => false,
        }
    }
}

/// Per-wizard store of entered field values, keyed per step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldStore {
    values: HashMap<StepId, HashMap<FieldKey, FieldValue>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value on a step, replacing any previous value.
    pub fn set(&mut self, step: &StepId, key: FieldKey, value: FieldValue) {
        self.values
            .entry(step.clone())
            .or_default()
            .insert(key, value);
    }

    /// Get a field value on a specific step.
    pub fn get(&self, step: &StepId, key: &FieldKey) -> Option<&FieldValue> {
        self.values.get(step)?.get(key)
    }

    /// Look a key up across all steps, in step-insertion-agnostic order.
    ///
    /// Used by the preview projector, which binds placeholder tokens to keys
    /// without caring which step the value was entered on. Keys are unique
    /// across a flow's steps by construction of the built-in flow tables.
    pub fn lookup(&self, key: &FieldKey) -> Option<&FieldValue> {
        self.values.values().find_map(|step_values| step_values.get(key))
    }

    /// Remove a field value. No-op if absent.
    pub fn clear(&mut self, step: &StepId, key: &FieldKey) {
        if let Some(step_values) = self.values.get_mut(step) {
            step_values.remove(key);
        }
    }

    /// Number of values stored across all steps.
    pub fn len(&self) -> usize {
        self.values.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to a sorted key -> rendered-value map for submission.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        self.values
            .values()
            .flat_map(|step_values| step_values.iter())
            .map(|(k, v)| (k.to_string(), v.render()))
            .collect()
    }
}
