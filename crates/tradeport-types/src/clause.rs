//! Checklist items: guarantee clauses and document slots.
//!
//! Clause-selection and document-upload steps both work over the same item
//! shape: a titled entry that is either required (always included) or
//! optional (toggleable), with an editable text body and an optional risk
//! rating. Deselecting a required item is rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChecklistError;

/// Risk rating attached to optional clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{s}")
    }
}

/// A clause or document entry on a checklist step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier within the flow (e.g. "extend-or-pay").
    pub id: String,
    /// Title shown on the checklist row.
    pub title: String,
    /// One-line explanation of what the item covers.
    pub description: String,
    /// Editable body text (clause wording; empty for document slots).
    pub content: String,
    /// Required items are always included and cannot be deselected.
    pub required: bool,
    /// Whether the item is currently included / uploaded.
    pub selected: bool,
    /// Risk rating of including this item.
    pub risk: RiskLevel,
    /// Shown when the risk rating warrants a warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_note: Option<String>,
}

impl ChecklistItem {
    /// Toggle selection off -> on or on -> off.
    ///
    /// Returns `ChecklistError::RequiredItem` when attempting to deselect a
    /// required item; required items stay included for the life of the wizard.
    pub fn toggle(&mut self) -> Result<bool, ChecklistError> {
        if self.required && self.selected {
            return Err(ChecklistError::RequiredItem(self.id.clone()));
        }
        self.selected = !self.selected;
        Ok(self.selected)
    }

    /// Replace the editable body text. Only meaningful while selected.
    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}
