//! Preview projector: render a live draft document from current field values.
//!
//! A `PreviewTemplate` binds bracketed placeholder tokens (e.g.
//! `[BENEFICIARY NAME]`) to field keys. Projection substitutes each token
//! with the field's rendered value when present and leaves the token
//! verbatim when absent, so a half-filled form still previews sensibly.
//! Both functions are pure; calling them on every render is safe.

use tradeport_types::clause::ChecklistItem;
use tradeport_types::field::{FieldKey, FieldStore};

/// A document template with token -> field-key bindings.
#[derive(Debug, Clone)]
pub struct PreviewTemplate {
    /// Template body containing `[TOKEN]` placeholders.
    pub body: String,
    /// Placeholder token (without brackets) paired with the bound field key.
    pub bindings: Vec<(String, FieldKey)>,
}

impl PreviewTemplate {
    pub fn new(body: impl Into<String>, bindings: Vec<(&str, &str)>) -> Self {
        Self {
            body: body.into(),
            bindings: bindings
                .into_iter()
                .map(|(token, key)| (token.to_string(), FieldKey::from(key)))
                .collect(),
        }
    }
}

/// Substitute bound placeholders in `template` with values from `fields`.
///
/// Unfilled placeholders stay verbatim. Idempotent for identical inputs.
pub fn project(template: &PreviewTemplate, fields: &FieldStore) -> String {
    let mut out = template.body.clone();
    for (token, key) in &template.bindings {
        if let Some(value) = fields.lookup(key) {
            if !value.is_blank() {
                out = out.replace(&format!("[{token}]"), &value.render());
            }
        }
    }
    out
}

/// Project the template, then append the selected clauses as a numbered list.
///
/// Clause bodies are themselves run through placeholder substitution so
/// tokens like `[END DATE]` inside clause wording resolve too.
pub fn project_with_clauses(
    template: &PreviewTemplate,
    fields: &FieldStore,
    clauses: &[ChecklistItem],
) -> String {
    let mut out = project(template, fields);

    let selected: Vec<&ChecklistItem> = clauses.iter().filter(|c| c.selected).collect();
    if selected.is_empty() {
        return out;
    }

    out.push_str("\n\nNOW THIS DEED WITNESSETH AS FOLLOWS:\n");
    for (n, clause) in selected.iter().enumerate() {
        let clause_template = PreviewTemplate {
            body: clause.content.clone(),
            bindings: template.bindings.clone(),
        };
        let body = project(&clause_template, fields);
        out.push_str(&format!("\n{}. {}\n", n + 1, body));
    }
    out
}
