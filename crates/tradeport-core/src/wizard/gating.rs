//! Gating policy: may the wizard advance past the current step?
//!
//! Pure and deterministic: the answer depends only on the step definition,
//! the field store, and the step's checklist items. Whitespace-only text is
//! treated as empty; a `Choice` value outside its declared options counts as
//! invalid even though it is non-empty.

use tradeport_types::clause::ChecklistItem;
use tradeport_types::error::ValidationError;
use tradeport_types::field::{FieldKey, FieldStore};
use tradeport_types::wizard::{StepDefinition, StepKind};

/// Decide whether the wizard may advance past `step`.
///
/// Returns `Ok(())` when every required field on the step holds a non-blank,
/// shape-valid value and every required checklist item is selected, else a
/// `ValidationError` listing the offending field keys (checklist gaps are
/// reported under the item's id as a pseudo-key, so the UI can mark the row).
pub fn can_advance(
    step: &StepDefinition,
    fields: &FieldStore,
    items: &[ChecklistItem],
) -> Result<(), ValidationError> {
    let mut missing: Vec<FieldKey> = Vec::new();

    for spec in &step.fields {
        if !spec.required {
            continue;
        }
        match fields.get(&step.id, &spec.key) {
            Some(value) if !value.is_blank() && spec.accepts(value) => {}
            _ => missing.push(spec.key.clone()),
        }
    }

    // Checklist steps additionally require every mandatory item to be
    // included (for document uploads: every mandatory document attached).
    if matches!(step.kind, StepKind::ClauseSelection | StepKind::DocumentUpload) {
        for item in items {
            if item.required && !item.selected {
                missing.push(FieldKey::new(item.id.clone()));
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            step: step.id.clone(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeport_types::clause::RiskLevel;
    use tradeport_types::field::{FieldSpec, FieldValue};
    use tradeport_types::wizard::StepId;

    fn details_step() -> StepDefinition {
        StepDefinition {
            id: StepId::from("details"),
            label: "Details".to_string(),
            kind: StepKind::Details,
            fields: vec![
                FieldSpec::required_text("beneficiary", "Beneficiary"),
                FieldSpec::required_choice("currency", "Currency", &["EUR", "USD"]),
                FieldSpec::optional_text("notes", "Notes"),
            ],
        }
    }

    fn filled_store(step: &StepDefinition) -> FieldStore {
        let mut store = FieldStore::new();
        store.set(
            &step.id,
            FieldKey::from("beneficiary"),
            FieldValue::Text("Acme Corp".to_string()),
        );
        store.set(
            &step.id,
            FieldKey::from("currency"),
            FieldValue::Choice("EUR".to_string()),
        );
        store
    }

    #[test]
    fn test_all_required_filled_advances() {
        let step = details_step();
        let store = filled_store(&step);
        assert!(can_advance(&step, &store, &[]).is_ok());
    }

    #[test]
    fn test_missing_required_field_blocks() {
        let step = details_step();
        let mut store = filled_store(&step);
        store.clear(&step.id, &FieldKey::from("beneficiary"));

        let err = can_advance(&step, &store, &[]).unwrap_err();
        assert_eq!(err.missing, vec![FieldKey::from("beneficiary")]);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let step = details_step();
        let mut store = filled_store(&step);
        store.set(
            &step.id,
            FieldKey::from("beneficiary"),
            FieldValue::Text("   ".to_string()),
        );

        assert!(can_advance(&step, &store, &[]).is_err());
    }

    #[test]
    fn test_choice_outside_options_counts_as_invalid() {
        let step = details_step();
        let mut store = filled_store(&step);
        store.set(
            &step.id,
            FieldKey::from("currency"),
            FieldValue::Choice("BTC".to_string()),
        );

        let err = can_advance(&step, &store, &[]).unwrap_err();
        assert_eq!(err.missing, vec![FieldKey::from("currency")]);
    }

    #[test]
    fn test_optional_field_never_blocks() {
        let step = details_step();
        let store = filled_store(&step);
        // "notes" never set
        assert!(can_advance(&step, &store, &[]).is_ok());
    }

    #[test]
    fn test_unselected_required_document_blocks_upload_step() {
        let step = StepDefinition {
            id: StepId::from("documents"),
            label: "Document Upload".to_string(),
            kind: StepKind::DocumentUpload,
            fields: vec![],
        };
        let items = vec![ChecklistItem {
            id: "commercial-invoice".to_string(),
            title: "Commercial Invoice".to_string(),
            description: String::new(),
            content: String::new(),
            required: true,
            selected: false,
            risk: RiskLevel::Low,
            risk_note: None,
        }];

        let err = can_advance(&step, &FieldStore::new(), &items).unwrap_err();
        assert_eq!(err.missing, vec![FieldKey::from("commercial-invoice")]);
    }

    #[test]
    fn test_checklist_ignored_on_non_checklist_steps() {
        let step = details_step();
        let store = filled_store(&step);
        let items = vec![ChecklistItem {
            id: "whatever".to_string(),
            title: String::new(),
            description: String::new(),
            content: String::new(),
            required: true,
            selected: false,
            risk: RiskLevel::Low,
            risk_note: None,
        }];

        // Details steps gate on fields alone.
        assert!(can_advance(&step, &store, &items).is_ok());
    }
}
