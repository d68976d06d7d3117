//! Outward remittance flow.
//!
//! Four steps: beneficiary, transfer details, review, submit. No checklist
//! steps; gating is purely field-based.

use tradeport_types::field::FieldSpec;
use tradeport_types::wizard::{StepDefinition, StepId, StepKind};

use crate::wizard::PreviewTemplate;

/// Typical settlement window for an outward transfer.
pub const PROCESSING_ESTIMATE: &str = "1-2 business days";

pub const STEP_BENEFICIARY: &str = "beneficiary";
pub const STEP_DETAILS: &str = "transfer-details";
pub const STEP_REVIEW: &str = "review";
pub const STEP_SUBMIT: &str = "submit";

/// Ordered step table for the remittance flow.
pub fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            id: StepId::from(STEP_BENEFICIARY),
            label: "Beneficiary".to_string(),
            kind: StepKind::Details,
            fields: vec![
                FieldSpec::required_text("beneficiary", "Beneficiary Name"),
                FieldSpec::required_text("account", "Account Number / IBAN"),
                FieldSpec::required_text("country", "Country"),
            ],
        },
        StepDefinition {
            id: StepId::from(STEP_DETAILS),
            label: "Details".to_string(),
            kind: StepKind::Details,
            fields: vec![
                FieldSpec::required_text("amount", "Amount"),
                FieldSpec::required_choice(
                    "currency",
                    "Currency",
                    &["EUR", "USD", "GBP", "HKD"],
                ),
                FieldSpec::required_text("purpose", "Purpose of Remittance"),
            ],
        },
        StepDefinition {
            id: StepId::from(STEP_REVIEW),
            label: "Review".to_string(),
            kind: StepKind::Review,
            fields: vec![],
        },
        StepDefinition {
            id: StepId::from(STEP_SUBMIT),
            label: "Submit".to_string(),
            kind: StepKind::Review,
            fields: vec![],
        },
    ]
}

/// Remittance instruction preview template.
pub fn preview_template() -> PreviewTemplate {
    PreviewTemplate::new(
        "OUTWARD REMITTANCE INSTRUCTION\n\n\
         Beneficiary: [BENEFICIARY NAME]\n\
         Account: [ACCOUNT NUMBER]\n\
         Country: [COUNTRY]\n\
         Amount: [CURRENCY] [AMOUNT]\n\
         Purpose: [PURPOSE]\n\n\
         Please debit our account and remit the above amount to the beneficiary.",
        vec![
            ("BENEFICIARY NAME", "beneficiary"),
            ("ACCOUNT NUMBER", "account"),
            ("COUNTRY", "country"),
            ("AMOUNT", "amount"),
            ("CURRENCY", "currency"),
            ("PURPOSE", "purpose"),
        ],
    )
}
