//! Letter of credit application flow.
//!
//! Four steps: LC type selection, credit details, document upload, review.

use tradeport_types::clause::{ChecklistItem, RiskLevel};
use tradeport_types::field::FieldSpec;
use tradeport_types::wizard::{StepDefinition, StepId, StepKind};

use crate::wizard::PreviewTemplate;

/// Typical issuing-bank turnaround for a documentary credit.
pub const PROCESSING_ESTIMATE: &str = "2-3 business days";

pub const STEP_LC_TYPE: &str = "lc-type";
pub const STEP_DETAILS: &str = "lc-details";
pub const STEP_DOCUMENTS: &str = "lc-documents";
pub const STEP_REVIEW: &str = "lc-review";

/// Ordered step table for the letter of credit flow.
pub fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            id: StepId::from(STEP_LC_TYPE),
            label: "Select LC Type".to_string(),
            kind: StepKind::TypeSelection,
            fields: vec![FieldSpec::required_choice(
                "lc_type",
                "Letter of Credit Type",
                &["standby", "commercial", "revolving", "transferable"],
            )],
        },
        StepDefinition {
            id: StepId::from(STEP_DETAILS),
            label: "Credit Details".to_string(),
            kind: StepKind::Details,
            fields: vec![
                FieldSpec::required_text("applicant", "Applicant"),
                FieldSpec::required_text("lc_beneficiary", "Beneficiary"),
                FieldSpec::required_text("lc_amount", "Amount"),
                FieldSpec::required_choice(
                    "currency",
                    "Currency",
                    &["USD", "EUR", "GBP", "INR"],
                ),
                FieldSpec::required_text("expiry_date", "Expiry Date"),
                FieldSpec::flag("partial_shipment", "Partial Shipment"),
                FieldSpec::flag("transhipment", "Transhipment"),
            ],
        },
        StepDefinition {
            id: StepId::from(STEP_DOCUMENTS),
            label: "Upload Documents".to_string(),
            kind: StepKind::DocumentUpload,
            fields: vec![],
        },
        StepDefinition {
            id: StepId::from(STEP_REVIEW),
            label: "Review & Submit".to_string(),
            kind: StepKind::Review,
            fields: vec![],
        },
    ]
}

/// Document slots per step; only the upload step has a checklist.
pub fn items_for(step: &StepId) -> Vec<ChecklistItem> {
    if step.as_str() != STEP_DOCUMENTS {
        return Vec::new();
    }

    let slot = |id: &str, title: &str, description: &str, required: bool| ChecklistItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: String::new(),
        required,
        selected: false,
        risk: RiskLevel::Low,
        risk_note: None,
    };

    vec![
        slot(
            "commercial-invoice",
            "Commercial Invoice",
            "Must carry HS codes for all line items",
            true,
        ),
        slot(
            "packing-list",
            "Packing List",
            "Itemized packing details matching the invoice",
            true,
        ),
        slot(
            "bill-of-lading",
            "Bill of Lading",
            "With port of loading and discharge completed",
            true,
        ),
        slot(
            "insurance-certificate",
            "Insurance Certificate",
            "Required only for CIF/CIP shipments",
            false,
        ),
    ]
}

/// Documentary credit preview template.
pub fn preview_template() -> PreviewTemplate {
    PreviewTemplate::new(
        "IRREVOCABLE DOCUMENTARY CREDIT\n\n\
         Type: [LC TYPE]\n\
         Applicant: [APPLICANT]\n\
         Beneficiary: [BENEFICIARY]\n\
         Amount: [CURRENCY] [AMOUNT]\n\
         Expiry Date: [EXPIRY DATE]\n\
         Partial Shipment: [PARTIAL SHIPMENT]\n\
         Transhipment: [TRANSHIPMENT]\n\n\
         Available by negotiation against presentation of the stipulated documents.",
        vec![
            ("LC TYPE", "lc_type"),
            ("APPLICANT", "applicant"),
            ("BENEFICIARY", "lc_beneficiary"),
            ("AMOUNT", "lc_amount"),
            ("CURRENCY", "currency"),
            ("EXPIRY DATE", "expiry_date"),
            ("PARTIAL SHIPMENT", "partial_shipment"),
            ("TRANSHIPMENT", "transhipment"),
        ],
    )
}
