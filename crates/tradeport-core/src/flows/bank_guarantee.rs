//! Bank guarantee application flow.
//!
//! Four steps: project details, clause selection, document upload, review.
//! The clause catalog varies with the chosen project type: reducing-value is
//! suggested for performance guarantees, extend-or-pay for performance and
//! advance-payment guarantees, and the unconditional on-demand clause is
//! never suggested (high risk) but remains selectable.

use tradeport_types::clause::{ChecklistItem, RiskLevel};
use tradeport_types::error::StepSourceError;
use tradeport_types::field::FieldSpec;
use tradeport_types::flow::{FlowContext, ProjectType};
use tradeport_types::wizard::{StepDefinition, StepId, StepKind};

use crate::wizard::PreviewTemplate;

/// Typical bank turnaround once the application is submitted.
pub const PROCESSING_ESTIMATE: &str = "2-3 business days";

pub const STEP_PROJECT_DETAILS: &str = "project-details";
pub const STEP_CLAUSE_SELECTION: &str = "clause-selection";
pub const STEP_DOCUMENT_UPLOAD: &str = "document-upload";
pub const STEP_REVIEW: &str = "review-submit";

/// Ordered step table for the bank guarantee flow.
pub fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            id: StepId::from(STEP_PROJECT_DETAILS),
            label: "Project Details".to_string(),
            kind: StepKind::TypeSelection,
            fields: vec![
                FieldSpec::required_choice(
                    "project_type",
                    "Project Type",
                    &["performance", "bid", "advance", "retention"],
                ),
                FieldSpec::required_text("applicant", "Applicant"),
                FieldSpec::required_text("beneficiary", "Beneficiary"),
                FieldSpec::required_text("beneficiary_address", "Beneficiary Address"),
                FieldSpec::required_text("amount", "Guarantee Amount"),
                FieldSpec::required_text("end_date", "Validity End Date"),
                FieldSpec::optional_text("project_description", "Project Description"),
            ],
        },
        StepDefinition {
            id: StepId::from(STEP_CLAUSE_SELECTION),
            label: "Clause Selection".to_string(),
            kind: StepKind::ClauseSelection,
            fields: vec![],
        },
        StepDefinition {
            id: StepId::from(STEP_DOCUMENT_UPLOAD),
            label: "Document Upload".to_string(),
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

/// Checklist items for a step, given the chosen project type.
pub fn items_for(ctx: FlowContext, step: &StepId) -> Result<Vec<ChecklistItem>, StepSourceError> {
    match step.as_str() {
        STEP_CLAUSE_SELECTION => {
            let project_type = ctx.project_type.ok_or(StepSourceError::MissingVariant)?;
            Ok(clause_catalog(project_type))
        }
        STEP_DOCUMENT_UPLOAD => Ok(document_slots()),
        _ => Ok(Vec::new()),
    }
}

fn clause(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    required: bool,
    suggested: bool,
    risk: RiskLevel,
    risk_note: Option<&str>,
) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        required,
        // Suggested clauses start included; required ones always are.
        selected: required || suggested,
        risk,
        risk_note: risk_note.map(str::to_string),
    }
}

/// The clause catalog, with suggestions keyed off the project type.
fn clause_catalog(project_type: ProjectType) -> Vec<ChecklistItem> {
    let performance = project_type == ProjectType::Performance;
    let advance = project_type == ProjectType::Advance;

    vec![
        clause(
            "beneficiary",
            "Beneficiary Details",
            "Specifies the party in whose favor the guarantee is issued",
            "This Bank Guarantee is issued in favor of [BENEFICIARY NAME], \
             with registered address at [BENEFICIARY ADDRESS].",
            true,
            true,
            RiskLevel::Low,
            None,
        ),
        clause(
            "amount",
            "Guarantee Amount",
            "The maximum amount the bank is liable to pay",
            "The Bank hereby guarantees to pay the Beneficiary a sum not exceeding \
             [AMOUNT IN FIGURES] upon receipt of the Beneficiary's complying demand.",
            true,
            true,
            RiskLevel::Low,
            None,
        ),
        clause(
            "validity",
            "Validity Period",
            "The time period during which the guarantee can be invoked",
            "This Bank Guarantee shall remain valid and enforceable until [END DATE], \
             after which it shall become null and void.",
            true,
            true,
            RiskLevel::Low,
            None,
        ),
        clause(
            "invocation",
            "Invocation Clause",
            "Conditions under which the guarantee can be invoked",
            "The guarantee shall be invoked by the Beneficiary by way of a written demand \
             stating that [APPLICANT NAME] has failed to fulfill their contractual obligations.",
            true,
            true,
            RiskLevel::Low,
            None,
        ),
        clause(
            "reducing-value",
            "Reducing Value Clause",
            "Allows for reduction of the guarantee amount over time",
            "The value of this guarantee shall automatically reduce to [PERCENTAGE]% after \
             completion of [MILESTONE] as certified by [AUTHORITY].",
            false,
            performance,
            RiskLevel::Low,
            None,
        ),
        clause(
            "extend-or-pay",
            "Extend or Pay Clause",
            "Allows beneficiary to demand extension or payment",
            "If the validity of this guarantee is not extended 30 days before expiry, \
             the Bank shall pay the guaranteed sum to the Beneficiary.",
            false,
            performance || advance,
            RiskLevel::Medium,
            Some("This clause may lead to payment even without contractor default"),
        ),
        clause(
            "on-demand",
            "Unconditional On-Demand Clause",
            "Makes the guarantee payable on first demand without proof",
            "This guarantee is unconditional and the Bank shall pay upon first demand \
             without contest or dispute and without reference to [APPLICANT NAME].",
            false,
            false,
            RiskLevel::High,
            Some("High risk of unfair invocation without evidence of default"),
        ),
    ]
}

/// Document slots for the upload step. Selected means uploaded.
fn document_slots() -> Vec<ChecklistItem> {
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
            "contract-copy",
            "Signed Contract Copy",
            "The underlying contract the guarantee secures",
            true,
        ),
        slot(
            "financial-statements",
            "Financial Statements",
            "Latest audited financials of the applicant",
            true,
        ),
        slot(
            "completion-schedule",
            "Project Completion Schedule",
            "Milestone schedule supporting reducing-value terms",
            false,
        ),
    ]
}

/// Deed-of-guarantee preview template.
pub fn preview_template() -> PreviewTemplate {
    PreviewTemplate::new(
        "BANK GUARANTEE\n\n\
         THIS DEED OF GUARANTEE made this [DATE] by [BANK NAME], a banking company \
         having its registered office at [BANK ADDRESS] (hereinafter referred to as \
         \"the Bank\")\n\n\
         IN FAVOR OF\n\n\
         [BENEFICIARY NAME], having its registered office at [BENEFICIARY ADDRESS] \
         (hereinafter referred to as \"the Beneficiary\")\n\n\
         WHEREAS [APPLICANT NAME] (hereinafter referred to as \"the Applicant\") has \
         entered into a contract with the Beneficiary for [PROJECT DESCRIPTION].\n\n\
         AND WHEREAS the Applicant is required to furnish a Bank Guarantee for the sum \
         of [AMOUNT IN FIGURES] valid until [END DATE].",
        vec![
            ("BENEFICIARY NAME", "beneficiary"),
            ("BENEFICIARY ADDRESS", "beneficiary_address"),
            ("APPLICANT NAME", "applicant"),
            ("AMOUNT IN FIGURES", "amount"),
            ("END DATE", "end_date"),
            ("PROJECT DESCRIPTION", "project_description"),
        ],
    )
}
