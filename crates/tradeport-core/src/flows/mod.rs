//! Built-in step tables, checklist catalogs, and preview templates for the
//! three trade-finance application flows.
//!
//! These are static definitions servable by `BuiltinFlows`; a deployment
//! with a product catalog service would implement `StepSource` against it
//! instead and never touch this module.

use tradeport_types::flow::FlowKind;

pub mod bank_guarantee;
pub mod letter_of_credit;
pub mod remittance;

/// Expected bank processing time for a submitted application.
pub fn processing_estimate(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::BankGuarantee => bank_guarantee::PROCESSING_ESTIMATE,
        FlowKind::LetterOfCredit => letter_of_credit::PROCESSING_ESTIMATE,
        FlowKind::Remittance => remittance::PROCESSING_ESTIMATE,
    }
}
