//! Pluggable recommendation provider.
//!
//! The portal shows "smart assistant" guidance next to each step. The core
//! treats the provider as an opaque collaborator: anything from a static
//! lookup to a hosted model can sit behind the trait. The built-in
//! `StaticAdvisor` returns fixed, deterministic guidance per flow and step.

use tradeport_types::flow::FlowKind;
use tradeport_types::wizard::StepKind;

use crate::flows;

/// Produces step-contextual guidance for the user.
pub trait Advisor: Send + Sync {
    /// A short guidance string for the given flow and step kind.
    fn guidance(&self, flow: FlowKind, step: StepKind) -> String;
}

/// Deterministic advisor serving fixed per-step guidance.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAdvisor;

impl Advisor for StaticAdvisor {
    fn guidance(&self, flow: FlowKind, step: StepKind) -> String {
        let text = match (flow, step) {
            (FlowKind::BankGuarantee, StepKind::TypeSelection) => {
                "Select your project type to receive suggested clauses tailored to your needs."
            }
            (FlowKind::BankGuarantee, StepKind::ClauseSelection) => {
                "Suggested clauses carry risk ratings; review the wording before including them."
            }
            (_, StepKind::DocumentUpload) => {
                "Upload all required documents; completeness is checked before submission."
            }
            (_, StepKind::Review) => {
                return format!(
                    "Review all details before submission. Processing typically takes {}.",
                    flows::processing_estimate(flow)
                );
            }
            (FlowKind::LetterOfCredit, StepKind::TypeSelection) => {
                "Choose the LC type that best fits your trade requirements."
            }
            (FlowKind::Remittance, _) | (_, StepKind::Details) => {
                "Fill in the application details; required fields gate the next step."
            }
            (FlowKind::LetterOfCredit, StepKind::ClauseSelection) => {
                "Select the documentary conditions to attach to this credit."
            }
        };
        text.to_string()
    }
}
