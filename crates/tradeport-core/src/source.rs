//! Step source: the read-only collaborator supplying step definitions and
//! checklist catalogs for a flow.
//!
//! The built-in implementation (`BuiltinFlows`) serves the static tables in
//! `flows/`; a real deployment could substitute a source backed by a product
//! catalog service without touching the controller.

use std::future::Future;

use tradeport_types::clause::ChecklistItem;
use tradeport_types::error::StepSourceError;
use tradeport_types::flow::{FlowContext, FlowKind};
use tradeport_types::wizard::{StepDefinition, StepId};

use crate::flows;
use crate::wizard::PreviewTemplate;

/// Supplies step definitions and per-step checklist items for a flow.
pub trait StepSource: Send + Sync {
    /// Load the ordered step definitions for the given flow context.
    fn load_steps(
        &self,
        ctx: FlowContext,
    ) -> impl Future<Output = Result<Vec<StepDefinition>, StepSourceError>> + Send;

    /// Load the checklist items (clauses, document slots) for one step.
    ///
    /// Returns an empty catalog for steps without a checklist.
    fn load_items(
        &self,
        ctx: FlowContext,
        step: &StepId,
    ) -> impl Future<Output = Result<Vec<ChecklistItem>, StepSourceError>> + Send;

    /// The preview template for the flow's draft document.
    fn preview_template(
        &self,
        ctx: FlowContext,
    ) -> impl Future<Output = Result<PreviewTemplate, StepSourceError>> + Send;
}

/// Step source backed by the built-in flow tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFlows;

impl StepSource for BuiltinFlows {
    async fn load_steps(&self, ctx: FlowContext) -> Result<Vec<StepDefinition>, StepSourceError> {
        Ok(match ctx.flow {
            FlowKind::BankGuarantee => flows::bank_guarantee::steps(),
            FlowKind::LetterOfCredit => flows::letter_of_credit::steps(),
            FlowKind::Remittance => flows::remittance::steps(),
        })
    }

    async fn load_items(
        &self,
        ctx: FlowContext,
        step: &StepId,
    ) -> Result<Vec<ChecklistItem>, StepSourceError> {
        Ok(match ctx.flow {
            FlowKind::BankGuarantee => flows::bank_guarantee::items_for(ctx, step)?,
            FlowKind::LetterOfCredit => flows::letter_of_credit::items_for(step),
            FlowKind::Remittance => Vec::new(),
        })
    }

    async fn preview_template(&self, ctx: FlowContext) -> Result<PreviewTemplate, StepSourceError> {
        Ok(match ctx.flow {
            FlowKind::BankGuarantee => flows::bank_guarantee::preview_template(),
            FlowKind::LetterOfCredit => flows::letter_of_credit::preview_template(),
            FlowKind::Remittance => flows::remittance::preview_template(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeport_types::flow::ProjectType;

    #[tokio::test]
    async fn builtin_source_serves_all_flows() {
        let source = BuiltinFlows;
        for flow in [
            FlowKind::BankGuarantee,
            FlowKind::LetterOfCredit,
            FlowKind::Remittance,
        ] {
            let steps = source.load_steps(FlowContext::new(flow)).await.unwrap();
            assert!(steps.len() >= 4, "flow {flow} should have at least 4 steps");
        }
    }

    #[tokio::test]
    async fn clause_catalog_requires_project_type() {
        let source = BuiltinFlows;
        let ctx = FlowContext::new(FlowKind::BankGuarantee);
        let err = source
            .load_items(ctx, &StepId::from("clause-selection"))
            .await
            .unwrap_err();
        assert_eq!(err, StepSourceError::MissingVariant);

        let ctx = FlowContext::with_project_type(FlowKind::BankGuarantee, ProjectType::Performance);
        let items = source
            .load_items(ctx, &StepId::from("clause-selection"))
            .await
            .unwrap();
        assert!(!items.is_empty());
    }
}
