//! The wizard controller: the single owner of a flow instance's state.
//!
//! All mutation of `WizardState`, the `FieldStore`, and the per-step
//! checklists happens through the methods here, on user-triggered events.
//! Every navigation entry point consults the step source so a step whose
//! checklist was invalidated by a variant change is reloaded before the user
//! sees it. Submission goes through the gateway, and at most one gateway
//! request is in flight per instance.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use tradeport_types::clause::ChecklistItem;
use tradeport_types::error::{AdvanceError, ChecklistError, StepSourceError, SubmitError};
use tradeport_types::event::WizardEvent;
use tradeport_types::field::{FieldKey, FieldStore, FieldValue};
use tradeport_types::flow::{FlowContext, FlowKind};
use tradeport_types::submission::{ConfirmationId, SubmissionPayload};
use tradeport_types::wizard::{StepDefinition, StepId, StepKind, SubmitState, WizardId, WizardState};

use crate::event::WizardEventBus;
use crate::gateway::SubmissionGateway;
use crate::source::StepSource;
use crate::wizard::preview::{self, PreviewTemplate};
use crate::wizard::gating;

/// Drives one application flow instance from first step to submission.
pub struct WizardController {
    id: WizardId,
    ctx: FlowContext,
    steps: Vec<StepDefinition>,
    state: WizardState,
    fields: FieldStore,
    /// Checklist items per step, loaded lazily on first entry because clause
    /// catalogs depend on the variant chosen at the type-selection step.
    items: HashMap<StepId, Vec<ChecklistItem>>,
    template: PreviewTemplate,
    submit_state: SubmitState,
    events: WizardEventBus,
}

impl WizardController {
    /// Open a wizard for a flow: load its step table, preview template, and
    /// the first step's checklist from the step source.
    pub async fn open<S: StepSource>(
        ctx: FlowContext,
        source: &S,
        events: WizardEventBus,
    ) -> Result<Self, StepSourceError> {
        let id = WizardId::new();
        let steps = source.load_steps(ctx).await?;
        if steps.is_empty() {
            return Err(StepSourceError::Source(format!(
                "empty step table for flow '{}'",
                ctx.flow
            )));
        }
        let template = source.preview_template(ctx).await?;

        let state = WizardState::new(steps.iter().map(|s| s.id.clone()).collect());
        let mut controller = Self {
            id,
            ctx,
            steps,
            state,
            fields: FieldStore::new(),
            items: HashMap::new(),
            template,
            submit_state: SubmitState::Editing,
            events,
        };
        controller.ensure_items_loaded(source).await?;

        info!(wizard_id = %controller.id, flow = %ctx.flow, "wizard opened");
        controller.publish_entered();
        Ok(controller)
    }

    pub fn id(&self) -> WizardId {
        self.id
    }

    pub fn flow(&self) -> FlowKind {
        self.ctx.flow
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    /// The step the user is currently on.
    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.state.current]
    }

    /// Checklist items of the current step (empty for non-checklist steps).
    pub fn current_items(&self) -> &[ChecklistItem] {
        self.items
            .get(&self.current_step().id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // --- Field entry ---

    /// Set a field value on the current step.
    ///
    /// Choosing a flow variant (project type, LC type) also updates the flow
    /// context so later checklist loads see the selection.
    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) {
        if let FieldValue::Choice(choice) = &value {
            match key.as_str() {
                "project_type" => {
                    if let Ok(pt) = choice.parse() {
                        self.ctx.project_type = Some(pt);
                        // Variant change invalidates a previously loaded catalog.
                        self.items.retain(|step_id, _| {
                            self.steps
                                .iter()
                                .find(|s| &s.id == step_id)
                                .is_none_or(|s| s.kind != StepKind::ClauseSelection)
                        });
                    }
                }
                "lc_type" => {
                    if let Ok(lc) = choice.parse() {
                        self.ctx.lc_type = Some(lc);
                    }
                }
                _ => {}
            }
        }
        let step_id = self.current_step().id.clone();
        self.fields.set(&step_id, key, value);
    }

    // --- Checklist operations ---

    /// Toggle a checklist item on the current step.
    ///
    /// Deselecting a required item is rejected; required document slots can
    /// still be selected (marked uploaded).
    pub fn toggle_item(&mut self, item_id: &str) -> Result<bool, ChecklistError> {
        let step_id = self.current_step().id.clone();
        let item = self
            .items
            .get_mut(&step_id)
            .and_then(|items| items.iter_mut().find(|i| i.id == item_id))
            .ok_or_else(|| ChecklistError::UnknownItem(item_id.to_string()))?;

        let selected = item.toggle()?;
        self.events.publish(WizardEvent::ItemToggled {
            wizard_id: self.id,
            item_id: item_id.to_string(),
            selected,
        });
        Ok(selected)
    }

    /// Replace the editable wording of a clause on the current step.
    pub fn edit_item_content(
        &mut self,
        item_id: &str,
        content: impl Into<String>,
    ) -> Result<(), ChecklistError> {
        let step_id = self.current_step().id.clone();
        let item = self
            .items
            .get_mut(&step_id)
            .and_then(|items| items.iter_mut().find(|i| i.id == item_id))
            .ok_or_else(|| ChecklistError::UnknownItem(item_id.to_string()))?;
        item.edit_content(content);
        Ok(())
    }

    // --- Navigation ---

    /// Advance to the next step if the current step's gating passes.
    ///
    /// On a gating failure the wizard stays put and the error lists the
    /// offending fields. At the terminal step this is a no-op. The step
    /// source is consulted only when entering a step whose checklist has not
    /// been loaded yet.
    pub async fn next<S: StepSource>(&mut self, source: &S) -> Result<usize, AdvanceError> {
        if self.state.at_terminal() {
            return Ok(self.state.current);
        }
        let step = self.current_step().clone();
        let items = self.current_items();

        if let Err(err) = gating::can_advance(&step, &self.fields, items) {
            debug!(wizard_id = %self.id, step = %step.id, missing = err.missing.len(),
                "gating refused advancement");
            self.events.publish(WizardEvent::ValidationFailed {
                wizard_id: self.id,
                step: step.id.clone(),
                missing: err.missing.clone(),
            });
            return Err(err.into());
        }

        if self.state.completed.insert(step.id.clone()) {
            self.events.publish(WizardEvent::StepCompleted {
                wizard_id: self.id,
                step: step.id.clone(),
            });
        }

        self.state.current += 1;
        self.ensure_items_loaded(source).await?;
        self.publish_entered();
        Ok(self.state.current)
    }

    /// Step back one step. Always allowed, floored at the first step.
    ///
    /// The step source is consulted because re-entering a checklist step
    /// after a variant change must serve the new catalog, not the evicted
    /// one.
    pub async fn back<S: StepSource>(&mut self, source: &S) -> Result<usize, StepSourceError> {
        if self.state.current > 0 {
            self.state.current -= 1;
            self.ensure_items_loaded(source).await?;
            self.publish_entered();
        }
        Ok(self.state.current)
    }

    /// Jump directly to a step.
    ///
    /// The target is clamped to the navigation frontier (one past the
    /// highest completed step); overruns are a defensive no-op, logged but
    /// never surfaced to the user. The landed step's checklist is reloaded
    /// if a variant change invalidated it.
    pub async fn go_to<S: StepSource>(
        &mut self,
        index: usize,
        source: &S,
    ) -> Result<usize, StepSourceError> {
        let target = index.min(self.state.frontier());
        if target != index {
            debug!(wizard_id = %self.id, requested = index, clamped = target,
                "go_to beyond frontier clamped");
        }
        if target != self.state.current {
            self.state.current = target;
            self.ensure_items_loaded(source).await?;
            self.publish_entered();
        }
        Ok(self.state.current)
    }

    // --- Preview ---

    /// Render the live draft document from current field values and the
    /// selected clauses. Pure projection; safe to call on every render.
    pub fn preview(&self) -> String {
        let clauses: Vec<ChecklistItem> = self
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::ClauseSelection)
            .filter_map(|s| self.items.get(&s.id))
            .flatten()
            .cloned()
            .collect();
        preview::project_with_clauses(&self.template, &self.fields, &clauses)
    }

    // --- Submission ---

    /// Assemble the flattened payload sent to the gateway.
    pub fn payload(&self) -> SubmissionPayload {
        let selected_items = self
            .items
            .values()
            .flatten()
            .filter(|i| i.selected)
            .map(|i| i.id.clone())
            .collect();
        SubmissionPayload {
            wizard_id: self.id,
            flow: self.ctx.flow,
            fields: self.fields.flatten(),
            selected_items,
            submitted_at: Utc::now(),
        }
    }

    /// Submit the finished application through the gateway.
    ///
    /// Allowed only from the terminal step with every earlier step
    /// completed. At most one request is in flight per wizard instance;
    /// a second call during an outstanding request returns
    /// `SubmitError::InFlight`. A gateway failure leaves the wizard on the
    /// terminal step, fully interactive, and retryable.
    pub async fn submit<G: SubmissionGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<ConfirmationId, SubmitError> {
        match &self.submit_state {
            SubmitState::InFlight => return Err(SubmitError::InFlight),
            SubmitState::Submitted { confirmation_id } => {
                return Err(SubmitError::AlreadySubmitted(confirmation_id.clone()));
            }
            SubmitState::Editing | SubmitState::Failed { .. } => {}
        }

        if !self.state.at_terminal() || !self.state.ready_for_submission() {
            let incomplete = self
                .state
                .steps
                .iter()
                .find(|id| !self.state.completed.contains(id))
                .cloned()
                .unwrap_or_else(|| self.current_step().id.clone());
            return Err(SubmitError::Incomplete(incomplete));
        }

        // Terminal-step gating still applies (e.g. review acknowledgements).
        let step = self.current_step().clone();
        if let Err(err) = gating::can_advance(&step, &self.fields, self.current_items()) {
            return Err(SubmitError::Incomplete(err.step));
        }

        self.submit_state = SubmitState::InFlight;
        self.events.publish(WizardEvent::SubmissionStarted { wizard_id: self.id });
        info!(wizard_id = %self.id, flow = %self.ctx.flow, "submitting application");

        match gateway.submit(self.payload()).await {
            Ok(confirmation_id) => {
                self.submit_state = SubmitState::Submitted {
                    confirmation_id: confirmation_id.as_str().to_string(),
                };
                info!(wizard_id = %self.id, confirmation = %confirmation_id,
                    "application accepted");
                self.events.publish(WizardEvent::SubmissionSucceeded {
                    wizard_id: self.id,
                    confirmation_id: confirmation_id.clone(),
                });
                Ok(confirmation_id)
            }
            Err(gw) => {
                warn!(wizard_id = %self.id, code = %gw.code, message = %gw.message,
                    "submission failed");
                self.submit_state = SubmitState::Failed {
                    message: gw.message.clone(),
                };
                self.events.publish(WizardEvent::SubmissionFailed {
                    wizard_id: self.id,
                    code: gw.code,
                    message: gw.message.clone(),
                });
                Err(gw.into())
            }
        }
    }

    // --- Internals ---

    async fn ensure_items_loaded<S: StepSource>(
        &mut self,
        source: &S,
    ) -> Result<(), StepSourceError> {
        let step_id = self.current_step().id.clone();
        if self.items.contains_key(&step_id) {
            return Ok(());
        }
        let items = source.load_items(self.ctx, &step_id).await?;
        self.items.insert(step_id, items);
        Ok(())
    }

    fn publish_entered(&self) {
        let step = self.current_step();
        self.events.publish(WizardEvent::StepEntered {
            wizard_id: self.id,
            step: step.id.clone(),
            index: self.state.current,
        });
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("id", &self.id)
            .field("flow", &self.ctx.flow)
            .field("current", &self.state.current)
            .field("submit_state", &self.submit_state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BuiltinFlows;
    use tradeport_types::error::GatewayError;
    use tradeport_types::submission::GatewayErrorCode;

    struct OkGateway;

    impl SubmissionGateway for OkGateway {
        async fn submit(
            &self,
            _payload: SubmissionPayload,
        ) -> Result<ConfirmationId, GatewayError> {
            Ok(ConfirmationId::new("BG-2024-001"))
        }
    }

    struct DownGateway;

    impl SubmissionGateway for DownGateway {
        async fn submit(
            &self,
            _payload: SubmissionPayload,
        ) -> Result<ConfirmationId, GatewayError> {
            Err(GatewayError::new(
                GatewayErrorCode::Unavailable,
                "processing service unreachable",
            ))
        }
    }

    async fn remittance_wizard() -> WizardController {
        WizardController::open(
            FlowContext::new(FlowKind::Remittance),
            &BuiltinFlows,
            WizardEventBus::default(),
        )
        .await
        .unwrap()
    }

    fn fill_beneficiary_step(wizard: &mut WizardController) {
        wizard.set_field("beneficiary".into(), FieldValue::Text("Global Supplies Ltd".into()));
        wizard.set_field(
            "account".into(),
            FieldValue::Text("DE89370400440532013000".into()),
        );
        wizard.set_field("country".into(), FieldValue::Text("Germany".into()));
    }

    fn fill_details_step(wizard: &mut WizardController) {
        wizard.set_field("amount".into(), FieldValue::Text("12,500.00".into()));
        wizard.set_field("currency".into(), FieldValue::Choice("EUR".into()));
        wizard.set_field("purpose".into(), FieldValue::Text("Import of machine parts".into()));
    }

    async fn completed_remittance_wizard() -> WizardController {
        let mut wizard = remittance_wizard().await;
        fill_beneficiary_step(&mut wizard);
        wizard.next(&BuiltinFlows).await.unwrap();
        fill_details_step(&mut wizard);
        wizard.next(&BuiltinFlows).await.unwrap();
        wizard.next(&BuiltinFlows).await.unwrap(); // review -> submit
        wizard
    }

    #[tokio::test]
    async fn next_with_missing_required_field_stays_put() {
        let mut wizard = remittance_wizard().await;

        let err = wizard.next(&BuiltinFlows).await.unwrap_err();
        assert!(matches!(err, AdvanceError::Validation(_)));
        assert_eq!(wizard.state().current, 0);
    }

    #[tokio::test]
    async fn next_with_filled_step_advances() {
        let mut wizard = remittance_wizard().await;
        fill_beneficiary_step(&mut wizard);

        let index = wizard.next(&BuiltinFlows).await.unwrap();
        assert_eq!(index, 1);
        assert!(wizard.state().completed.contains(&StepId::from("beneficiary")));
    }

    #[tokio::test]
    async fn next_then_back_restores_index() {
        let mut wizard = remittance_wizard().await;
        fill_beneficiary_step(&mut wizard);

        wizard.next(&BuiltinFlows).await.unwrap();
        assert_eq!(wizard.back(&BuiltinFlows).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn back_at_first_step_is_a_noop() {
        let mut wizard = remittance_wizard().await;
        assert_eq!(wizard.back(&BuiltinFlows).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn next_at_terminal_step_is_capped() {
        let mut wizard = completed_remittance_wizard().await;
        let terminal = wizard.state().terminal_index();
        assert_eq!(wizard.state().current, terminal);

        let index = wizard.next(&BuiltinFlows).await.unwrap();
        assert_eq!(index, terminal);
    }

    #[tokio::test]
    async fn go_to_beyond_frontier_is_clamped() {
        let mut wizard = remittance_wizard().await;
        fill_beneficiary_step(&mut wizard);
        wizard.next(&BuiltinFlows).await.unwrap();

        // Only step 0 completed, so the frontier is 1; step 3 is out of reach.
        assert_eq!(wizard.go_to(3, &BuiltinFlows).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn go_to_within_frontier_jumps() {
        let mut wizard = completed_remittance_wizard().await;
        assert_eq!(wizard.go_to(0, &BuiltinFlows).await.unwrap(), 0);
        assert_eq!(wizard.go_to(3, &BuiltinFlows).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn variant_change_reloads_clause_catalog_on_reentry() {
        let mut wizard = WizardController::open(
            FlowContext::new(FlowKind::BankGuarantee),
            &BuiltinFlows,
            WizardEventBus::default(),
        )
        .await
        .unwrap();
        wizard.set_field("project_type".into(), FieldValue::Choice("performance".into()));
        wizard.set_field("applicant".into(), FieldValue::Text("Acme Exports Ltd".into()));
        wizard.set_field("beneficiary".into(), FieldValue::Text("Harbour Authority".into()));
        wizard.set_field(
            "beneficiary_address".into(),
            FieldValue::Text("1 Quay Street".into()),
        );
        wizard.set_field("amount".into(), FieldValue::Text("USD 250,000".into()));
        wizard.set_field("end_date".into(), FieldValue::Text("2027-06-30".into()));
        wizard.next(&BuiltinFlows).await.unwrap();
        assert!(wizard
            .current_items()
            .iter()
            .any(|i| i.id == "reducing-value" && i.selected));

        // Revisit step 0, switch the variant, then jump forward again.
        wizard.back(&BuiltinFlows).await.unwrap();
        wizard.set_field("project_type".into(), FieldValue::Choice("bid".into()));
        assert_eq!(wizard.go_to(1, &BuiltinFlows).await.unwrap(), 1);

        // The clause step serves the bid catalog, not an empty one.
        let items = wizard.current_items();
        assert!(!items.is_empty());
        assert!(items.iter().any(|i| i.id == "beneficiary" && i.required && i.selected));
        assert!(items
            .iter()
            .find(|i| i.id == "reducing-value")
            .is_some_and(|i| !i.selected));
        assert!(wizard.payload().selected_items.contains(&"beneficiary".to_string()));
    }

    #[tokio::test]
    async fn submit_before_terminal_step_is_incomplete() {
        let mut wizard = remittance_wizard().await;
        let err = wizard.submit(&OkGateway).await.unwrap_err();
        assert!(matches!(err, SubmitError::Incomplete(_)));
        assert_eq!(*wizard.submit_state(), SubmitState::Editing);
    }

    #[tokio::test]
    async fn submit_success_transitions_to_submitted() {
        let mut wizard = completed_remittance_wizard().await;

        let confirmation = wizard.submit(&OkGateway).await.unwrap();
        assert_eq!(confirmation.as_str(), "BG-2024-001");
        assert!(matches!(wizard.submit_state(), SubmitState::Submitted { .. }));

        // A second submission is refused.
        let err = wizard.submit(&OkGateway).await.unwrap_err();
        assert!(matches!(err, SubmitError::AlreadySubmitted(_)));
    }

    #[tokio::test]
    async fn submit_failure_keeps_wizard_retryable() {
        let mut wizard = completed_remittance_wizard().await;
        let terminal = wizard.state().terminal_index();

        let err = wizard.submit(&DownGateway).await.unwrap_err();
        assert!(matches!(err, SubmitError::Gateway(_)));
        assert_eq!(wizard.state().current, terminal);
        assert!(matches!(wizard.submit_state(), SubmitState::Failed { .. }));

        // Retry against a healthy gateway succeeds.
        wizard.submit(&OkGateway).await.unwrap();
    }

    #[tokio::test]
    async fn submission_events_are_published() {
        let bus = WizardEventBus::new(16);
        let mut rx = bus.subscribe();
        let mut wizard = WizardController::open(
            FlowContext::new(FlowKind::Remittance),
            &BuiltinFlows,
            bus,
        )
        .await
        .unwrap();
        fill_beneficiary_step(&mut wizard);
        wizard.next(&BuiltinFlows).await.unwrap();
        fill_details_step(&mut wizard);
        wizard.next(&BuiltinFlows).await.unwrap();
        wizard.next(&BuiltinFlows).await.unwrap();
        wizard.submit(&OkGateway).await.unwrap();

        let mut saw_started = false;
        let mut saw_succeeded = false;
        while let Ok(event) = rx.try_recv() {
            match event {
                WizardEvent::SubmissionStarted { .. } => saw_started = true,
                WizardEvent::SubmissionSucceeded { .. } => saw_succeeded = true,
                _ => {}
            }
        }
        assert!(saw_started);
        assert!(saw_succeeded);
    }

    #[tokio::test]
    async fn preview_reflects_entered_fields() {
        let mut wizard = remittance_wizard().await;
        fill_beneficiary_step(&mut wizard);

        let preview = wizard.preview();
        assert!(preview.contains("Global Supplies Ltd"));
        // Unentered fields keep their placeholders.
        assert!(preview.contains("[PURPOSE]"));
    }
}
