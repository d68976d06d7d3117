//! Wizard lifecycle events.
//!
//! The controller publishes these on an injected event bus instead of
//! calling into any global notification mechanism; whoever renders the UI
//! subscribes and decides what becomes a toast, a badge, or nothing.

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;
use crate::submission::{ConfirmationId, GatewayErrorCode};
use crate::wizard::{StepId, WizardId};

/// Events emitted by a wizard controller as its state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum WizardEvent {
    /// Navigation landed on a step (via next, back, or go_to).
    StepEntered { wizard_id: WizardId, step: StepId, index: usize },
    /// A step's gating passed and it was marked completed.
    StepCompleted { wizard_id: WizardId, step: StepId },
    /// `next()` was refused because required input is missing.
    ValidationFailed {
        wizard_id: WizardId,
        step: StepId,
        missing: Vec<FieldKey>,
    },
    /// A checklist item was included or excluded.
    ItemToggled {
        wizard_id: WizardId,
        item_id: String,
        selected: bool,
    },
    /// A submission request went out to the gateway.
    SubmissionStarted { wizard_id: WizardId },
    /// The gateway accepted the application.
    SubmissionSucceeded {
        wizard_id: WizardId,
        confirmation_id: ConfirmationId,
    },
    /// The gateway reported failure; the wizard remains retryable.
    SubmissionFailed {
        wizard_id: WizardId,
        code: GatewayErrorCode,
        message: String,
    },
}
