use thiserror::Error;

use crate::field::FieldKey;
use crate::submission::GatewayErrorCode;
use crate::wizard::StepId;

/// `next()` was refused: required input on the current step is missing or
/// fails its shape check. The wizard stays on the step; the offending keys
/// let the UI mark the fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step '{step}' has {} missing or invalid required field(s)", missing.len())]
pub struct ValidationError {
    /// The step whose gating failed.
    pub step: StepId,
    /// Required keys that are absent, blank, or shape-invalid.
    pub missing: Vec<FieldKey>,
}

/// Errors related to checklist item operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("item '{0}' is required and cannot be deselected")]
    RequiredItem(String),

    #[error("no checklist item with id '{0}' on this step")]
    UnknownItem(String),
}

/// Failure reported by a submission gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission failed ({code}): {message}")]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    pub message: String,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors from `WizardController::submit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A gateway request is already outstanding for this wizard instance.
    #[error("a submission is already in flight for this wizard")]
    InFlight,

    /// The wizard already submitted successfully.
    #[error("application already submitted (confirmation {0})")]
    AlreadySubmitted(String),

    /// Submission attempted away from the review step, or with earlier
    /// steps still incomplete.
    #[error("wizard is not ready for submission: step '{0}' incomplete")]
    Incomplete(StepId),

    /// The gateway reported failure; the wizard remains retryable.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors from `WizardController::next`.
///
/// Advancement fails either because gating refused it or because the step
/// source could not deliver the next step's checklist catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] StepSourceError),
}

/// Errors from a step source (the read-only collaborator supplying step
/// definitions and checklist catalogs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepSourceError {
    #[error("flow context is missing its variant selection")]
    MissingVariant,

    #[error("step source failure: {0}")]
    Source(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            step: StepId::from("project-details"),
            missing: vec![FieldKey::from("beneficiary"), FieldKey::from("amount")],
        };
        assert_eq!(
            err.to_string(),
            "step 'project-details' has 2 missing or invalid required field(s)"
        );
    }

    #[test]
    fn test_checklist_error_display() {
        let err = ChecklistError::RequiredItem("beneficiary".to_string());
        assert_eq!(
            err.to_string(),
            "item 'beneficiary' is required and cannot be deselected"
        );
    }

    #[test]
    fn test_gateway_error_wraps_into_submit_error() {
        let gw = GatewayError::new(GatewayErrorCode::Unavailable, "service down");
        let err: SubmitError = gw.into();
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("service down"));
    }
}
