//! Wizard domain types.
//!
//! A wizard is a linear, forward/backward-navigable sequence of steps. The
//! types here are pure data: step identity, step shape, and the navigation
//! state (`WizardState`). All mutation goes through the controller in
//! `tradeport-core`; this crate only enforces the structural invariants.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::FieldSpec;

/// Unique identifier for a wizard instance, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WizardId(pub Uuid);

impl WizardId {
    /// Create a new WizardId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a WizardId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for WizardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WizardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WizardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier for a step within a flow (e.g. "clause-selection").
///
/// Unique within a flow's step table, stable across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StepId(pub String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The kind of step in a wizard flow.
///
/// Gating and preview match on this exhaustively, so adding a new kind forces
/// every handler to be updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Pick a flow variant (project type, LC type).
    TypeSelection,
    /// Free-form field entry (amounts, parties, dates).
    Details,
    /// Select and edit checklist clauses.
    ClauseSelection,
    /// Attach required documents.
    DocumentUpload,
    /// Final review; the only step from which submission is allowed.
    Review,
}

/// A single step in a wizard flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Step ID, unique within the flow (e.g. "project-details").
    pub id: StepId,
    /// Human-readable label shown in the stepper.
    pub label: String,
    /// The kind of step.
    pub kind: StepKind,
    /// Field specifications for this step. Required specs gate advancement.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Navigation state of a wizard instance.
///
/// Invariants, maintained by the controller:
/// - `current` is always in `[0, steps.len() - 1]`
/// - `completed` only contains steps strictly before `current`'s frontier,
///   i.e. a step is marked completed the moment its gating passed on `next()`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    /// Index of the step the user is currently on.
    pub current: usize,
    /// Ordered step identifiers for this flow.
    pub steps: Vec<StepId>,
    /// Steps whose gating has passed at least once.
    pub completed: BTreeSet<StepId>,
}

impl WizardState {
    /// Create a fresh state positioned on the first step.
    pub fn new(steps: Vec<StepId>) -> Self {
        Self {
            current: 0,
            steps,
            completed: BTreeSet::new(),
        }
    }

    /// Index of the last step (the review/submission step).
    pub fn terminal_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether the wizard is positioned on its terminal step.
    pub fn at_terminal(&self) -> bool {
        self.current == self.terminal_index()
    }

    /// The furthest index direct navigation may reach: one past the highest
    /// completed step, capped at the terminal index.
    pub fn frontier(&self) -> usize {
        let highest_completed = self
            .steps
            .iter()
            .enumerate()
            .filter(|(_, id)| self.completed.contains(id))
            .map(|(i, _)| i)
            .max();

        match highest_completed {
            Some(i) => (i + 1).min(self.terminal_index()),
            None => 0,
        }
    }

    /// Whether every step before the terminal one has passed gating.
    pub fn ready_for_submission(&self) -> bool {
        self.steps[..self.terminal_index()]
            .iter()
            .all(|id| self.completed.contains(id))
    }
}

/// Submission lifecycle of a wizard instance.
///
/// At most one gateway request is in flight per wizard; the controller
/// rejects a second `submit()` while in `InFlight` and any `submit()` after
/// `Submitted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SubmitState {
    /// Still collecting input; no request has succeeded.
    Editing,
    /// A gateway request is outstanding.
    InFlight,
    /// The gateway accepted the application.
    Submitted { confirmation_id: String },
    /// The last gateway request failed; retry is allowed.
    Failed { message: String },
}
