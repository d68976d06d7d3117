//! Submission payloads and gateway response types.
//!
//! The wizard core serializes a finished application into a flat
//! `SubmissionPayload` and hands it to a `SubmissionGateway` (defined in
//! `tradeport-core`). The gateway owns transport, retries-on-timeout policy,
//! and the backing service; the core only interprets its success/failure.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flow::FlowKind;
use crate::wizard::WizardId;

/// Reference returned by the gateway when an application is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationId(pub String);

impl ConfirmationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flattened application contents sent to the submission gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// The submitting wizard instance.
    pub wizard_id: WizardId,
    /// Which application flow produced this payload.
    pub flow: FlowKind,
    /// Field key -> rendered value, flattened across steps.
    pub fields: BTreeMap<String, String>,
    /// IDs of the checklist items included in the application.
    pub selected_items: Vec<String>,
    /// When the payload was assembled.
    pub submitted_at: DateTime<Utc>,
}

/// Machine-readable failure categories reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// The application was examined and declined.
    Rejected,
    /// The backing service could not be reached.
    Unavailable,
    /// The gateway's own deadline elapsed.
    Timeout,
    /// The payload failed the gateway's schema checks.
    InvalidPayload,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Rejected => "rejected",
            GatewayErrorCode::Unavailable => "unavailable",
            GatewayErrorCode::Timeout => "timeout",
            GatewayErrorCode::InvalidPayload => "invalid_payload",
        };
        write!(f, "{s}")
    }
}
