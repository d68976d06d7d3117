//! Submission gateway trait.
//!
//! The gateway is an external collaborator: it owns transport, timeouts,
//! and the backing processing service. The wizard core only assembles the
//! payload and interprets success or failure. Uses RPITIT (return position
//! `impl Trait` in traits) consistent with all async traits in this project.

use std::future::Future;

use tradeport_types::error::GatewayError;
use tradeport_types::submission::{ConfirmationId, SubmissionPayload};

/// Accepts finished applications for processing.
///
/// Implementations should impose their own deadline and map it to
/// `GatewayErrorCode::Timeout`; the controller never races the call.
pub trait SubmissionGateway: Send + Sync {
    /// Submit a finished application.
    ///
    /// On success returns the confirmation reference the user is shown.
    /// Failures are recoverable: the wizard stays on its review step and the
    /// same payload may be submitted again.
    fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<ConfirmationId, GatewayError>> + Send;
}
