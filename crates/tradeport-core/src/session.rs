//! Registry of live wizard instances.
//!
//! Each wizard owns its state exclusively; the registry only maps wizard IDs
//! to instances so an application shell can host several flows at once
//! (e.g. an LC application and a remittance side by side). Entries are
//! dropped on close -- there is no persistence across sessions.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use tradeport_types::error::StepSourceError;
use tradeport_types::flow::FlowContext;
use tradeport_types::wizard::WizardId;

use crate::event::WizardEventBus;
use crate::source::StepSource;
use crate::wizard::WizardController;

/// Holds the wizard instances currently open in this process.
///
/// Each entry sits behind its own `Mutex`, so operations on one wizard never
/// block another; the mutex also serializes access per instance, which is
/// what upholds the one-submission-in-flight invariant across callers.
pub struct WizardRegistry {
    wizards: DashMap<WizardId, Arc<Mutex<WizardController>>>,
    events: WizardEventBus,
}

impl WizardRegistry {
    pub fn new(events: WizardEventBus) -> Self {
        Self {
            wizards: DashMap::new(),
            events,
        }
    }

    /// The shared event bus new wizards publish on.
    pub fn events(&self) -> &WizardEventBus {
        &self.events
    }

    /// Open a new wizard for a flow and register it.
    pub async fn open<S: StepSource>(
        &self,
        ctx: FlowContext,
        source: &S,
    ) -> Result<Arc<Mutex<WizardController>>, StepSourceError> {
        let controller = WizardController::open(ctx, source, self.events.clone()).await?;
        let id = controller.id();
        let entry = Arc::new(Mutex::new(controller));
        self.wizards.insert(id, entry.clone());
        Ok(entry)
    }

    /// Look up a live wizard by ID.
    pub fn get(&self, id: &WizardId) -> Option<Arc<Mutex<WizardController>>> {
        self.wizards.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a wizard, discarding its state (navigation away).
    pub fn close(&self, id: &WizardId) -> bool {
        let removed = self.wizards.remove(id).is_some();
        if removed {
            info!(wizard_id = %id, "wizard closed, state discarded");
        }
        removed
    }

    /// Number of wizards currently open.
    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wizards.is_empty()
    }
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::new(WizardEventBus::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BuiltinFlows;
    use tradeport_types::flow::FlowKind;

    #[tokio::test]
    async fn open_registers_and_close_discards() {
        let registry = WizardRegistry::default();
        let wizard = registry
            .open(FlowContext::new(FlowKind::Remittance), &BuiltinFlows)
            .await
            .unwrap();
        let id = wizard.lock().await.id();

        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());

        assert!(registry.close(&id));
        assert!(registry.is_empty());
        assert!(!registry.close(&id));
    }

    #[tokio::test]
    async fn instances_do_not_share_state() {
        let registry = WizardRegistry::default();
        let a = registry
            .open(FlowContext::new(FlowKind::Remittance), &BuiltinFlows)
            .await
            .unwrap();
        let b = registry
            .open(FlowContext::new(FlowKind::Remittance), &BuiltinFlows)
            .await
            .unwrap();

        a.lock().await.set_field(
            "beneficiary".into(),
            tradeport_types::field::FieldValue::Text("Acme".into()),
        );

        assert!(b.lock().await.fields().is_empty());
    }
}
