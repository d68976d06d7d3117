//! Broadcast event bus for distributing `WizardEvent` to multiple subscribers.
//!
//! Built on `tokio::sync::broadcast`, the `WizardEventBus` supports multiple
//! concurrent subscribers (a toast renderer, an audit log, a test harness).
//! Publishing with no active subscribers is a no-op, which keeps the
//! controller decoupled from any global notification mechanism.

use tokio::sync::broadcast;
use tradeport_types::event::WizardEvent;

/// Multi-consumer event bus for wizard lifecycle events.
///
/// Wraps a `tokio::sync::broadcast` channel. Cloning the bus clones the
/// sender, allowing multiple producers and consumers.
pub struct WizardEventBus {
    sender: broadcast::Sender<WizardEvent>,
}

impl WizardEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// A capacity of 64 is plenty for a single interactive wizard.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a new subscriber that will receive all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no subscribers, the event is silently dropped.
    pub fn publish(&self, event: WizardEvent) {
        let _ = self.sender.send(event);
    }
}

impl Clone for WizardEventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl Default for WizardEventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl std::fmt::Debug for WizardEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardEventBus")
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}
