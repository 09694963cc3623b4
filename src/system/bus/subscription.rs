/*!
 * Subscription Handles
 * RAII teardown for bus subscribers
 */

use std::sync::Weak;

use super::types::{SubscriptionId, Topic};
use super::BusInner;

/// Live subscription; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    bus: Weak<BusInner>,
    topic: Topic,
    id: SubscriptionId,
    detached: bool,
}

impl Subscription {
    pub(super) fn new(bus: Weak<BusInner>, topic: Topic, id: SubscriptionId) -> Self {
        Self {
            bus,
            topic,
            id,
            detached: false,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Stop delivery now
    pub fn unsubscribe(self) {
        // Drop does the work
    }

    /// Keep the subscriber registered for the lifetime of the bus
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(&self.topic, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("id", &self.id)
            .finish()
    }
}
