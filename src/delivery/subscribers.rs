//! Outcome broadcast — subscribe/unsubscribe without polling
//!
//! Every delivery outcome is published, including throttled and failed
//! ones; subscribers filter for themselves. Closed receivers are pruned
//! on the next broadcast, and unsubscribing twice is a no-op.

use super::outcome::DeliveryOutcome;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Handle to a live subscription: keep the receiver, keep the outcomes.
#[derive(Debug)]
pub struct OutcomeStream {
    pub id: SubscriptionId,
    pub receiver: mpsc::UnboundedReceiver<DeliveryOutcome>,
}

/// Opaque subscription identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of outcome subscribers.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    senders: DashMap<SubscriptionId, mpsc::UnboundedSender<DeliveryOutcome>>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription.
    pub fn subscribe(&self) -> OutcomeStream {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.insert(id, tx);
        OutcomeStream { id, receiver: rx }
    }

    /// Close a subscription. Idempotent.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.senders.remove(&id);
    }

    /// Publish an outcome to every live subscriber, pruning any whose
    /// receiver has been dropped.
    pub fn broadcast(&self, outcome: &DeliveryOutcome) {
        let mut dead = Vec::new();
        for entry in self.senders.iter() {
            if entry.value().send(outcome.clone()).is_err() {
                dead.push(*entry.key());
            }
        }
        for id in dead {
            self.senders.remove(&id);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}
