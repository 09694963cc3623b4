/*!
 * Event Bus
 * Typed publish/subscribe keyed by topic
 *
 * Subscribers are either callbacks or flume channels. Publishing snapshots
 * the subscriber list and delivers outside the map lock, so a callback may
 * publish or (un)subscribe without deadlocking.
 */

mod subscription;
pub mod types;

pub use subscription::Subscription;
pub use types::{FsChange, FsChangeKind, NotificationEvent, SubscriptionId, SystemEvent, Topic};

use ahash::RandomState;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::core::id::{AtomicGenerator, IdGenerator};

/// Callback subscriber
pub type EventCallback = Arc<dyn Fn(&SystemEvent) + Send + Sync>;

#[derive(Clone)]
enum Sink {
    Callback(EventCallback),
    Channel(flume::Sender<SystemEvent>),
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    sink: Sink,
}

pub(crate) struct BusInner {
    topics: DashMap<Topic, Vec<Subscriber>, RandomState>,
    ids: AtomicGenerator,
}

impl BusInner {
    fn remove(&self, topic: &Topic, id: SubscriptionId) {
        let now_empty = match self.topics.get_mut(topic) {
            Some(mut subscribers) => {
                subscribers.retain(|s| s.id != id);
                subscribers.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.topics.remove_if(topic, |_, subscribers| subscribers.is_empty());
        }
        debug!(topic = %topic, subscription = id, "Unsubscribed");
    }
}

/// Process-wide event bus
///
/// Clones share the same subscriber table.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                topics: DashMap::with_hasher(RandomState::new()),
                ids: AtomicGenerator::default(),
            }),
        }
    }

    /// Register a callback on `topic`
    pub fn subscribe<F>(&self, topic: Topic, callback: F) -> Subscription
    where
        F: Fn(&SystemEvent) + Send + Sync + 'static,
    {
        self.add(topic, Sink::Callback(Arc::new(callback)))
    }

    /// Channel-based subscription for async consumers
    pub fn watch(&self, topic: Topic) -> (Subscription, flume::Receiver<SystemEvent>) {
        let (tx, rx) = flume::unbounded();
        (self.add(topic, Sink::Channel(tx)), rx)
    }

    fn add(&self, topic: Topic, sink: Sink) -> Subscription {
        let id = self.inner.ids.next();
        self.inner
            .topics
            .entry(topic.clone())
            .or_default()
            .push(Subscriber { id, sink });
        debug!(topic = %topic, subscription = id, "Subscribed");
        Subscription::new(Arc::downgrade(&self.inner), topic, id)
    }

    /// Deliver an event to every subscriber of its topic
    ///
    /// Returns the number of subscribers reached.
    pub fn publish(&self, event: SystemEvent) -> usize {
        let topic = event.topic();
        let snapshot: Vec<Subscriber> = match self.inner.topics.get(&topic) {
            Some(subscribers) => subscribers.clone(),
            None => {
                trace!(topic = %topic, "No subscribers");
                return 0;
            }
        };

        let mut delivered = 0;
        let mut disconnected = Vec::new();

        for subscriber in &snapshot {
            match &subscriber.sink {
                Sink::Callback(callback) => {
                    callback(&event);
                    delivered += 1;
                }
                Sink::Channel(tx) => match tx.send(event.clone()) {
                    Ok(()) => delivered += 1,
                    Err(_) => disconnected.push(subscriber.id),
                },
            }
        }

        // Clean up dropped receivers
        for id in disconnected {
            debug!(topic = %topic, subscription = id, "Receiver disconnected");
            self.inner.remove(&topic, id);
        }

        trace!(topic = %topic, delivered, "Event published");
        delivered
    }

    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.inner
            .topics
            .get(topic)
            .map(|subscribers| subscribers.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("topics", &self.inner.topics.len())
            .finish()
    }
}
