//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{DialogEvent, EffectEvent, SkippedEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Births, deaths, orphaning, adoption, evolution
    Lifecycle,
    /// Arena events
    Fight,
    /// Lines spoken by creatures
    Dialog,
    /// Stat changes and skipped actions
    State,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Lifecycle, Topic::Fight, Topic::Dialog, Topic::State];

    const fn index(self) -> usize {
        match self {
            Topic::Lifecycle => 0,
            Topic::Fight => 1,
            Topic::Dialog => 2,
            Topic::State => 3,
        }
    }
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// One effect of an applied action.
    Effect(EffectEvent),
    /// An action whose precondition did not hold.
    Skipped(SkippedEvent),
    Dialog(DialogEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Effect(event) if event.effect.is_lifecycle() => Topic::Lifecycle,
            Event::Effect(event) if event.effect.is_fight() => Topic::Fight,
            Event::Effect(_) | Event::Skipped(_) => Topic::State,
            Event::Dialog(_) => Topic::Dialog,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct EventBus {
    channels: Arc<[broadcast::Sender<Event>; 4]>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Topic::ALL.map(|_| broadcast::channel(capacity).0)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels[topic.index()].send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels[topic.index()].subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
