//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for the
//! player commands, on-demand ticks, and streaming events from specific topics.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use pet_core::{Action, CreatureId, FighterRef, GameState, Outcome};

use super::errors::{Result, RuntimeError};
use crate::clock::Clock;
use crate::events::{Event, EventBus, Topic};
use crate::schedule::TickKind;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    clock: Arc<dyn Clock>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            clock,
        }
    }

    /// Creates a tamagotchi; the surname is drawn from the content pack.
    pub async fn create(&self, first_name: impl Into<String>) -> Result<Outcome> {
        let now = self.clock.now();
        self.dispatch(Action::create_tamagotchi(first_name, now))
            .await
    }

    pub async fn feed(&self, id: CreatureId) -> Result<Outcome> {
        self.dispatch(Action::feed(id)).await
    }

    pub async fn train(&self, id: CreatureId) -> Result<Outcome> {
        self.dispatch(Action::train(id)).await
    }

    pub async fn remove(&self, id: CreatureId) -> Result<Outcome> {
        self.dispatch(Action::remove_tamagotchi(id)).await
    }

    /// Puts two specific pets in the arena instead of waiting for matchmaking.
    pub async fn start_fight(&self, fighter1: FighterRef, fighter2: FighterRef) -> Result<Outcome> {
        self.dispatch(Action::start_fight(fighter1, fighter2)).await
    }

    /// Reduces an arbitrary action and waits for its outcome.
    ///
    /// Rule violations come back as [`Outcome::Skipped`], not as errors.
    pub async fn dispatch(&self, action: Action) -> Result<Outcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Dispatch {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Fires a tick immediately, independent of its timer.
    ///
    /// Returns once the tick is queued; follow with [`Self::query_state`] to
    /// observe its effect.
    pub async fn tick(&self, kind: TickKind) -> Result<()> {
        self.command_tx
            .send(Command::Tick(kind))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query current game state (read-only)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Lifecycle` - Births, deaths, orphaning, adoption, evolution
    /// - `Topic::Fight` - Arena events
    /// - `Topic::Dialog` - Lines spoken by creatures
    /// - `Topic::State` - Stat changes and skipped actions
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pet_runtime::Topic;
    ///
    /// let mut lifecycle = handle.subscribe(Topic::Lifecycle);
    /// while let Ok(event) = lifecycle.recv().await {
    ///     // Handle lifecycle events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
