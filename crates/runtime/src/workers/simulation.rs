//! Simulation worker that owns the authoritative [`pet_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle) and the
//! scheduler, reduces actions via [`pet_core::reduce`], and publishes the
//! resulting effects to the [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace};

use pet_core::{Action, Effect, GameState, Outcome, reduce};

use crate::clock::Clock;
use crate::dialog;
use crate::events::{EffectEvent, Event, EventBus, SkippedEvent};
use crate::oracle::OracleManager;
use crate::schedule::{TickKind, plan_tick};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Reduce a single action and report its outcome.
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Outcome>,
    },
    /// Expand a timer tick against the current state and reduce the result.
    Tick(TickKind),
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Stop processing; queued commands are dropped.
    Shutdown,
}

/// Background task that processes commands one at a time.
///
/// Commands are handled strictly in arrival order, so no caller ever observes
/// a partially applied tick.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    clock: Arc<dyn Clock>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    dialog_round: u32,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        clock: Arc<dyn Clock>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            seed = state.seed,
            tamagotchis = state.tamagotchis.len(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            oracles,
            clock,
            command_rx,
            event_bus,
            dialog_round: 0,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if !self.handle_command(cmd) {
                break;
            }
        }
        debug!(target: "runtime::worker", "SimulationWorker stopped");
    }

    /// Returns `false` when the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Dispatch { action, reply } => {
                let outcome = self.apply(&action);
                if reply.send(outcome).is_err() {
                    debug!(target: "runtime::worker", "Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::Tick(kind) => self.handle_tick(kind),
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!(target: "runtime::worker", "QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn handle_tick(&mut self, kind: TickKind) {
        if kind == TickKind::Dialog {
            self.speak();
            return;
        }

        let actions = plan_tick(kind, &self.state, self.clock.as_ref());
        trace!(target: "runtime::worker", tick = %kind, actions = actions.len(), "tick planned");
        for action in &actions {
            self.apply(action);
        }
    }

    /// Reduces `action` and publishes what happened.
    ///
    /// This is the only place that calls [`reduce`].
    fn apply(&mut self, action: &Action) -> Outcome {
        let nonce = self.state.nonce;
        let state = std::mem::take(&mut self.state);
        let transition = reduce(state, self.oracles.as_env(), action);
        self.state = transition.state;

        let kind = action.kind();
        match &transition.outcome {
            Outcome::Applied { effects } => {
                debug!(
                    target: "runtime::worker",
                    action = %kind,
                    nonce,
                    effects = effects.len(),
                    "action applied"
                );
                for effect in effects {
                    self.log_effect(effect);
                    self.event_bus.publish(Event::Effect(EffectEvent {
                        nonce,
                        action: kind,
                        effect: effect.clone(),
                    }));
                }
            }
            Outcome::Skipped(reason) => {
                trace!(
                    target: "runtime::worker",
                    action = %kind,
                    reason = reason.code(),
                    "action skipped: {reason}"
                );
                self.event_bus.publish(Event::Skipped(SkippedEvent {
                    action: kind,
                    reason: reason.clone(),
                }));
            }
        }

        transition.outcome
    }

    fn log_effect(&self, effect: &Effect) {
        match effect {
            Effect::Died { id } => {
                info!(target: "runtime::worker", %id, dead_count = self.state.dead_count, "creature died");
            }
            Effect::Orphaned { parent_id, pet_id } => {
                info!(target: "runtime::worker", %parent_id, %pet_id, "pet orphaned");
            }
            Effect::Adopted { pet_id, from, to } => {
                info!(target: "runtime::worker", %pet_id, %from, %to, "orphan adopted");
            }
            Effect::Evolved {
                pet_id,
                tamagotchi_id,
            } => {
                info!(target: "runtime::worker", %pet_id, %tamagotchi_id, "pet evolved");
            }
            Effect::PetBorn { parent_id, pet_id } => {
                debug!(target: "runtime::worker", %parent_id, %pet_id, "pet born");
            }
            _ => {}
        }
    }

    fn speak(&mut self) {
        let round = self.dialog_round;
        self.dialog_round = self.dialog_round.wrapping_add(1);

        let Some(event) = dialog::speak(
            &self.state,
            self.oracles.phrases(),
            self.oracles.rng(),
            round,
        ) else {
            return;
        };
        debug!(target: "runtime::worker", speaker = %event.speaker, mood = %event.mood, "{}", event.line);
        self.event_bus.publish(Event::Dialog(event));
    }
}

#[cfg(test)]
mod tests {
    use pet_core::{CreatureId, SkipReason, Timestamp};

    use super::*;
    use crate::clock::ManualClock;
    use crate::events::Topic;

    fn worker() -> (SimulationWorker, mpsc::Sender<Command>, EventBus) {
        let (tx, rx) = mpsc::channel(8);
        let bus = EventBus::with_capacity(32);
        let worker = SimulationWorker::new(
            GameState::with_seed(5),
            OracleManager::default(),
            Arc::new(ManualClock::new(Timestamp(1_000))),
            rx,
            bus.clone(),
        );
        (worker, tx, bus)
    }

    #[test]
    fn applied_effects_are_published() {
        let (mut worker, _tx, bus) = worker();
        let mut lifecycle = bus.subscribe(Topic::Lifecycle);

        let outcome = worker.apply(&Action::create_tamagotchi("Nova", Timestamp(1_000)));
        assert!(outcome.is_applied());
        assert_eq!(worker.state.tamagotchis.len(), 1);

        let Ok(Event::Effect(event)) = lifecycle.try_recv() else {
            panic!("expected a lifecycle effect");
        };
        assert_eq!(event.nonce, 0);
        assert_eq!(event.effect, Effect::TamagotchiCreated { id: CreatureId(1) });
    }

    #[test]
    fn skips_are_published_on_the_state_topic() {
        let (mut worker, _tx, bus) = worker();
        let mut state = bus.subscribe(Topic::State);

        let outcome = worker.apply(&Action::feed(CreatureId(9)));
        assert_eq!(
            outcome.skip_reason(),
            Some(&SkipReason::TamagotchiNotFound(CreatureId(9)))
        );
        assert!(matches!(state.try_recv(), Ok(Event::Skipped(_))));
    }

    #[test]
    fn breeding_tick_uses_the_clock() {
        let (mut worker, _tx, _bus) = worker();
        worker.apply(&Action::create_tamagotchi("Nova", Timestamp(0)));

        worker.handle_tick(TickKind::Breeding);
        let parent = &worker.state.tamagotchis[0];
        assert_eq!(parent.pets.len(), 1);
        assert_eq!(parent.last_pet_created_at, Some(Timestamp(1_000)));
    }

    #[tokio::test]
    async fn shutdown_stops_the_loop() {
        let (worker, tx, _bus) = worker();
        let task = tokio::spawn(worker.run());
        tx.send(Command::Shutdown).await.expect("worker alive");
        task.await.expect("worker joins");
    }
}
