//! Periodic timers that keep the simulation moving.
//!
//! Every cadence runs as its own tokio interval task. A task never touches
//! game state; it only sends [`Command::Tick`] to the simulation worker, which
//! expands the tick into concrete actions against the state it owns at that
//! moment (see [`plan_tick`]). Dropping the [`Scheduler`] aborts all tasks.
mod plan;

pub use plan::plan_tick;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

use crate::config::Cadences;
use crate::workers::Command;

/// Kinds of periodic work, one timer each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TickKind {
    Breeding,
    Care,
    HungerDecay,
    Neglect,
    Adoption,
    Dialog,
    FightSearch,
    FightRound,
}

impl TickKind {
    pub const ALL: [TickKind; 8] = [
        TickKind::Breeding,
        TickKind::Care,
        TickKind::HungerDecay,
        TickKind::Neglect,
        TickKind::Adoption,
        TickKind::Dialog,
        TickKind::FightSearch,
        TickKind::FightRound,
    ];

    /// Environment variable overriding this cadence, e.g. `PET_FIGHT_ROUND_MS`.
    pub fn env_key(self) -> String {
        format!("PET_{}_MS", self.to_string().to_uppercase())
    }
}

/// Owns the interval tasks.
pub struct Scheduler {
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawns one interval task per tick kind.
    ///
    /// The first firing of each timer happens one full period after start.
    pub fn spawn(command_tx: mpsc::Sender<Command>, cadences: &Cadences) -> Self {
        let tasks = TickKind::ALL
            .into_iter()
            .map(|kind| {
                let period = cadences.get(kind);
                let tx = command_tx.clone();
                tokio::spawn(async move {
                    let mut interval = time::interval_at(time::Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        interval.tick().await;
                        trace!(target: "runtime::scheduler", tick = %kind, "tick");
                        if tx.send(Command::Tick(kind)).await.is_err() {
                            debug!(target: "runtime::scheduler", tick = %kind, "worker gone, timer stopping");
                            break;
                        }
                    }
                })
            })
            .collect();

        Self { tasks }
    }

    /// Aborts every timer task.
    pub fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn env_keys_follow_tick_names() {
        assert_eq!(TickKind::FightRound.env_key(), "PET_FIGHT_ROUND_MS");
        assert_eq!(TickKind::Breeding.env_key(), "PET_BREEDING_MS");
        assert_eq!(TickKind::HungerDecay.env_key(), "PET_HUNGER_DECAY_MS");
    }

    #[tokio::test(start_paused = true)]
    async fn timers_send_ticks_on_their_cadence() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut cadences = Cadences::default();
        for kind in TickKind::ALL {
            cadences.set(kind, Duration::from_secs(3600));
        }
        cadences.fight_round = Duration::from_millis(100);

        let mut scheduler = Scheduler::spawn(tx, &cadences);
        time::sleep(Duration::from_millis(350)).await;
        scheduler.shutdown();

        let mut rounds = 0;
        while let Ok(command) = rx.try_recv() {
            match command {
                Command::Tick(TickKind::FightRound) => rounds += 1,
                Command::Tick(other) => panic!("unexpected tick {other}"),
                _ => panic!("unexpected command"),
            }
        }
        assert_eq!(rounds, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_cadence_still_ticks() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut cadences = Cadences::default();
        for kind in TickKind::ALL {
            cadences.set(kind, Duration::from_secs(3600));
        }
        cadences.fight_search = Duration::ZERO;

        let mut scheduler = Scheduler::spawn(tx, &cadences);
        time::sleep(Duration::from_millis(10)).await;
        scheduler.shutdown();

        let mut searches = 0;
        while let Ok(command) = rx.try_recv() {
            match command {
                Command::Tick(TickKind::FightSearch) => searches += 1,
                Command::Tick(other) => panic!("unexpected tick {other}"),
                _ => panic!("unexpected command"),
            }
        }
        assert!(searches >= 5, "only {searches} ticks");
    }
}
