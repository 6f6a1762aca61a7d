//! Runtime configuration and its environment loader.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::schedule::TickKind;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Base seed for the game state. A random one is drawn when unset.
    pub seed: Option<u64>,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Optional TOML content pack replacing the built-in names and dialog.
    pub content_path: Option<PathBuf>,
    pub cadences: Cadences,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            command_buffer_size: 32,
            event_buffer_size: 100,
            content_path: None,
            cadences: Cadences::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PET_SEED`
    /// - `PET_COMMAND_BUFFER` / `PET_EVENT_BUFFER`
    /// - `PET_CONTENT_PATH`
    /// - `PET_<TICK>_MS` for every tick cadence, e.g. `PET_FIGHT_ROUND_MS`
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse::<u64>(lookup("PET_SEED")) {
            config.seed = Some(seed);
        }

        if let Some(capacity) = parse::<usize>(lookup("PET_COMMAND_BUFFER")) {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = parse::<usize>(lookup("PET_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }

        if let Some(path) = lookup("PET_CONTENT_PATH").filter(|path| !path.trim().is_empty()) {
            config.content_path = Some(PathBuf::from(path));
        }

        for kind in TickKind::ALL {
            if let Some(ms) = parse::<u64>(lookup(&kind.env_key())) {
                config.cadences.set(kind, Duration::from_millis(ms));
            }
        }

        config
    }
}

/// How often each periodic tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadences {
    pub breeding: Duration,
    pub care: Duration,
    pub hunger_decay: Duration,
    pub neglect: Duration,
    pub adoption: Duration,
    pub dialog: Duration,
    pub fight_search: Duration,
    pub fight_round: Duration,
}

impl Default for Cadences {
    fn default() -> Self {
        Self {
            breeding: Duration::from_secs(1),
            care: Duration::from_secs(5),
            hunger_decay: Duration::from_secs(30 * 60),
            neglect: Duration::from_secs(10),
            adoption: Duration::from_secs(5),
            dialog: Duration::from_secs(15),
            fight_search: Duration::from_secs(10),
            fight_round: Duration::from_secs(3),
        }
    }
}

impl Cadences {
    /// Shortest period a timer runs at; tokio intervals reject zero.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Period for `kind`, never below [`MIN_PERIOD`](Self::MIN_PERIOD).
    pub fn get(&self, kind: TickKind) -> Duration {
        let period = match kind {
            TickKind::Breeding => self.breeding,
            TickKind::Care => self.care,
            TickKind::HungerDecay => self.hunger_decay,
            TickKind::Neglect => self.neglect,
            TickKind::Adoption => self.adoption,
            TickKind::Dialog => self.dialog,
            TickKind::FightSearch => self.fight_search,
            TickKind::FightRound => self.fight_round,
        };
        period.max(Self::MIN_PERIOD)
    }

    pub fn set(&mut self, kind: TickKind, period: Duration) {
        let slot = match kind {
            TickKind::Breeding => &mut self.breeding,
            TickKind::Care => &mut self.care,
            TickKind::HungerDecay => &mut self.hunger_decay,
            TickKind::Neglect => &mut self.neglect,
            TickKind::Adoption => &mut self.adoption,
            TickKind::Dialog => &mut self.dialog,
            TickKind::FightSearch => &mut self.fight_search,
            TickKind::FightRound => &mut self.fight_round,
        };
        *slot = period.max(Self::MIN_PERIOD);
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
