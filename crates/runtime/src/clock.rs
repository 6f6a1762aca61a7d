//! Wall-clock access for the runtime.
//!
//! The reducer never reads time itself. The worker and the handle stamp
//! actions with [`Clock::now`] and pick the hunger-decay rate from
//! [`Clock::day_phase`].
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::Timelike;
use pet_core::{DayPhase, Timestamp};

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
    fn day_phase(&self) -> DayPhase;
}

/// Real time: UTC milliseconds for timestamps, local hour for the day phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        Timestamp::from_millis(millis)
    }

    fn day_phase(&self) -> DayPhase {
        DayPhase::from_hour(chrono::Local::now().hour())
    }
}

/// Hand-driven clock for tests and replays. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
    night: Arc<AtomicBool>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        let clock = Self::default();
        clock.set(start);
        clock
    }

    pub fn set(&self, now: Timestamp) {
        self.millis.store(now.as_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn set_phase(&self, phase: DayPhase) {
        self.night
            .store(phase == DayPhase::Night, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.load(Ordering::SeqCst))
    }

    fn day_phase(&self) -> DayPhase {
        if self.night.load(Ordering::SeqCst) {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }
}
