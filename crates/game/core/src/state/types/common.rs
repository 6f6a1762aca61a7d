use std::fmt;

use crate::config::GameConfig;

/// Unique identifier for any creature tracked in the state.
///
/// Tamagotchis and pets share a single id space allocated by
/// [`GameState`](crate::state::GameState), so an id is never reused even
/// after evolution turns a pet into a tamagotchi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Wall-clock instant in milliseconds since the Unix epoch.
///
/// The core never reads a clock; drivers stamp actions with the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    pub const fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Saturates at `u64::MAX` milliseconds.
impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Coarse time of day used by hunger decay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DayPhase {
    #[default]
    Day,
    Night,
}

impl DayPhase {
    /// Night spans 22:00 through 05:59.
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= 22 || hour < 6 {
            Self::Night
        } else {
            Self::Day
        }
    }
}

/// Stat meter clamped to `[0, 100]`.
///
/// Construction and every adjustment saturate at the bounds, so no sequence
/// of transitions can push a stat out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct Meter(u8);

impl Meter {
    pub const EMPTY: Self = Self(GameConfig::METER_MIN);
    pub const FULL: Self = Self(GameConfig::METER_MAX);

    pub const fn new(value: u8) -> Self {
        if value > GameConfig::METER_MAX {
            Self::FULL
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the meter shifted by `delta`, clamped to the valid range.
    #[must_use]
    pub fn adjust(self, delta: i32) -> Self {
        let next = (self.0 as i32).saturating_add(delta).clamp(
            GameConfig::METER_MIN as i32,
            GameConfig::METER_MAX as i32,
        );
        Self(next as u8)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == GameConfig::METER_MIN
    }

    pub const fn is_full(self) -> bool {
        self.0 == GameConfig::METER_MAX
    }
}

impl From<u8> for Meter {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Meter> for u8 {
    fn from(meter: Meter) -> Self {
        meter.0
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
