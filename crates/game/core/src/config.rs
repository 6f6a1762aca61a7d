/// Signed adjustment applied to the three stat meters of a creature.
///
/// Deltas are applied with saturation, so a meter never leaves `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub hunger: i32,
    pub happiness: i32,
    pub health: i32,
}

impl StatDelta {
    pub const fn new(hunger: i32, happiness: i32, health: i32) -> Self {
        Self {
            hunger,
            happiness,
            health,
        }
    }
}

/// Game rules: capacity limits, stat defaults, and the fixed deltas each
/// transition applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct GameConfig;

impl GameConfig {
    // ===== capacity =====
    /// Maximum number of pets a single tamagotchi may own.
    pub const MAX_PETS: usize = 3;
    /// Fight wins a pet needs before it evolves into a tamagotchi.
    pub const EVOLUTION_MATURITY: u32 = 3;

    // ===== stat bounds and defaults =====
    pub const METER_MIN: u8 = 0;
    pub const METER_MAX: u8 = 100;
    pub const DEFAULT_HUNGER: u8 = 50;
    pub const DEFAULT_HAPPINESS: u8 = 50;
    pub const DEFAULT_HEALTH: u8 = 50;
    pub const DEFAULT_LEVEL: u32 = 1;
    /// Health granted to a pet when it evolves.
    pub const EVOLVED_HEALTH: u8 = 100;
    /// Used when the name pool is empty.
    pub const FALLBACK_FIRST_NAME: &'static str = "Tama";

    // ===== user actions =====
    pub const FEED: StatDelta = StatDelta::new(-10, 5, -5);
    pub const TRAIN: StatDelta = StatDelta::new(5, -10, 10);

    // ===== hunger decay =====
    pub const DAY_HUNGER_DECAY: i32 = 5;
    pub const NIGHT_HUNGER_DECAY: i32 = 1;

    // ===== pet auto-care =====
    /// Care feeds a pet whose hunger is strictly above this value.
    pub const CARE_HUNGER_THRESHOLD: u8 = 30;
    /// Care heals a pet whose health is strictly below this value.
    pub const CARE_HEALTH_THRESHOLD: u8 = 70;
    pub const CARE_FEED: StatDelta = StatDelta::new(-10, 5, 0);
    pub const CARE_HEAL: StatDelta = StatDelta::new(5, 0, 10);

    // ===== neglect =====
    pub const ORPHAN_SUFFERING: StatDelta = StatDelta::new(10, -5, -5);
    pub const PET_HUNGER_DECAY: StatDelta = StatDelta::new(-5, 0, 0);

    // ===== breeding =====
    pub const BREEDING_BASE_DELAY_MS: i64 = 30_000;
    pub const BREEDING_MIN_DELAY_MS: i64 = 10_000;
    pub const BREEDING_MAX_DELAY_MS: i64 = 60_000;
    /// Weight of the hunger penalty relative to the base delay (×1.5).
    pub const BREEDING_HUNGER_WEIGHT_NUM: i64 = 3;
    pub const BREEDING_HUNGER_WEIGHT_DEN: i64 = 2;

    // ===== fighting =====
    /// Inclusive lower bound of a single damage roll.
    pub const FIGHT_DAMAGE_MIN: u32 = 10;
    /// Inclusive upper bound of a single damage roll (rolls land in `[10, 30)`).
    pub const FIGHT_DAMAGE_MAX: u32 = 29;

    // ===== dialog moods =====
    pub const HUNGRY_MOOD_THRESHOLD: u8 = 80;
    pub const SAD_MOOD_THRESHOLD: u8 = 30;
}
