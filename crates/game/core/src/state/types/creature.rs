//! Creature entities: top-level tamagotchis and the pets they raise.

use arrayvec::ArrayVec;

use super::common::{CreatureId, Meter, Timestamp};
use crate::config::{GameConfig, StatDelta};

/// Bounded list of pets owned by a single tamagotchi.
pub type PetList = ArrayVec<Pet, { GameConfig::MAX_PETS }>;

/// Stat block shared by tamagotchis and pets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub level: u32,
    pub hunger: Meter,
    pub happiness: Meter,
    pub health: Meter,
}

impl Stats {
    pub fn new(hunger: u8, happiness: u8, health: u8) -> Self {
        Self {
            level: GameConfig::DEFAULT_LEVEL,
            hunger: Meter::new(hunger),
            happiness: Meter::new(happiness),
            health: Meter::new(health),
        }
    }

    /// Applies all three components of `delta` with saturation.
    pub fn apply(&mut self, delta: StatDelta) {
        self.hunger = self.hunger.adjust(delta.hunger);
        self.happiness = self.happiness.adjust(delta.happiness);
        self.health = self.health.adjust(delta.health);
    }

    /// Shared death rule: no health, no happiness, or starving.
    pub fn is_fatal(&self) -> bool {
        self.health.is_empty() || self.happiness.is_empty() || self.hunger.is_full()
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_HUNGER,
            GameConfig::DEFAULT_HAPPINESS,
            GameConfig::DEFAULT_HEALTH,
        )
    }
}

/// Emotional state derived from stats, used to pick dialog lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    Cheerful,
    Hungry,
    Sad,
    Lonely,
}

impl Mood {
    /// Hunger outranks sadness, which outranks loneliness.
    pub fn derive(stats: &Stats, orphan: bool) -> Self {
        if stats.hunger.value() >= GameConfig::HUNGRY_MOOD_THRESHOLD {
            Self::Hungry
        } else if stats.happiness.value() <= GameConfig::SAD_MOOD_THRESHOLD {
            Self::Sad
        } else if orphan {
            Self::Lonely
        } else {
            Self::Cheerful
        }
    }
}

/// Common view over anything that can live and die.
pub trait Vitals {
    fn id(&self) -> CreatureId;
    fn stats(&self) -> &Stats;
    fn stats_mut(&mut self) -> &mut Stats;
    fn is_dead(&self) -> bool;
    fn mark_dead(&mut self);

    /// Marks the creature dead if its stats crossed a threshold.
    ///
    /// Returns `true` only on the call that performs the transition, so the
    /// caller can count each death exactly once.
    fn settle_death(&mut self) -> bool {
        if self.is_dead() || !self.stats().is_fatal() {
            return false;
        }
        self.mark_dead();
        true
    }
}

/// Top-level creature owned by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tamagotchi {
    pub id: CreatureId,
    pub first_name: String,
    pub surname: String,
    pub stats: Stats,
    pub created_at: Timestamp,
    pub dead: bool,
    pub last_pet_created_at: Option<Timestamp>,
    pub pets: PetList,
}

impl Tamagotchi {
    pub fn new(
        id: CreatureId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            surname: surname.into(),
            stats: Stats::default(),
            created_at,
            dead: false,
            last_pet_created_at: None,
            pets: PetList::new(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.surname)
        }
    }

    pub fn has_capacity(&self) -> bool {
        !self.pets.is_full()
    }

    /// Alive and able to take in another pet.
    pub fn can_adopt(&self) -> bool {
        !self.dead && self.has_capacity()
    }

    pub fn pet(&self, id: CreatureId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn pet_mut(&mut self, id: CreatureId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == id)
    }

    /// Removes and returns the pet with `id`, preserving the order of the rest.
    pub fn take_pet(&mut self, id: CreatureId) -> Option<Pet> {
        let index = self.pets.iter().position(|pet| pet.id == id)?;
        Some(self.pets.remove(index))
    }

    /// Orphans every living pet. Returns the ids that changed.
    pub fn orphan_pets(&mut self) -> Vec<CreatureId> {
        self.pets
            .iter_mut()
            .filter(|pet| !pet.dead && !pet.orphan)
            .map(|pet| {
                pet.orphan = true;
                pet.id
            })
            .collect()
    }

    pub fn mood(&self) -> Mood {
        Mood::derive(&self.stats, false)
    }
}

impl Vitals for Tamagotchi {
    fn id(&self) -> CreatureId {
        self.id
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn mark_dead(&mut self) {
        self.dead = true;
    }
}

/// Offspring raised by a tamagotchi.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pet {
    pub id: CreatureId,
    pub parent_id: CreatureId,
    pub first_name: String,
    pub surname: String,
    pub stats: Stats,
    pub created_at: Timestamp,
    pub dead: bool,
    pub orphan: bool,
    /// Fight wins so far.
    pub maturity: u32,
    pub fighting: bool,
}

impl Pet {
    pub fn new(
        id: CreatureId,
        parent_id: CreatureId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            parent_id,
            first_name: first_name.into(),
            surname: surname.into(),
            stats: Stats::default(),
            created_at,
            dead: false,
            orphan: false,
            maturity: 0,
            fighting: false,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Alive, idle and still under a living parent.
    pub fn is_fight_ready(&self) -> bool {
        !self.dead && !self.fighting && !self.orphan
    }

    pub fn is_mature(&self) -> bool {
        self.maturity >= GameConfig::EVOLUTION_MATURITY
    }

    pub fn mood(&self) -> Mood {
        Mood::derive(&self.stats, self.orphan)
    }

    /// Builds the tamagotchi this pet becomes on evolution.
    pub fn evolve(&self, id: CreatureId, now: Timestamp) -> Tamagotchi {
        let stats = Stats::new(
            self.stats.hunger.value(),
            self.stats.happiness.value(),
            GameConfig::EVOLVED_HEALTH,
        );
        Tamagotchi::new(id, self.first_name.clone(), self.surname.clone(), now).with_stats(stats)
    }
}

impl Vitals for Pet {
    fn id(&self) -> CreatureId {
        self.id
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn mark_dead(&mut self) {
        self.dead = true;
    }
}
