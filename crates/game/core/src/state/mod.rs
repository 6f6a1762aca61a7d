//! Authoritative simulation state.
//!
//! [`GameState`] is the single tree every transition reads and writes: the
//! ordered list of tamagotchis (each owning its pets), the dead-count, and the
//! arena slot. Drivers hold it by value and replace it with the state returned
//! from [`reduce`](crate::engine::reduce).
pub mod types;

pub use types::{
    CreatureId, DayPhase, FightState, FighterRef, Meter, Mood, Pet, PetList, Stats, Tamagotchi,
    Timestamp, Vitals,
};

/// Canonical snapshot of the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Base seed for deterministic random rolls.
    ///
    /// Combined with `nonce` so every applied action draws fresh values.
    pub seed: u64,

    /// Number of actions applied so far.
    pub nonce: u64,

    /// Sequential creature id allocator. Never reused.
    next_id: u64,

    /// Top-level creatures in creation order. Adoption searches this order.
    pub tamagotchis: Vec<Tamagotchi>,

    /// Deaths observed so far, each creature counted once.
    pub dead_count: u32,

    pub current_fight: FightState,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            nonce: 0,
            next_id: 1,
            tamagotchis: Vec::new(),
            dead_count: 0,
            current_fight: FightState::Inactive,
        }
    }

    /// Reserves the next creature id.
    pub fn allocate_id(&mut self) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts a prebuilt tamagotchi, keeping the id allocator ahead of it.
    ///
    /// Used by scenario setup and tests; transitions allocate ids themselves.
    pub fn insert_tamagotchi(&mut self, tamagotchi: Tamagotchi) {
        let highest = tamagotchi
            .pets
            .iter()
            .map(|pet| pet.id.0)
            .chain(std::iter::once(tamagotchi.id.0))
            .max()
            .unwrap_or_default();
        self.next_id = self.next_id.max(highest + 1);
        self.tamagotchis.push(tamagotchi);
    }

    pub fn tamagotchi(&self, id: CreatureId) -> Option<&Tamagotchi> {
        self.tamagotchis.iter().find(|t| t.id == id)
    }

    pub fn tamagotchi_mut(&mut self, id: CreatureId) -> Option<&mut Tamagotchi> {
        self.tamagotchis.iter_mut().find(|t| t.id == id)
    }

    pub fn tamagotchi_index(&self, id: CreatureId) -> Option<usize> {
        self.tamagotchis.iter().position(|t| t.id == id)
    }

    pub fn pet(&self, parent_id: CreatureId, pet_id: CreatureId) -> Option<&Pet> {
        self.tamagotchi(parent_id)?.pet(pet_id)
    }

    pub fn pet_mut(&mut self, parent_id: CreatureId, pet_id: CreatureId) -> Option<&mut Pet> {
        self.tamagotchi_mut(parent_id)?.pet_mut(pet_id)
    }

    pub fn fighter(&self, fighter: FighterRef) -> Option<&Pet> {
        self.pet(fighter.parent_id, fighter.pet_id)
    }

    /// Every pet eligible for matchmaking, in list order.
    pub fn fight_candidates(&self) -> Vec<FighterRef> {
        self.tamagotchis
            .iter()
            .flat_map(|t| {
                t.pets
                    .iter()
                    .filter(|pet| pet.is_fight_ready())
                    .map(move |pet| FighterRef::new(t.id, pet.id))
            })
            .collect()
    }

    /// True if any living pet is waiting for a new parent.
    pub fn has_orphans(&self) -> bool {
        self.tamagotchis
            .iter()
            .flat_map(|t| t.pets.iter())
            .any(|pet| pet.orphan && !pet.dead)
    }

    pub fn living_tamagotchis(&self) -> impl Iterator<Item = &Tamagotchi> {
        self.tamagotchis.iter().filter(|t| !t.dead)
    }

    pub fn living_pet_count(&self) -> usize {
        self.tamagotchis
            .iter()
            .flat_map(|t| t.pets.iter())
            .filter(|pet| !pet.dead)
            .count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut state = GameState::new();
        assert_eq!(state.allocate_id(), CreatureId(1));
        assert_eq!(state.allocate_id(), CreatureId(2));
    }

    #[test]
    fn insert_keeps_allocator_ahead() {
        let mut state = GameState::new();
        let mut parent = Tamagotchi::new(CreatureId(10), "Nova", "", Timestamp::ZERO);
        parent
            .pets
            .push(Pet::new(CreatureId(14), CreatureId(10), "Dot", "", Timestamp::ZERO));
        state.insert_tamagotchi(parent);
        assert_eq!(state.allocate_id(), CreatureId(15));
    }

    #[test]
    fn fight_candidates_exclude_orphans_dead_and_fighting() {
        let mut state = GameState::new();
        let mut parent = Tamagotchi::new(CreatureId(1), "Nova", "", Timestamp::ZERO);
        for id in 2..=4 {
            parent
                .pets
                .push(Pet::new(CreatureId(id), CreatureId(1), "Dot", "", Timestamp::ZERO));
        }
        parent.pets[0].orphan = true;
        parent.pets[1].fighting = true;
        state.insert_tamagotchi(parent);

        assert_eq!(
            state.fight_candidates(),
            vec![FighterRef::new(CreatureId(1), CreatureId(4))]
        );
        assert!(state.has_orphans());
    }

    #[test]
    fn living_pet_count_skips_the_dead() {
        let mut state = GameState::new();
        let mut parent = Tamagotchi::new(CreatureId(1), "Nova", "", Timestamp::ZERO);
        for id in 2..=4 {
            parent
                .pets
                .push(Pet::new(CreatureId(id), CreatureId(1), "Dot", "", Timestamp::ZERO));
        }
        parent.pets[1].dead = true;
        state.insert_tamagotchi(parent);

        assert_eq!(state.living_pet_count(), 2);
    }
}
