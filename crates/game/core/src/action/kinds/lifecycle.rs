//! Creation and removal of creatures.

use crate::action::{ActionKind, ActionTransition, living_tamagotchi};
use crate::config::GameConfig;
use crate::engine::{ApplyContext, Effect};
use crate::error::SkipReason;
use crate::state::{CreatureId, FightState, GameState, Pet, Stats, Tamagotchi, Timestamp};

/// Time a tamagotchi must wait between two offspring.
///
/// `base × (1 + 1.5·hunger/100 − health/100 − happiness/100)`, clamped to the
/// configured window. A hungry parent waits longer; a healthy and happy one
/// breeds sooner.
pub fn breeding_delay_ms(stats: &Stats) -> u64 {
    let base = GameConfig::BREEDING_BASE_DELAY_MS;
    let hunger = i64::from(stats.hunger.value());
    let health = i64::from(stats.health.value());
    let happiness = i64::from(stats.happiness.value());

    let hunger_penalty = base * GameConfig::BREEDING_HUNGER_WEIGHT_NUM * hunger
        / (GameConfig::BREEDING_HUNGER_WEIGHT_DEN * 100);
    let delay = base + hunger_penalty - base * health / 100 - base * happiness / 100;

    delay.clamp(
        GameConfig::BREEDING_MIN_DELAY_MS,
        GameConfig::BREEDING_MAX_DELAY_MS,
    ) as u64
}

/// Milliseconds left before `tamagotchi` may breed again. Zero means due.
pub fn breeding_remaining_ms(tamagotchi: &Tamagotchi, now: Timestamp) -> u64 {
    let Some(last) = tamagotchi.last_pet_created_at else {
        return 0;
    };
    breeding_delay_ms(&tamagotchi.stats).saturating_sub(now.millis_since(last))
}

/// Adds a new top-level creature with a generated surname.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTamagotchiAction {
    pub first_name: String,
    pub now: Timestamp,
}

impl CreateTamagotchiAction {
    pub fn new(first_name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            first_name: first_name.into(),
            now,
        }
    }
}

impl ActionTransition for CreateTamagotchiAction {
    fn kind(&self) -> ActionKind {
        ActionKind::CreateTamagotchi
    }

    fn pre_validate(&self, _state: &GameState) -> Result<(), SkipReason> {
        if self.first_name.trim().is_empty() {
            return Err(SkipReason::EmptyName);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let id = state.allocate_id();
        let surname = ctx.surname();
        state.tamagotchis.push(Tamagotchi::new(
            id,
            self.first_name.trim(),
            surname,
            self.now,
        ));
        ctx.emit(Effect::TamagotchiCreated { id });
    }
}

/// Deletes a tamagotchi and every pet it owns.
///
/// The dead-count is a history and does not shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveTamagotchiAction {
    pub id: CreatureId,
}

impl RemoveTamagotchiAction {
    pub fn new(id: CreatureId) -> Self {
        Self { id }
    }
}

impl ActionTransition for RemoveTamagotchiAction {
    fn kind(&self) -> ActionKind {
        ActionKind::RemoveTamagotchi
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        state
            .tamagotchi(self.id)
            .map(|_| ())
            .ok_or(SkipReason::TamagotchiNotFound(self.id))
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let Some(index) = state.tamagotchi_index(self.id) else {
            return;
        };
        let removed = state.tamagotchis.remove(index);

        if let Some((fighter1, fighter2)) = state.current_fight.fighters() {
            let involved = removed
                .pets
                .iter()
                .any(|pet| state.current_fight.involves(pet.id));
            if involved {
                for fighter in [fighter1, fighter2] {
                    if let Some(pet) = state.pet_mut(fighter.parent_id, fighter.pet_id) {
                        pet.fighting = false;
                    }
                }
                state.current_fight = FightState::Inactive;
                ctx.emit(Effect::FightAbandoned);
            }
        }

        ctx.emit(Effect::TamagotchiRemoved {
            id: self.id,
            pets: removed.pets.len(),
        });
    }
}

/// Offspring creation, gated by capacity and the breeding delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatePetAction {
    pub parent_id: CreatureId,
    pub now: Timestamp,
}

impl CreatePetAction {
    pub fn new(parent_id: CreatureId, now: Timestamp) -> Self {
        Self { parent_id, now }
    }
}

impl ActionTransition for CreatePetAction {
    fn kind(&self) -> ActionKind {
        ActionKind::CreatePet
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        let parent = living_tamagotchi(state, self.parent_id)?;
        if !parent.has_capacity() {
            return Err(SkipReason::CapacityFull(self.parent_id));
        }
        let remaining_ms = breeding_remaining_ms(parent, self.now);
        if remaining_ms > 0 {
            return Err(SkipReason::BreedingNotDue {
                id: self.parent_id,
                remaining_ms,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let pet_id = state.allocate_id();
        let first_name = ctx.first_name();
        let Some(parent) = state.tamagotchi_mut(self.parent_id) else {
            return;
        };
        let pet = Pet::new(
            pet_id,
            self.parent_id,
            first_name,
            parent.surname.clone(),
            self.now,
        );
        if parent.pets.try_push(pet).is_err() {
            return;
        }
        parent.last_pet_created_at = Some(self.now);
        ctx.emit(Effect::PetBorn {
            parent_id: self.parent_id,
            pet_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{pet, run, tamagotchi, world};
    use super::*;
    use crate::action::Action;
    use crate::state::FighterRef;

    const PARENT: CreatureId = CreatureId(1);

    #[test]
    fn delay_follows_stats_and_clamps() {
        assert_eq!(breeding_delay_ms(&Stats::new(50, 50, 50)), 22_500);
        assert_eq!(breeding_delay_ms(&Stats::new(0, 100, 100)), 10_000);
        assert_eq!(breeding_delay_ms(&Stats::new(100, 0, 0)), 60_000);
        assert_eq!(breeding_delay_ms(&Stats::new(20, 40, 40)), 15_000);
    }

    #[test]
    fn create_assigns_surname_and_defaults() {
        let next = run(
            GameState::with_seed(3),
            Action::create_tamagotchi("  Nova ", Timestamp(5)),
        );
        let created = &next.state.tamagotchis[0];

        assert_eq!(created.first_name, "Nova");
        assert_eq!(created.surname, "Pixelton");
        assert_eq!(created.stats, Stats::default());
        assert_eq!(created.stats.level, 1);
        assert_eq!(created.created_at, Timestamp(5));
        assert!(created.pets.is_empty());
        assert_eq!(
            next.outcome.effects(),
            &[Effect::TamagotchiCreated { id: created.id }]
        );
    }

    #[test]
    fn blank_names_are_skipped() {
        let next = run(GameState::new(), Action::create_tamagotchi("   ", Timestamp(0)));
        assert_eq!(next.outcome.skip_reason(), Some(&SkipReason::EmptyName));
        assert!(next.state.tamagotchis.is_empty());
    }

    #[test]
    fn first_pet_is_always_due() {
        let state = world(vec![(tamagotchi(1, Stats::default()), vec![])]);
        let next = run(state, Action::create_pet(PARENT, Timestamp(1_000)));

        let parent = next.state.tamagotchi(PARENT).unwrap();
        assert_eq!(parent.pets.len(), 1);
        assert_eq!(parent.last_pet_created_at, Some(Timestamp(1_000)));
        let born = &parent.pets[0];
        assert_eq!(born.first_name, "Mochi");
        assert_eq!(born.surname, parent.surname);
        assert_eq!(born.parent_id, PARENT);
        assert_eq!(born.created_at, Timestamp(1_000));
    }

    #[test]
    fn second_pet_waits_for_the_delay() {
        let state = world(vec![(tamagotchi(1, Stats::default()), vec![])]);
        let next = run(state, Action::create_pet(PARENT, Timestamp(0)));

        let early = run(next.state, Action::create_pet(PARENT, Timestamp(20_000)));
        assert_eq!(
            early.outcome.skip_reason(),
            Some(&SkipReason::BreedingNotDue {
                id: PARENT,
                remaining_ms: 2_500
            })
        );

        let due = run(early.state, Action::create_pet(PARENT, Timestamp(22_500)));
        assert!(due.outcome.is_applied());
        assert_eq!(due.state.tamagotchi(PARENT).unwrap().pets.len(), 2);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut state = world(vec![(tamagotchi(1, Stats::default()), vec![])]);
        let mut now = Timestamp(0);
        for _ in 0..6 {
            state = run(state, Action::create_pet(PARENT, now)).state;
            now = now + 60_000;
        }
        assert_eq!(state.tamagotchi(PARENT).unwrap().pets.len(), 3);

        let next = run(state, Action::create_pet(PARENT, now));
        assert_eq!(
            next.outcome.skip_reason(),
            Some(&SkipReason::CapacityFull(PARENT))
        );
    }

    #[test]
    fn dead_parents_do_not_breed() {
        let mut parent = tamagotchi(1, Stats::new(50, 50, 0));
        parent.dead = true;
        let state = world(vec![(parent, vec![])]);
        let next = run(state, Action::create_pet(PARENT, Timestamp(0)));
        assert_eq!(next.outcome.skip_reason(), Some(&SkipReason::Dead(PARENT)));
    }

    #[test]
    fn removing_a_fighter_parent_resets_the_fight() {
        let mut state = world(vec![
            (tamagotchi(1, Stats::default()), vec![pet(2, 1, Stats::default())]),
            (tamagotchi(3, Stats::default()), vec![pet(4, 3, Stats::default())]),
        ]);
        state.dead_count = 2;
        let fighter1 = FighterRef::new(PARENT, CreatureId(2));
        let fighter2 = FighterRef::new(CreatureId(3), CreatureId(4));
        state = run(state, Action::start_fight(fighter1, fighter2)).state;

        let next = run(state, Action::remove_tamagotchi(PARENT));
        assert!(next.state.tamagotchi(PARENT).is_none());
        assert!(!next.state.current_fight.is_active());
        assert!(!next.state.fighter(fighter2).unwrap().fighting);
        assert_eq!(next.state.dead_count, 2);
        assert!(next.outcome.effects().contains(&Effect::FightAbandoned));
    }
}
