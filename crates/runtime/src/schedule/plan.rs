//! Expansion of timer ticks into reducer actions.

use pet_core::{Action, GameState, breeding_remaining_ms};

use super::TickKind;
use crate::clock::Clock;

/// Turns one tick into the actions it implies for the current state.
///
/// Only entities that would plausibly accept the action are targeted; the
/// reducer still re-checks every precondition. [`TickKind::Dialog`] yields no
/// actions because dialog never changes state.
pub fn plan_tick(kind: TickKind, state: &GameState, clock: &dyn Clock) -> Vec<Action> {
    match kind {
        TickKind::Breeding => {
            let now = clock.now();
            state
                .living_tamagotchis()
                .filter(|t| t.has_capacity() && breeding_remaining_ms(t, now) == 0)
                .map(|t| Action::create_pet(t.id, now))
                .collect()
        }
        TickKind::Care => state
            .living_tamagotchis()
            .flat_map(|t| {
                t.pets
                    .iter()
                    .filter(|pet| !pet.dead)
                    .map(move |pet| Action::care_pet(t.id, pet.id))
            })
            .collect(),
        TickKind::HungerDecay => {
            let phase = clock.day_phase();
            state
                .living_tamagotchis()
                .map(|t| Action::decay_hunger(t.id, phase))
                .collect()
        }
        TickKind::Neglect => state
            .tamagotchis
            .iter()
            .flat_map(|t| {
                t.pets
                    .iter()
                    .filter(move |pet| !pet.dead && (pet.orphan || !t.dead))
                    .map(move |pet| Action::pet_neglect(t.id, pet.id))
            })
            .collect(),
        TickKind::Adoption => {
            let mut actions: Vec<Action> = state
                .tamagotchis
                .iter()
                .filter(|t| t.dead && t.pets.iter().any(|pet| !pet.dead && !pet.orphan))
                .map(|t| Action::handle_parent_death(t.id))
                .collect();
            if !actions.is_empty() || state.has_orphans() {
                actions.push(Action::adopt_orphans());
            }
            actions
        }
        TickKind::FightSearch if !state.current_fight.is_active() => {
            vec![Action::match_fighters()]
        }
        TickKind::FightRound if state.current_fight.is_active() => {
            vec![Action::fight_round(clock.now())]
        }
        TickKind::FightSearch | TickKind::FightRound | TickKind::Dialog => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pet_core::{CreatureId, DayPhase, FightState, FighterRef, Pet, Tamagotchi, Timestamp};

    use super::*;
    use crate::clock::ManualClock;

    fn family(id: u64, pets: &[u64]) -> Tamagotchi {
        let mut parent = Tamagotchi::new(CreatureId(id), "Nova", "Pixelton", Timestamp::ZERO);
        for &pet in pets {
            parent.pets.push(Pet::new(
                CreatureId(pet),
                CreatureId(id),
                "Dot",
                "Pixelton",
                Timestamp::ZERO,
            ));
        }
        parent
    }

    fn state_with(families: Vec<Tamagotchi>) -> GameState {
        let mut state = GameState::with_seed(1);
        for family in families {
            state.insert_tamagotchi(family);
        }
        state
    }

    #[test]
    fn breeding_targets_due_parents_only() {
        let mut waiting = family(1, &[2]);
        waiting.last_pet_created_at = Some(Timestamp(9_000));
        let full = family(3, &[4, 5, 6]);
        let fresh = family(7, &[]);
        let state = state_with(vec![waiting, full, fresh]);

        let clock = ManualClock::new(Timestamp(10_000));
        let actions = plan_tick(TickKind::Breeding, &state, &clock);
        assert_eq!(
            actions,
            vec![Action::create_pet(CreatureId(7), Timestamp(10_000))]
        );
    }

    #[test]
    fn hunger_decay_uses_the_clock_phase() {
        let mut dead = family(2, &[]);
        dead.dead = true;
        let state = state_with(vec![family(1, &[]), dead]);
        let clock = ManualClock::default();
        clock.set_phase(DayPhase::Night);

        assert_eq!(
            plan_tick(TickKind::HungerDecay, &state, &clock),
            vec![Action::decay_hunger(CreatureId(1), DayPhase::Night)]
        );
    }

    #[test]
    fn care_skips_dead_parents_and_dead_pets() {
        let mut living = family(1, &[2, 3]);
        living.pets[1].dead = true;
        let mut dead = family(4, &[5]);
        dead.dead = true;
        let state = state_with(vec![living, dead]);

        assert_eq!(
            plan_tick(TickKind::Care, &state, &ManualClock::default()),
            vec![Action::care_pet(CreatureId(1), CreatureId(2))]
        );
    }

    #[test]
    fn neglect_reaches_orphans_and_pets_of_living_parents() {
        let mut dead = family(1, &[2, 3]);
        dead.dead = true;
        dead.pets[0].orphan = true;
        let state = state_with(vec![dead, family(4, &[5])]);

        assert_eq!(
            plan_tick(TickKind::Neglect, &state, &ManualClock::default()),
            vec![
                Action::pet_neglect(CreatureId(1), CreatureId(2)),
                Action::pet_neglect(CreatureId(4), CreatureId(5)),
            ]
        );
    }

    #[test]
    fn adoption_runs_only_with_orphans_around() {
        let clock = ManualClock::default();
        let calm = state_with(vec![family(1, &[2])]);
        assert!(plan_tick(TickKind::Adoption, &calm, &clock).is_empty());

        let mut dead = family(1, &[2]);
        dead.dead = true;
        let state = state_with(vec![dead, family(3, &[])]);
        assert_eq!(
            plan_tick(TickKind::Adoption, &state, &clock),
            vec![
                Action::handle_parent_death(CreatureId(1)),
                Action::adopt_orphans()
            ]
        );
    }

    #[test]
    fn fight_ticks_follow_the_arena() {
        let clock = ManualClock::new(Timestamp(5));
        let mut state = state_with(vec![family(1, &[2]), family(3, &[4])]);
        assert_eq!(
            plan_tick(TickKind::FightSearch, &state, &clock),
            vec![Action::match_fighters()]
        );
        assert!(plan_tick(TickKind::FightRound, &state, &clock).is_empty());

        state.current_fight = FightState::Active {
            fighter1: FighterRef::new(CreatureId(1), CreatureId(2)),
            fighter2: FighterRef::new(CreatureId(3), CreatureId(4)),
        };
        assert!(plan_tick(TickKind::FightSearch, &state, &clock).is_empty());
        assert_eq!(
            plan_tick(TickKind::FightRound, &state, &clock),
            vec![Action::fight_round(Timestamp(5))]
        );
    }
}
