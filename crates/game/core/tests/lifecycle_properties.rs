//! Property tests over random trigger sequences.

use pet_core::{
    Action, CreatureId, DayPhase, FighterRef, GameState, Meter, NameOracle, PcgRng, PetEnv,
    Stats, Timestamp, reduce,
};
use proptest::prelude::*;

struct Names {
    first: Vec<String>,
    last: Vec<String>,
}

impl NameOracle for Names {
    fn first_names(&self) -> &[String] {
        &self.first
    }

    fn surnames(&self) -> &[String] {
        &self.last
    }
}

fn names() -> Names {
    Names {
        first: vec!["Mochi".into(), "Sprout".into()],
        last: vec!["Pixelton".into(), "Bytecraft".into()],
    }
}

#[derive(Debug, Clone)]
enum Op {
    Create,
    Feed(u64),
    Train(u64),
    Decay(u64, bool),
    Breed(u64),
    Care(u64, u64),
    Neglect(u64, u64),
    Adopt,
    Match,
    Round,
    Fight(u64, u64, u64, u64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let id = 1u64..=12;
    prop_oneof![
        Just(Op::Create),
        id.clone().prop_map(Op::Feed),
        id.clone().prop_map(Op::Train),
        (id.clone(), any::<bool>()).prop_map(|(id, night)| Op::Decay(id, night)),
        id.clone().prop_map(Op::Breed),
        (id.clone(), id.clone()).prop_map(|(p, c)| Op::Care(p, c)),
        (id.clone(), id.clone()).prop_map(|(p, c)| Op::Neglect(p, c)),
        Just(Op::Adopt),
        Just(Op::Match),
        Just(Op::Round),
        (id.clone(), id.clone(), id.clone(), id).prop_map(|(a, b, c, d)| Op::Fight(a, b, c, d)),
    ]
}

fn to_action(op: &Op, now: Timestamp) -> Action {
    match *op {
        Op::Create => Action::create_tamagotchi("Nova", now),
        Op::Feed(id) => Action::feed(CreatureId(id)),
        Op::Train(id) => Action::train(CreatureId(id)),
        Op::Decay(id, night) => {
            let phase = if night { DayPhase::Night } else { DayPhase::Day };
            Action::decay_hunger(CreatureId(id), phase)
        }
        Op::Breed(id) => Action::create_pet(CreatureId(id), now),
        Op::Care(p, c) => Action::care_pet(CreatureId(p), CreatureId(c)),
        Op::Neglect(p, c) => Action::pet_neglect(CreatureId(p), CreatureId(c)),
        Op::Adopt => Action::adopt_orphans(),
        Op::Match => Action::match_fighters(),
        Op::Round => Action::fight_round(now),
        Op::Fight(a, b, c, d) => Action::start_fight(
            FighterRef::new(CreatureId(a), CreatureId(b)),
            FighterRef::new(CreatureId(c), CreatureId(d)),
        ),
    }
}

fn all_stats(state: &GameState) -> Vec<Stats> {
    state
        .tamagotchis
        .iter()
        .flat_map(|t| std::iter::once(t.stats).chain(t.pets.iter().map(|p| p.stats)))
        .collect()
}

fn dead_on_board(state: &GameState) -> u32 {
    state
        .tamagotchis
        .iter()
        .map(|t| u32::from(t.dead) + t.pets.iter().filter(|p| p.dead).count() as u32)
        .sum()
}

proptest! {
    #[test]
    fn meter_adjust_is_clamped(start in 0u8..=100, delta in -500i32..=500) {
        let value = Meter::new(start).adjust(delta).value();
        prop_assert!(value <= 100);
        let expected = (i32::from(start) + delta).clamp(0, 100);
        prop_assert_eq!(i32::from(value), expected);
    }

    #[test]
    fn random_sequences_keep_invariants(
        seed in any::<u64>(),
        ops in proptest::collection::vec(arb_op(), 1..120),
    ) {
        let names = names();
        let env = PetEnv::new(&PcgRng, &names);
        let mut state = GameState::with_seed(seed);
        let mut now = Timestamp::ZERO;

        for op in &ops {
            now = now + 5_000;
            let dead_before = state.dead_count;
            let transition = reduce(state, env, &to_action(op, now));
            state = transition.state;

            prop_assert!(state.dead_count >= dead_before);
            for stats in all_stats(&state) {
                prop_assert!(stats.hunger.value() <= 100);
                prop_assert!(stats.happiness.value() <= 100);
                prop_assert!(stats.health.value() <= 100);
            }
            for tamagotchi in &state.tamagotchis {
                prop_assert!(tamagotchi.pets.len() <= 3);
                if tamagotchi.dead {
                    prop_assert!(tamagotchi.pets.iter().all(|p| p.dead || p.orphan));
                }
            }

            let fighting: Vec<FighterRef> = state
                .tamagotchis
                .iter()
                .flat_map(|t| {
                    t.pets
                        .iter()
                        .filter(|p| p.fighting)
                        .map(move |p| FighterRef::new(t.id, p.id))
                })
                .collect();
            match state.current_fight.fighters() {
                Some((a, b)) => {
                    prop_assert_eq!(fighting.len(), 2);
                    prop_assert!(fighting.contains(&a) && fighting.contains(&b));
                }
                None => prop_assert!(fighting.is_empty()),
            }
        }

        // Evolved pets leave the board alive, so every recorded death is still visible.
        prop_assert_eq!(state.dead_count, dead_on_board(&state));
    }
}
