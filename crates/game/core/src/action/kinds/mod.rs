//! Concrete transitions grouped by concern.
mod care;
mod fight;
mod lifecycle;
mod orphan;

pub use care::{CarePetAction, DecayHungerAction, FeedAction, PetNeglectAction, TrainAction};
pub use fight::{FightRoundAction, MatchFightersAction, StartFightAction};
pub use lifecycle::{
    CreatePetAction, CreateTamagotchiAction, RemoveTamagotchiAction, breeding_delay_ms,
    breeding_remaining_ms,
};
pub use orphan::{AdoptOrphansAction, HandleParentDeathAction};

#[cfg(test)]
pub(crate) mod testing {
    //! Fixtures shared by the transition tests.

    use crate::action::Action;
    use crate::engine::{Transition, reduce};
    use crate::env::{NameOracle, PcgRng, PetEnv, RngOracle};
    use crate::state::{CreatureId, GameState, Pet, Stats, Tamagotchi, Timestamp};

    pub struct Names {
        pub first: Vec<String>,
        pub last: Vec<String>,
    }

    impl Default for Names {
        fn default() -> Self {
            Self {
                first: vec!["Mochi".to_string()],
                last: vec!["Pixelton".to_string()],
            }
        }
    }

    impl NameOracle for Names {
        fn first_names(&self) -> &[String] {
            &self.first
        }

        fn surnames(&self) -> &[String] {
            &self.last
        }
    }

    /// Returns scripted values for `range` in call order, then falls back to `min`.
    pub struct ScriptedRng {
        rolls: std::sync::Mutex<Vec<u32>>,
    }

    impl ScriptedRng {
        pub fn new(rolls: &[u32]) -> Self {
            let mut rolls = rolls.to_vec();
            rolls.reverse();
            Self {
                rolls: std::sync::Mutex::new(rolls),
            }
        }
    }

    impl RngOracle for ScriptedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }

        fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
            self.rolls
                .lock()
                .expect("rng script lock")
                .pop()
                .unwrap_or(min)
                .clamp(min, max)
        }
    }

    pub fn run(state: GameState, action: Action) -> Transition {
        run_with(state, &PcgRng, action)
    }

    pub fn run_with(state: GameState, rng: &dyn RngOracle, action: Action) -> Transition {
        let names = Names::default();
        reduce(state, PetEnv::new(rng, &names), &action)
    }

    pub fn tamagotchi(id: u64, stats: Stats) -> Tamagotchi {
        Tamagotchi::new(CreatureId(id), format!("Tama{id}"), "Pixelton", Timestamp::ZERO)
            .with_stats(stats)
    }

    pub fn pet(id: u64, parent: u64, stats: Stats) -> Pet {
        Pet::new(
            CreatureId(id),
            CreatureId(parent),
            format!("Pet{id}"),
            "Pixelton",
            Timestamp::ZERO,
        )
        .with_stats(stats)
    }

    /// Builds a state from `(tamagotchi, pets)` pairs.
    pub fn world(entries: Vec<(Tamagotchi, Vec<Pet>)>) -> GameState {
        let mut state = GameState::with_seed(7);
        for (mut parent, pets) in entries {
            for pet in pets {
                parent.pets.push(pet);
            }
            state.insert_tamagotchi(parent);
        }
        state
    }
}
