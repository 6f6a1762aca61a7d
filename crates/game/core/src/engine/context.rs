//! Per-action scratch space: random rolls, name generation, the effect log,
//! and the shared death bookkeeping every stat-changing transition ends with.

use crate::config::GameConfig;
use crate::env::{PetEnv, compute_seed};
use crate::state::{CreatureId, GameState, Vitals};

use super::Effect;

/// Mutable context threaded through [`ActionTransition::apply`].
///
/// [`ActionTransition::apply`]: crate::action::ActionTransition::apply
pub struct ApplyContext<'a> {
    env: PetEnv<'a>,
    seed: u64,
    nonce: u64,
    rolls: u32,
    effects: Vec<Effect>,
}

impl<'a> ApplyContext<'a> {
    pub(crate) fn new(env: PetEnv<'a>, state: &GameState) -> Self {
        Self {
            env,
            seed: state.seed,
            nonce: state.nonce,
            rolls: 0,
            effects: Vec::new(),
        }
    }

    pub fn env(&self) -> PetEnv<'a> {
        self.env
    }

    /// Rolls an integer in `[min, max]`. Each call uses a fresh seed context.
    pub fn roll(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.env.rng().range(seed, min, max)
    }

    /// Picks an index into a collection of `len` items.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        let seed = self.next_seed();
        self.env.rng().index(seed, len)
    }

    pub fn first_name(&mut self) -> String {
        let pool = self.env.names().first_names();
        self.pick(pool.len())
            .map(|index| pool[index].clone())
            .unwrap_or_else(|| GameConfig::FALLBACK_FIRST_NAME.to_string())
    }

    pub fn surname(&mut self) -> String {
        let pool = self.env.names().surnames();
        self.pick(pool.len())
            .map(|index| pool[index].clone())
            .unwrap_or_default()
    }

    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Applies the death rule to a tamagotchi.
    ///
    /// A newly dead tamagotchi is counted once and all of its living pets
    /// become orphans in the same step.
    pub fn settle_tamagotchi(&mut self, state: &mut GameState, id: CreatureId) {
        let Some(tamagotchi) = state.tamagotchi_mut(id) else {
            return;
        };
        if !tamagotchi.settle_death() {
            return;
        }
        let orphaned = tamagotchi.orphan_pets();

        state.dead_count += 1;
        self.emit(Effect::Died { id });
        for pet_id in orphaned {
            self.emit(Effect::Orphaned {
                parent_id: id,
                pet_id,
            });
        }
    }

    /// Applies the death rule to a pet.
    pub fn settle_pet(&mut self, state: &mut GameState, parent_id: CreatureId, pet_id: CreatureId) {
        let Some(pet) = state.pet_mut(parent_id, pet_id) else {
            return;
        };
        if pet.settle_death() {
            state.dead_count += 1;
            self.emit(Effect::Died { id: pet_id });
        }
    }

    pub(crate) fn into_effects(self) -> Vec<Effect> {
        self.effects
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, self.rolls);
        self.rolls += 1;
        seed
    }
}
