//! Orphaning and adoption.

use crate::action::{ActionKind, ActionTransition};
use crate::engine::{ApplyContext, Effect};
use crate::error::SkipReason;
use crate::state::{CreatureId, GameState};

/// Marks every living pet of a dead tamagotchi as orphaned.
///
/// The death rule already does this when a tamagotchi dies inside a
/// transition, so for such parents the action is a no-op that reports no
/// effects. It exists for drivers that observe deaths out of band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleParentDeathAction {
    pub id: CreatureId,
}

impl HandleParentDeathAction {
    pub fn new(id: CreatureId) -> Self {
        Self { id }
    }
}

impl ActionTransition for HandleParentDeathAction {
    fn kind(&self) -> ActionKind {
        ActionKind::HandleParentDeath
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        let parent = state
            .tamagotchi(self.id)
            .ok_or(SkipReason::TamagotchiNotFound(self.id))?;
        if !parent.dead {
            return Err(SkipReason::Alive(self.id));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let Some(parent) = state.tamagotchi_mut(self.id) else {
            return;
        };
        for pet_id in parent.orphan_pets() {
            ctx.emit(Effect::Orphaned {
                parent_id: self.id,
                pet_id,
            });
        }
    }
}

/// Moves orphans to living tamagotchis with free capacity.
///
/// Dead parents are visited in list order, and each of their living orphans
/// goes to the first living tamagotchi (again in list order) that still has
/// room. Orphans that find no home stay where they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdoptOrphansAction;

impl ActionTransition for AdoptOrphansAction {
    fn kind(&self) -> ActionKind {
        ActionKind::AdoptOrphans
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        if state.has_orphans() && state.tamagotchis.iter().any(|t| t.can_adopt()) {
            Ok(())
        } else {
            Err(SkipReason::NoAdoption)
        }
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        for from_index in 0..state.tamagotchis.len() {
            if !state.tamagotchis[from_index].dead {
                continue;
            }
            let from = state.tamagotchis[from_index].id;
            let orphans: Vec<CreatureId> = state.tamagotchis[from_index]
                .pets
                .iter()
                .filter(|pet| pet.orphan && !pet.dead)
                .map(|pet| pet.id)
                .collect();

            for pet_id in orphans {
                let Some(to_index) = state.tamagotchis.iter().position(|t| t.can_adopt()) else {
                    return;
                };
                let Some(mut pet) = state.tamagotchis[from_index].take_pet(pet_id) else {
                    continue;
                };
                let to = state.tamagotchis[to_index].id;
                pet.orphan = false;
                pet.parent_id = to;
                if state.tamagotchis[to_index].pets.try_push(pet).is_err() {
                    continue;
                }
                state.current_fight.reparent(pet_id, to);
                ctx.emit(Effect::Adopted { pet_id, from, to });
            }
        }
    }
}
