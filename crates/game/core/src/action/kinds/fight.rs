//! Arena transitions: starting a fight, matchmaking, and resolving rounds.

use crate::action::{ActionKind, ActionTransition, living_pet};
use crate::config::GameConfig;
use crate::engine::{ApplyContext, Effect};
use crate::error::SkipReason;
use crate::state::{CreatureId, FightState, FighterRef, GameState, Timestamp};

/// Puts two pets into the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartFightAction {
    pub fighter1: FighterRef,
    pub fighter2: FighterRef,
}

impl StartFightAction {
    pub fn new(fighter1: FighterRef, fighter2: FighterRef) -> Self {
        Self { fighter1, fighter2 }
    }

    fn check_fighter(state: &GameState, fighter: FighterRef) -> Result<(), SkipReason> {
        let pet = living_pet(state, fighter.parent_id, fighter.pet_id)?;
        if pet.fighting {
            return Err(SkipReason::AlreadyFighting(fighter.pet_id));
        }
        Ok(())
    }
}

impl ActionTransition for StartFightAction {
    fn kind(&self) -> ActionKind {
        ActionKind::StartFight
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        if state.current_fight.is_active() {
            return Err(SkipReason::FightInProgress);
        }
        if self.fighter1.pet_id == self.fighter2.pet_id {
            return Err(SkipReason::SameFighter(self.fighter1.pet_id));
        }
        Self::check_fighter(state, self.fighter1)?;
        Self::check_fighter(state, self.fighter2)
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        for fighter in [self.fighter1, self.fighter2] {
            if let Some(pet) = state.pet_mut(fighter.parent_id, fighter.pet_id) {
                pet.fighting = true;
            }
        }
        state.current_fight = FightState::Active {
            fighter1: self.fighter1,
            fighter2: self.fighter2,
        };
        ctx.emit(Effect::FightStarted {
            fighter1: self.fighter1,
            fighter2: self.fighter2,
        });
    }
}

/// Picks two random fight-ready pets and starts a fight between them.
///
/// Orphans are never matched; they have nobody to fight for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchFightersAction;

impl ActionTransition for MatchFightersAction {
    fn kind(&self) -> ActionKind {
        ActionKind::MatchFighters
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        if state.current_fight.is_active() {
            return Err(SkipReason::FightInProgress);
        }
        if state.fight_candidates().len() < 2 {
            return Err(SkipReason::NotEnoughFighters);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let candidates = state.fight_candidates();
        let Some(first) = ctx.pick(candidates.len()) else {
            return;
        };
        // Draw the second from the remaining pool so the pair is distinct.
        let Some(mut second) = ctx.pick(candidates.len() - 1) else {
            return;
        };
        if second >= first {
            second += 1;
        }
        StartFightAction::new(candidates[first], candidates[second]).apply(state, ctx);
    }
}

/// Resolves one exchange of blows.
///
/// Each fighter rolls its damage independently; fighter 1's roll lands on
/// fighter 2 and vice versa. When either drops to zero health the fight ends:
/// fighter 1 wins if it still has health, otherwise fighter 2 does. The winner
/// gains maturity and evolves into a tamagotchi once mature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightRoundAction {
    pub now: Timestamp,
}

impl FightRoundAction {
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }

    fn strike(
        state: &mut GameState,
        ctx: &mut ApplyContext<'_>,
        target: FighterRef,
        damage: u32,
    ) -> bool {
        let Some(pet) = state.pet_mut(target.parent_id, target.pet_id) else {
            return false;
        };
        pet.stats.health = pet.stats.health.adjust(-(damage as i32));
        let health = pet.stats.health;
        ctx.emit(Effect::FightDamage {
            target,
            damage,
            health,
        });
        health.is_empty()
    }

    fn reset(state: &mut GameState, fighters: [FighterRef; 2]) {
        for fighter in fighters {
            if let Some(pet) = state.pet_mut(fighter.parent_id, fighter.pet_id) {
                pet.fighting = false;
            }
        }
        state.current_fight = FightState::Inactive;
    }

    fn evolve(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>, winner: FighterRef) {
        let mature = state.fighter(winner).is_some_and(|pet| pet.is_mature());
        if !mature {
            return;
        }
        let Some(pet) = state
            .tamagotchi_mut(winner.parent_id)
            .and_then(|parent| parent.take_pet(winner.pet_id))
        else {
            return;
        };
        let id: CreatureId = state.allocate_id();
        state.tamagotchis.push(pet.evolve(id, self.now));
        ctx.emit(Effect::Evolved {
            pet_id: winner.pet_id,
            tamagotchi_id: id,
        });
    }
}

impl ActionTransition for FightRoundAction {
    fn kind(&self) -> ActionKind {
        ActionKind::FightRound
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        if state.current_fight.is_active() {
            Ok(())
        } else {
            Err(SkipReason::NoActiveFight)
        }
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let Some((fighter1, fighter2)) = state.current_fight.fighters() else {
            return;
        };

        let present = |fighter| state.fighter(fighter).is_some_and(|pet| !pet.dead);
        if !present(fighter1) || !present(fighter2) {
            Self::reset(state, [fighter1, fighter2]);
            ctx.emit(Effect::FightAbandoned);
            return;
        }

        let damage_by_1 = ctx.roll(GameConfig::FIGHT_DAMAGE_MIN, GameConfig::FIGHT_DAMAGE_MAX);
        let damage_by_2 = ctx.roll(GameConfig::FIGHT_DAMAGE_MIN, GameConfig::FIGHT_DAMAGE_MAX);
        let down2 = Self::strike(state, ctx, fighter2, damage_by_1);
        let down1 = Self::strike(state, ctx, fighter1, damage_by_2);
        if !down1 && !down2 {
            return;
        }

        let (winner, loser) = if down1 {
            (fighter2, fighter1)
        } else {
            (fighter1, fighter2)
        };
        ctx.settle_pet(state, loser.parent_id, loser.pet_id);
        if let Some(pet) = state.pet_mut(winner.parent_id, winner.pet_id) {
            pet.maturity += 1;
        }
        Self::reset(state, [fighter1, fighter2]);
        ctx.emit(Effect::FightEnded { winner, loser });

        self.evolve(state, ctx, winner);
        // A winner left at zero health after a double knockout still dies.
        ctx.settle_pet(state, winner.parent_id, winner.pet_id);
    }
}
