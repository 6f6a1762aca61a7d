//! Named triggers accepted by the reducer.
//!
//! Each trigger carries a minimal typed payload (an id, a parent/pet pair, or
//! a fighter pair) and implements [`ActionTransition`]. Drivers wrap them in
//! [`Action`] and hand them to [`reduce`](crate::engine::reduce).
mod kinds;

pub use kinds::{
    AdoptOrphansAction, CarePetAction, CreatePetAction, CreateTamagotchiAction,
    DecayHungerAction, FeedAction, FightRoundAction, HandleParentDeathAction,
    MatchFightersAction, PetNeglectAction, RemoveTamagotchiAction, StartFightAction, TrainAction,
    breeding_delay_ms, breeding_remaining_ms,
};

use crate::engine::ApplyContext;
use crate::error::SkipReason;
use crate::state::{CreatureId, DayPhase, FighterRef, GameState, Pet, Tamagotchi, Timestamp};

/// Defines how one trigger moves the state forward.
///
/// `pre_validate` sees the state before mutation and decides whether the
/// trigger is eligible. `apply` assumes it is and must not fail; anything it
/// could trip over belongs in `pre_validate`.
pub trait ActionTransition {
    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), SkipReason> {
        Ok(())
    }

    /// Applies the transition to the owned state.
    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>);
}

/// Discriminant of [`Action`], used for logging and metrics labels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    CreateTamagotchi,
    RemoveTamagotchi,
    Feed,
    Train,
    DecayHunger,
    CreatePet,
    CarePet,
    PetNeglect,
    HandleParentDeath,
    AdoptOrphans,
    StartFight,
    MatchFighters,
    FightRound,
}

/// Every trigger the reducer understands.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    CreateTamagotchi(CreateTamagotchiAction),
    RemoveTamagotchi(RemoveTamagotchiAction),
    Feed(FeedAction),
    Train(TrainAction),
    DecayHunger(DecayHungerAction),
    CreatePet(CreatePetAction),
    CarePet(CarePetAction),
    PetNeglect(PetNeglectAction),
    HandleParentDeath(HandleParentDeathAction),
    AdoptOrphans(AdoptOrphansAction),
    StartFight(StartFightAction),
    MatchFighters(MatchFightersAction),
    FightRound(FightRoundAction),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::CreateTamagotchi(t) => t.kind(),
            Self::RemoveTamagotchi(t) => t.kind(),
            Self::Feed(t) => t.kind(),
            Self::Train(t) => t.kind(),
            Self::DecayHunger(t) => t.kind(),
            Self::CreatePet(t) => t.kind(),
            Self::CarePet(t) => t.kind(),
            Self::PetNeglect(t) => t.kind(),
            Self::HandleParentDeath(t) => t.kind(),
            Self::AdoptOrphans(t) => t.kind(),
            Self::StartFight(t) => t.kind(),
            Self::MatchFighters(t) => t.kind(),
            Self::FightRound(t) => t.kind(),
        }
    }

    pub fn create_tamagotchi(first_name: impl Into<String>, now: Timestamp) -> Self {
        Self::CreateTamagotchi(CreateTamagotchiAction::new(first_name, now))
    }

    pub fn remove_tamagotchi(id: CreatureId) -> Self {
        Self::RemoveTamagotchi(RemoveTamagotchiAction::new(id))
    }

    pub fn feed(id: CreatureId) -> Self {
        Self::Feed(FeedAction::new(id))
    }

    pub fn train(id: CreatureId) -> Self {
        Self::Train(TrainAction::new(id))
    }

    pub fn decay_hunger(id: CreatureId, phase: DayPhase) -> Self {
        Self::DecayHunger(DecayHungerAction::new(id, phase))
    }

    pub fn create_pet(parent_id: CreatureId, now: Timestamp) -> Self {
        Self::CreatePet(CreatePetAction::new(parent_id, now))
    }

    pub fn care_pet(parent_id: CreatureId, pet_id: CreatureId) -> Self {
        Self::CarePet(CarePetAction::new(parent_id, pet_id))
    }

    pub fn pet_neglect(parent_id: CreatureId, pet_id: CreatureId) -> Self {
        Self::PetNeglect(PetNeglectAction::new(parent_id, pet_id))
    }

    pub fn handle_parent_death(id: CreatureId) -> Self {
        Self::HandleParentDeath(HandleParentDeathAction::new(id))
    }

    pub fn adopt_orphans() -> Self {
        Self::AdoptOrphans(AdoptOrphansAction)
    }

    pub fn start_fight(fighter1: FighterRef, fighter2: FighterRef) -> Self {
        Self::StartFight(StartFightAction::new(fighter1, fighter2))
    }

    pub fn match_fighters() -> Self {
        Self::MatchFighters(MatchFightersAction)
    }

    pub fn fight_round(now: Timestamp) -> Self {
        Self::FightRound(FightRoundAction::new(now))
    }
}

/// Looks up a tamagotchi that is still alive.
pub(crate) fn living_tamagotchi(
    state: &GameState,
    id: CreatureId,
) -> Result<&Tamagotchi, SkipReason> {
    let tamagotchi = state
        .tamagotchi(id)
        .ok_or(SkipReason::TamagotchiNotFound(id))?;
    if tamagotchi.dead {
        return Err(SkipReason::Dead(id));
    }
    Ok(tamagotchi)
}

/// Looks up a pet that is still alive.
pub(crate) fn living_pet(
    state: &GameState,
    parent_id: CreatureId,
    pet_id: CreatureId,
) -> Result<&Pet, SkipReason> {
    let parent = state
        .tamagotchi(parent_id)
        .ok_or(SkipReason::TamagotchiNotFound(parent_id))?;
    let pet = parent.pet(pet_id).ok_or(SkipReason::PetNotFound {
        parent: parent_id,
        pet: pet_id,
    })?;
    if pet.dead {
        return Err(SkipReason::Dead(pet_id));
    }
    Ok(pet)
}
