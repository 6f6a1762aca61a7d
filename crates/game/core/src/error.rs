//! Reasons a transition can decline to run.
//!
//! Nothing in this crate fails fatally. A trigger whose entity is missing or
//! whose precondition does not hold is skipped, and the [`SkipReason`] is
//! reported in the [`Outcome`](crate::engine::Outcome) so drivers can log it.
//! The next tick re-evaluates eligibility on its own, so nothing is retried.

use crate::state::CreatureId;

/// Why a transition left the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    #[error("tamagotchi {0} not found")]
    TamagotchiNotFound(CreatureId),

    #[error("pet {pet} not found under tamagotchi {parent}")]
    PetNotFound { parent: CreatureId, pet: CreatureId },

    #[error("{0} is dead")]
    Dead(CreatureId),

    #[error("{0} is still alive")]
    Alive(CreatureId),

    #[error("tamagotchi {0} already owns the maximum number of pets")]
    CapacityFull(CreatureId),

    #[error("tamagotchi {id} cannot breed for another {remaining_ms}ms")]
    BreedingNotDue { id: CreatureId, remaining_ms: u64 },

    #[error("a fight is already in progress")]
    FightInProgress,

    #[error("no fight is in progress")]
    NoActiveFight,

    #[error("pet {0} is already fighting")]
    AlreadyFighting(CreatureId),

    #[error("a pet cannot fight itself ({0})")]
    SameFighter(CreatureId),

    #[error("fewer than two pets are available to fight")]
    NotEnoughFighters,

    #[error("no orphaned pet could be placed with a living tamagotchi")]
    NoAdoption,

    #[error("name must not be empty")]
    EmptyName,
}

impl SkipReason {
    /// Returns a static identifier for the skip variant.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TamagotchiNotFound(_) => "tamagotchi_not_found",
            Self::PetNotFound { .. } => "pet_not_found",
            Self::Dead(_) => "dead",
            Self::Alive(_) => "alive",
            Self::CapacityFull(_) => "capacity_full",
            Self::BreedingNotDue { .. } => "breeding_not_due",
            Self::FightInProgress => "fight_in_progress",
            Self::NoActiveFight => "no_active_fight",
            Self::AlreadyFighting(_) => "already_fighting",
            Self::SameFighter(_) => "same_fighter",
            Self::NotEnoughFighters => "not_enough_fighters",
            Self::NoAdoption => "no_adoption",
            Self::EmptyName => "empty_name",
        }
    }
}
