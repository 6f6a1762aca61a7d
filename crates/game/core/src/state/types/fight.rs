use std::fmt;

use super::common::CreatureId;

/// Addresses a pet through its owning tamagotchi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterRef {
    pub parent_id: CreatureId,
    pub pet_id: CreatureId,
}

impl FighterRef {
    pub const fn new(parent_id: CreatureId, pet_id: CreatureId) -> Self {
        Self { parent_id, pet_id }
    }
}

impl fmt::Display for FighterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent_id, self.pet_id)
    }
}

/// The single arena slot. At most one pairing is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightState {
    #[default]
    Inactive,
    Active {
        fighter1: FighterRef,
        fighter2: FighterRef,
    },
}

impl FightState {
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub const fn fighters(&self) -> Option<(FighterRef, FighterRef)> {
        match *self {
            Self::Active { fighter1, fighter2 } => Some((fighter1, fighter2)),
            Self::Inactive => None,
        }
    }

    /// Returns true if `pet_id` is one of the current fighters.
    pub fn involves(&self, pet_id: CreatureId) -> bool {
        self.fighters()
            .is_some_and(|(a, b)| a.pet_id == pet_id || b.pet_id == pet_id)
    }

    /// Points the matching fighter reference at its new owner after adoption.
    pub fn reparent(&mut self, pet_id: CreatureId, parent_id: CreatureId) {
        if let Self::Active { fighter1, fighter2 } = self {
            for fighter in [fighter1, fighter2] {
                if fighter.pet_id == pet_id {
                    fighter.parent_id = parent_id;
                }
            }
        }
    }
}
