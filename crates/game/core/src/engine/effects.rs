use crate::state::{CreatureId, FighterRef, Meter, Stats};

/// Observable consequence of an applied transition.
///
/// Effects are reported in the order they happened so drivers can turn them
/// into notifications without diffing snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    TamagotchiCreated {
        id: CreatureId,
    },
    TamagotchiRemoved {
        id: CreatureId,
        pets: usize,
    },
    StatsChanged {
        id: CreatureId,
        stats: Stats,
    },
    PetBorn {
        parent_id: CreatureId,
        pet_id: CreatureId,
    },
    Died {
        id: CreatureId,
    },
    Orphaned {
        parent_id: CreatureId,
        pet_id: CreatureId,
    },
    Adopted {
        pet_id: CreatureId,
        from: CreatureId,
        to: CreatureId,
    },
    FightStarted {
        fighter1: FighterRef,
        fighter2: FighterRef,
    },
    FightDamage {
        target: FighterRef,
        damage: u32,
        health: Meter,
    },
    FightEnded {
        winner: FighterRef,
        loser: FighterRef,
    },
    /// The fight was reset because a fighter left the state.
    FightAbandoned,
    Evolved {
        pet_id: CreatureId,
        tamagotchi_id: CreatureId,
    },
}

impl Effect {
    /// Deaths, births, adoptions and evolutions; everything a player would
    /// want to be told about.
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::TamagotchiCreated { .. }
                | Self::TamagotchiRemoved { .. }
                | Self::PetBorn { .. }
                | Self::Died { .. }
                | Self::Orphaned { .. }
                | Self::Adopted { .. }
                | Self::Evolved { .. }
        )
    }

    pub const fn is_fight(&self) -> bool {
        matches!(
            self,
            Self::FightStarted { .. }
                | Self::FightDamage { .. }
                | Self::FightEnded { .. }
                | Self::FightAbandoned
        )
    }
}
