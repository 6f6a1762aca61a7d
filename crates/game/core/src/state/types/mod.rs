mod common;
mod creature;
mod fight;

pub use common::{CreatureId, DayPhase, Meter, Timestamp};
pub use creature::{Mood, Pet, PetList, Stats, Tamagotchi, Vitals};
pub use fight::{FightState, FighterRef};
