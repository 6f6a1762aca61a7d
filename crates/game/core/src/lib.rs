//! Deterministic lifecycle rules for the Tamagotchi simulation.
//!
//! `pet-core` defines the canonical state tree (tamagotchis, their pets, the
//! active fight) and the pure transitions that move it forward. All state
//! changes flow through [`engine::reduce`], which takes the current
//! [`GameState`] by value together with an [`Action`] and hands back the next
//! state plus an [`Outcome`] describing what happened.
//!
//! The crate owns no clock, timer, or random source: timestamps arrive inside
//! action payloads and randomness is injected through [`env::RngOracle`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionKind, ActionTransition, AdoptOrphansAction, CarePetAction,
    CreatePetAction, CreateTamagotchiAction, DecayHungerAction, FeedAction, FightRoundAction,
    HandleParentDeathAction, MatchFightersAction, PetNeglectAction, RemoveTamagotchiAction,
    StartFightAction, TrainAction, breeding_delay_ms, breeding_remaining_ms,
};
pub use config::{GameConfig, StatDelta};
pub use engine::{Effect, Outcome, Transition, reduce};
pub use env::{NameOracle, PcgRng, PetEnv, RngOracle, compute_seed};
pub use error::SkipReason;
pub use state::{
    CreatureId, DayPhase, FightState, FighterRef, GameState, Meter, Mood, Pet, PetList, Stats,
    Tamagotchi, Timestamp, Vitals,
};
