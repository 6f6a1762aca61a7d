//! Event types for different topics.

use pet_core::{ActionKind, CreatureId, Effect, Mood, SkipReason};
use serde::{Deserialize, Serialize};

/// A single effect produced by an applied action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEvent {
    /// Nonce of the action that produced the effect.
    pub nonce: u64,
    pub action: ActionKind,
    pub effect: Effect,
}

/// An action the reducer declined to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEvent {
    pub action: ActionKind,
    pub reason: SkipReason,
}

/// A line spoken by a living creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogEvent {
    pub speaker: CreatureId,
    pub name: String,
    pub mood: Mood,
    pub line: String,
}
