//! The lifecycle reducer.
//!
//! [`reduce`] is the only entry point that moves a [`GameState`] forward. It
//! consumes the current state, routes the action through its
//! [`ActionTransition`], and returns the next state together with the
//! [`Outcome`]. Every transition is total: when a precondition does not hold
//! the state comes back unchanged and the outcome records why.

mod context;
mod effects;

pub use context::ApplyContext;
pub use effects::Effect;

use crate::action::{Action, ActionTransition};
use crate::env::PetEnv;
use crate::error::SkipReason;
use crate::state::GameState;

/// Result of feeding one action to the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The transition ran. `effects` may be empty for pure stat drift.
    Applied { effects: Vec<Effect> },
    /// A precondition failed and the state is untouched.
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            Self::Applied { effects } => effects,
            Self::Skipped(_) => &[],
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Skipped(reason) => Some(reason),
            Self::Applied { .. } => None,
        }
    }
}

/// Next state plus what happened on the way there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: Outcome,
}

/// Applies `action` to `state` and returns the resulting state.
///
/// The nonce advances only when the transition is applied, so skipped
/// triggers never perturb later random rolls.
pub fn reduce(state: GameState, env: PetEnv<'_>, action: &Action) -> Transition {
    match action {
        Action::CreateTamagotchi(t) => drive(t, state, env),
        Action::RemoveTamagotchi(t) => drive(t, state, env),
        Action::Feed(t) => drive(t, state, env),
        Action::Train(t) => drive(t, state, env),
        Action::DecayHunger(t) => drive(t, state, env),
        Action::CreatePet(t) => drive(t, state, env),
        Action::CarePet(t) => drive(t, state, env),
        Action::PetNeglect(t) => drive(t, state, env),
        Action::HandleParentDeath(t) => drive(t, state, env),
        Action::AdoptOrphans(t) => drive(t, state, env),
        Action::StartFight(t) => drive(t, state, env),
        Action::MatchFighters(t) => drive(t, state, env),
        Action::FightRound(t) => drive(t, state, env),
    }
}

/// Runs one transition through its two phases.
///
/// 1. `pre_validate` - read-only precondition check
/// 2. `apply` - mutation of the owned state
#[inline]
fn drive<T>(transition: &T, mut state: GameState, env: PetEnv<'_>) -> Transition
where
    T: ActionTransition,
{
    if let Err(reason) = transition.pre_validate(&state) {
        return Transition {
            state,
            outcome: Outcome::Skipped(reason),
        };
    }

    let mut ctx = ApplyContext::new(env, &state);
    transition.apply(&mut state, &mut ctx);
    state.nonce += 1;

    Transition {
        state,
        outcome: Outcome::Applied {
            effects: ctx.into_effects(),
        },
    }
}
