//! Read-only collaborators injected into every transition.
//!
//! [`PetEnv`] bundles the random source and the name pools. Transitions see
//! the environment through shared references only; it never carries state.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

/// Source of generated creature names.
pub trait NameOracle: Send + Sync {
    fn first_names(&self) -> &[String];
    fn surnames(&self) -> &[String];
}

/// Collaborators handed to [`reduce`](crate::engine::reduce).
#[derive(Clone, Copy)]
pub struct PetEnv<'a> {
    rng: &'a dyn RngOracle,
    names: &'a dyn NameOracle,
}

impl<'a> PetEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, names: &'a dyn NameOracle) -> Self {
        Self { rng, names }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn names(&self) -> &'a dyn NameOracle {
        self.names
    }
}

impl std::fmt::Debug for PetEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetEnv")
            .field("first_names", &self.names.first_names().len())
            .field("surnames", &self.names.surnames().len())
            .finish_non_exhaustive()
    }
}
