//! Runtime wrapper around the static content the reducer consults.
//!
//! [`OracleManager`] bundles the loaded [`ContentPack`] with the deterministic
//! RNG so the worker can build a [`PetEnv`] for every reduction. The data is
//! immutable at runtime; dynamic state lives in [`pet_core::GameState`].
use std::sync::Arc;

use pet_content::{ContentPack, PhraseBook};
use pet_core::{PcgRng, PetEnv, RngOracle};

/// Manages the oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    content: Arc<ContentPack>,
    rng: PcgRng,
}

impl OracleManager {
    pub fn new(content: ContentPack) -> Self {
        Self {
            content: Arc::new(content),
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Borrows the oracles as the reducer's environment.
    pub fn as_env(&self) -> PetEnv<'_> {
        PetEnv::new(&self.rng, &self.content.names)
    }

    pub fn phrases(&self) -> &PhraseBook {
        &self.content.phrases
    }

    pub fn rng(&self) -> &dyn RngOracle {
        &self.rng
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::new(ContentPack::default())
    }
}
