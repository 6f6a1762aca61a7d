//! Static flavour content for the simulation.
//!
//! This crate houses the data the rules never look at directly:
//! - Name pools used when a creature is born (implements [`pet_core::NameOracle`])
//! - Dialog lines keyed by [`pet_core::Mood`]
//!
//! Both come with built-in defaults and can be overridden from a TOML file
//! through [`ContentLoader`] (feature `loaders`). Content is consumed by the
//! runtime and never appears in game state.

pub mod names;
pub mod phrases;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use names::NameTable;
pub use phrases::PhraseBook;

#[cfg(feature = "loaders")]
pub use loaders::{ContentLoader, LoadResult};

/// Everything a driver needs besides the rules: names and dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentPack {
    pub names: NameTable,
    pub phrases: PhraseBook,
}
