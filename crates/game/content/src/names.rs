//! Name pools for newborn creatures.

use pet_core::NameOracle;

const FIRST_NAMES: [&str; 16] = [
    "Luna", "Nova", "Pixel", "Byte", "Echo", "Ziggy", "Cosmo", "Nebula", "Chip", "Dot", "Spark",
    "Glitch", "Binary", "Data", "Vector", "Cyber",
];

const SURNAMES: [&str; 10] = [
    "Starweaver",
    "Bytecraft",
    "Pixelton",
    "Cloudweaver",
    "Datasmith",
    "Codewalker",
    "Bitweaver",
    "Chipmaker",
    "Streamweaver",
    "Netwalker",
];

/// First names for pets and surnames for new families.
///
/// A pet inherits its parent's surname, so the surname pool is only drawn
/// from when a tamagotchi is created by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NameTable {
    pub first_names: Vec<String>,
    pub surnames: Vec<String>,
}

impl NameTable {
    pub fn new(first_names: Vec<String>, surnames: Vec<String>) -> Self {
        Self {
            first_names,
            surnames,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_names.is_empty() && self.surnames.is_empty()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new(
            FIRST_NAMES.iter().map(|s| s.to_string()).collect(),
            SURNAMES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl NameOracle for NameTable {
    fn first_names(&self) -> &[String] {
        &self.first_names
    }

    fn surnames(&self) -> &[String] {
        &self.surnames
    }
}
