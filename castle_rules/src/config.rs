//! Castle definition: rooms, content corpora and the door range.
//!
//! The default castle is compiled into the binary from `data/castle.toml`.

use serde::{Deserialize, Serialize};

use crate::content::ContentCorpus;
use crate::error::ConfigError;

const BUILTIN_CASTLE: &str = include_str!("../data/castle.toml");

/// How many doors the player may be offered before each room.
///
/// Always holds `1 <= min <= max`; the only ways to build one are
/// [`DoorRange::new`], `Default` and deserialization, which all enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DoorBounds")]
pub struct DoorRange {
    min: u32,
    max: u32,
}

/// Unchecked door bounds as written in a castle definition.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DoorBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for DoorRange {
    fn default() -> Self {
        Self { min: 2, max: 4 }
    }
}

impl DoorRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidDoorRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl TryFrom<DoorBounds> for DoorRange {
    type Error = ConfigError;

    fn try_from(bounds: DoorBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min, bounds.max)
    }
}

/// Immutable description of a castle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastleConfig {
    #[serde(default)]
    pub doors: DoorRange,

    /// Room names, one room per entry.
    #[serde(default)]
    pub rooms: Vec<String>,

    #[serde(default)]
    pub clues: Vec<String>,

    #[serde(default)]
    pub senses: Vec<String>,
}

impl CastleConfig {
    /// The castle shipped with the game.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CASTLE)
    }

    /// Parse and validate a castle definition.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// The text corpora used by the sense/clue generator.
    pub fn corpus(&self) -> ContentCorpus {
        ContentCorpus {
            clues: self.clues.clone(),
            senses: self.senses.clone(),
        }
    }
}
