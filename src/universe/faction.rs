//! Faction and warzone definitions.
//!
//! Factions are keyed by their EVE faction id. The two warzones and the
//! faction pairs fighting over them are fixed by the game, so both live here
//! as plain enums rather than in the loaded dataset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AnalysisError;

/// Raised when an upstream faction id does not name a known faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown faction id {0}")]
pub struct UnknownFaction(pub u32);

/// An NPC faction that appears in faction warfare data.
///
/// Discriminants are the EVE faction ids, so `faction as u32` is the wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum Faction {
    CaldariState = 500_001,
    MinmatarRepublic = 500_002,
    AmarrEmpire = 500_003,
    GallenteFederation = 500_004,
    GuristasPirates = 500_010,
    AngelCartel = 500_011,
}

/// All known factions in id order.
pub const ALL_FACTIONS: [Faction; 6] = [
    Faction::CaldariState,
    Faction::MinmatarRepublic,
    Faction::AmarrEmpire,
    Faction::GallenteFederation,
    Faction::GuristasPirates,
    Faction::AngelCartel,
];

impl Faction {
    /// Returns the EVE faction id.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Returns the in-game display name.
    pub const fn name(self) -> &'static str {
        match self {
            Faction::CaldariState => "Caldari State",
            Faction::MinmatarRepublic => "Minmatar Republic",
            Faction::AmarrEmpire => "Amarr Empire",
            Faction::GallenteFederation => "Gallente Federation",
            Faction::GuristasPirates => "Guristas Pirates",
            Faction::AngelCartel => "Angel Cartel",
        }
    }

    /// Returns the short lowercase token accepted on the command line.
    pub const fn token(self) -> &'static str {
        match self {
            Faction::CaldariState => "caldari",
            Faction::MinmatarRepublic => "minmatar",
            Faction::AmarrEmpire => "amarr",
            Faction::GallenteFederation => "gallente",
            Faction::GuristasPirates => "guristas",
            Faction::AngelCartel => "angel",
        }
    }

    /// Looks up a faction by its EVE faction id.
    pub fn from_id(id: u32) -> Option<Faction> {
        ALL_FACTIONS.iter().copied().find(|f| f.id() == id)
    }

    /// Returns the warzone this faction fights in, if any.
    pub fn warzone(self) -> Option<Warzone> {
        ALL_WARZONES.iter().copied().find(|w| w.contains(self))
    }
}

impl From<Faction> for u32 {
    fn from(faction: Faction) -> u32 {
        faction.id()
    }
}

impl TryFrom<u32> for Faction {
    type Error = UnknownFaction;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Faction::from_id(id).ok_or(UnknownFaction(id))
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = AnalysisError;

    /// Accepts the short token (`amarr`), the full name in any case, or the
    /// numeric faction id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Ok(id) = needle.parse::<u32>() {
            return Faction::from_id(id)
                .ok_or_else(|| AnalysisError::InvalidArgument(format!("unknown faction id '{}'", id)));
        }
        ALL_FACTIONS
            .iter()
            .copied()
            .find(|f| f.token() == needle || f.name().to_lowercase() == needle)
            .ok_or_else(|| AnalysisError::InvalidArgument(format!("unknown faction '{}'", s.trim())))
    }
}

/// One of the two faction warfare theaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warzone {
    AmarrMinmatar,
    CaldariGallente,
}

/// Both warzones in reporting order.
pub const ALL_WARZONES: [Warzone; 2] = [Warzone::AmarrMinmatar, Warzone::CaldariGallente];

impl Warzone {
    /// Returns the two opposing factions. The first one is the reference
    /// side for fixed-orientation advantage values.
    pub const fn factions(self) -> (Faction, Faction) {
        match self {
            Warzone::AmarrMinmatar => (Faction::AmarrEmpire, Faction::MinmatarRepublic),
            Warzone::CaldariGallente => (Faction::CaldariState, Faction::GallenteFederation),
        }
    }

    /// Returns the token used in datasets and on the command line.
    pub const fn token(self) -> &'static str {
        match self {
            Warzone::AmarrMinmatar => "amarr_minmatar",
            Warzone::CaldariGallente => "caldari_gallente",
        }
    }

    /// Returns the human-readable warzone name.
    pub const fn name(self) -> &'static str {
        match self {
            Warzone::AmarrMinmatar => "Amarr-Minmatar Warzone",
            Warzone::CaldariGallente => "Caldari-Gallente Warzone",
        }
    }

    /// Returns true if the faction is one of the two belligerents.
    pub fn contains(self, faction: Faction) -> bool {
        let (a, b) = self.factions();
        faction == a || faction == b
    }

    /// Returns the faction opposing `faction` in this warzone.
    pub fn opponent(self, faction: Faction) -> Option<Faction> {
        let (a, b) = self.factions();
        if faction == a {
            Some(b)
        } else if faction == b {
            Some(a)
        } else {
            None
        }
    }
}

impl fmt::Display for Warzone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Warzone {
    type Err = AnalysisError;

    /// Parses a warzone token. Case-insensitive; `-` is accepted for `_`.
    /// Anything else is rejected rather than mapped onto a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        ALL_WARZONES
            .iter()
            .copied()
            .find(|w| w.token() == needle)
            .ok_or_else(|| AnalysisError::InvalidArgument(format!("unknown warzone '{}'", s.trim())))
    }
}
