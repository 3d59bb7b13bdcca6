//! Static solar-system records.
//!
//! A `SolarSystem` is immutable once the universe index has been loaded.
//! Stargate connections are stored as identifier lists, never as references,
//! so the graph can be shared freely between concurrent requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a solar system (the EVE `solar_system_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(pub u32);

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Security band as shown in game. The raw status is rounded to one decimal
/// before banding, so 0.45 counts as high-sec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityClass {
    HighSec,
    LowSec,
    NullSec,
}

impl SecurityClass {
    /// Classifies a raw security status.
    pub fn from_status(status: f64) -> SecurityClass {
        let rounded = (status * 10.0).round() / 10.0;
        if rounded >= 0.5 {
            SecurityClass::HighSec
        } else if rounded > 0.0 {
            SecurityClass::LowSec
        } else {
            SecurityClass::NullSec
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SecurityClass::HighSec => "high-sec",
            SecurityClass::LowSec => "low-sec",
            SecurityClass::NullSec => "null-sec",
        }
    }
}

/// Static attributes of a solar system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub id: SystemId,
    pub name: String,
    /// Raw security status in -1.0..=1.0.
    pub security_status: f64,
    pub region_id: RegionId,
    /// Systems reachable through a single stargate jump.
    #[serde(default)]
    pub neighbors: Vec<SystemId>,
}

impl SolarSystem {
    /// Returns the security band of this system.
    pub fn security_class(&self) -> SecurityClass {
        SecurityClass::from_status(self.security_status)
    }

    /// Returns true if a stargate connects this system to `other`.
    pub fn is_connected_to(&self, other: SystemId) -> bool {
        self.neighbors.contains(&other)
    }
}
