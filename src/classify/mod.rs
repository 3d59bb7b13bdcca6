//! Adjacency classification.
//!
//! Every faction warfare system sits in one of three tiers depending on how
//! far it is from the ownership boundary of its warzone. The tier is derived
//! fresh on every analysis pass because ownership changes over time.

pub mod frontline;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use frontline::{AdjacencyClassifier, Placement};

/// Strategic exposure of a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyTier {
    /// On the ownership boundary, or a permanent frontline.
    Frontline,
    /// One jump behind the front.
    CommandOperations,
    /// Two or more jumps from the front, or cut off from it.
    Rearguard,
}

/// All tiers, front to back.
pub const ALL_TIERS: [AdjacencyTier; 3] = [
    AdjacencyTier::Frontline,
    AdjacencyTier::CommandOperations,
    AdjacencyTier::Rearguard,
];

impl AdjacencyTier {
    /// Maps a jump distance to the nearest frontline onto a tier.
    pub const fn from_front_distance(distance: Option<u32>) -> AdjacencyTier {
        match distance {
            Some(0) => AdjacencyTier::Frontline,
            Some(1) => AdjacencyTier::CommandOperations,
            _ => AdjacencyTier::Rearguard,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AdjacencyTier::Frontline => "frontline",
            AdjacencyTier::CommandOperations => "command_operations",
            AdjacencyTier::Rearguard => "rearguard",
        }
    }

    /// One-line explanation shown in detailed reports.
    pub const fn description(self) -> &'static str {
        match self {
            AdjacencyTier::Frontline => "fastest contest rate",
            AdjacencyTier::CommandOperations => "medium contest rate",
            AdjacencyTier::Rearguard => "slowest contest rate",
        }
    }
}

impl fmt::Display for AdjacencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
