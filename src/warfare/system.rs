//! Enriched faction warfare system records.

use std::collections::BTreeMap;

use serde::Serialize;

use super::record::ContestStatus;
use crate::classify::AdjacencyTier;
use crate::universe::{Faction, SolarSystem, SystemId, Warzone};

/// A faction warfare system with its live state and derived values.
///
/// Borrows the static record from the universe index; everything else is
/// owned and rebuilt on every analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FwSystem<'u> {
    pub system: &'u SolarSystem,
    pub warzone: Warzone,
    pub owner: Faction,
    pub occupier: Faction,
    pub status: ContestStatus,
    pub victory_points: u64,
    pub victory_points_threshold: u64,
    pub advantage: BTreeMap<Faction, f64>,
    pub tier: AdjacencyTier,
    pub front_distance: Option<u32>,
    /// Victory points as a share of the threshold, clamped to 0..=100.
    pub contest_percent: f64,
    /// Attacker advantage minus owner advantage. Positive: the owner's
    /// opponent has the upper hand.
    pub net_advantage: f64,
    /// First warzone faction's advantage minus the second's. Positive
    /// favours Amarr or Caldari regardless of who owns the system.
    pub warzone_advantage: f64,
}

impl<'u> FwSystem<'u> {
    pub fn id(&self) -> SystemId {
        self.system.id
    }

    pub fn name(&self) -> &'u str {
        &self.system.name
    }

    pub fn is_contested(&self) -> bool {
        self.status.is_contested()
    }

    /// Advantage of a faction in this system, zero when not reported.
    pub fn advantage_of(&self, faction: Faction) -> f64 {
        self.advantage.get(&faction).copied().unwrap_or(0.0)
    }

    /// The faction trying to take this system from its owner.
    pub fn attacker(&self) -> Option<Faction> {
        self.warzone.opponent(self.owner)
    }
}
