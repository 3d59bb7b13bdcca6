//! Per-warzone aggregates.
//!
//! A `WarzoneStatus` is built fresh by each analysis call and has no
//! identity beyond it.

use serde::Serialize;
use thiserror::Error;

use super::record::{KillTotals, StatsRecord, VictoryPointTotals};
use super::system::FwSystem;
use crate::classify::AdjacencyTier;
use crate::universe::{Faction, SystemId, Warzone};

/// Counts attributed to one belligerent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactionTally {
    pub faction: Faction,
    /// Systems owned.
    pub owned: usize,
    /// Systems occupied.
    pub occupied: usize,
    /// Contested systems the faction currently occupies.
    pub contested: usize,
    /// Share of the counted systems owned, 0..=100.
    pub control_percent: f64,
}

/// Number of systems per adjacency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TierCounts {
    pub frontline: usize,
    pub command_operations: usize,
    pub rearguard: usize,
}

impl TierCounts {
    pub fn add(&mut self, tier: AdjacencyTier) {
        match tier {
            AdjacencyTier::Frontline => self.frontline += 1,
            AdjacencyTier::CommandOperations => self.command_operations += 1,
            AdjacencyTier::Rearguard => self.rearguard += 1,
        }
    }

    pub fn get(&self, tier: AdjacencyTier) -> usize {
        match tier {
            AdjacencyTier::Frontline => self.frontline,
            AdjacencyTier::CommandOperations => self.command_operations,
            AdjacencyTier::Rearguard => self.rearguard,
        }
    }

    pub fn total(&self) -> usize {
        self.frontline + self.command_operations + self.rearguard
    }
}

/// Why a single upstream record was left out of the analysis.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("negative victory points ({victory_points})")]
    NegativeVictoryPoints { victory_points: i64 },

    #[error("victory point threshold {threshold} is not positive")]
    NonPositiveThreshold { threshold: i64 },

    #[error("owner faction {faction_id} does not fight in this warzone")]
    ForeignOwner { faction_id: u32 },

    #[error("occupier faction {faction_id} does not fight in this warzone")]
    ForeignOccupier { faction_id: u32 },

    #[error("advantage for faction {faction_id} is not a finite number")]
    NonFiniteAdvantage { faction_id: u32 },
}

/// A record excluded from every aggregate of its warzone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub system: SystemId,
    pub name: String,
    pub reason: SkipReason,
}

/// Upstream statistics for one belligerent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactionStats {
    pub faction: Faction,
    pub pilots: u64,
    pub systems_controlled: u64,
    pub kills: KillTotals,
    pub victory_points: VictoryPointTotals,
}

impl FactionStats {
    /// Converts a raw record; `None` when the faction id is unknown.
    pub fn from_record(record: &StatsRecord) -> Option<FactionStats> {
        Some(FactionStats {
            faction: Faction::from_id(record.faction_id)?,
            pilots: record.pilots,
            systems_controlled: record.systems_controlled,
            kills: record.kills,
            victory_points: record.victory_points,
        })
    }
}

/// Snapshot analysis of one warzone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarzoneStatus<'u> {
    pub warzone: Warzone,
    /// Analyzed systems in ascending id order.
    pub systems: Vec<FwSystem<'u>>,
    /// One tally per belligerent, in `Warzone::factions` order.
    pub tallies: [FactionTally; 2],
    /// Systems counted in the aggregates (skipped records excluded).
    pub total_systems: usize,
    pub contested: usize,
    pub tiers: TierCounts,
    /// Faction owning a strict majority of the counted systems.
    pub leader: Option<Faction>,
    pub faction_stats: Vec<FactionStats>,
    pub skipped: Vec<SkippedRecord>,
}

impl<'u> WarzoneStatus<'u> {
    /// Returns the tally of a belligerent.
    pub fn tally(&self, faction: Faction) -> Option<&FactionTally> {
        self.tallies.iter().find(|t| t.faction == faction)
    }

    /// Returns the analyzed record of a system.
    pub fn system(&self, id: SystemId) -> Option<&FwSystem<'u>> {
        self.systems
            .binary_search_by_key(&id, |s| s.id())
            .ok()
            .map(|i| &self.systems[i])
    }

    /// Returns upstream statistics for a belligerent, if reported.
    pub fn stats(&self, faction: Faction) -> Option<&FactionStats> {
        self.faction_stats.iter().find(|s| s.faction == faction)
    }
}

/// Tallies owners, occupiers, and contested systems for the two belligerents.
pub fn tally_factions(warzone: Warzone, systems: &[FwSystem<'_>]) -> [FactionTally; 2] {
    let (a, b) = warzone.factions();
    let total = systems.len();
    [a, b].map(|faction| {
        let owned = systems.iter().filter(|s| s.owner == faction).count();
        let occupied = systems.iter().filter(|s| s.occupier == faction).count();
        let contested = systems
            .iter()
            .filter(|s| s.occupier == faction && s.is_contested())
            .count();
        let control_percent = if total > 0 {
            owned as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        FactionTally {
            faction,
            owned,
            occupied,
            contested,
            control_percent,
        }
    })
}

/// Returns the faction owning strictly more than half of `total` systems.
pub fn leading_faction(tallies: &[FactionTally], total: usize) -> Option<Faction> {
    tallies
        .iter()
        .find(|t| t.owned * 2 > total)
        .map(|t| t.faction)
}
