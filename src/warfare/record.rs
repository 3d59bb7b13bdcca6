//! Raw upstream records.
//!
//! These mirror the ESI `/fw/systems/` and `/fw/stats/` payloads. Numeric
//! fields keep their signed wire types so that bad values can be detected
//! and reported instead of failing the whole decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::universe::SystemId;

/// Contest state of a system as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestStatus {
    Uncontested,
    Contested,
    Vulnerable,
    Captured,
}

impl ContestStatus {
    /// The boolean contested flag: anything other than `uncontested`.
    pub const fn is_contested(self) -> bool {
        !matches!(self, ContestStatus::Uncontested)
    }

    pub const fn label(self) -> &'static str {
        match self {
            ContestStatus::Uncontested => "uncontested",
            ContestStatus::Contested => "contested",
            ContestStatus::Vulnerable => "vulnerable",
            ContestStatus::Captured => "captured",
        }
    }
}

/// Live state of one faction warfare system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub solar_system_id: SystemId,
    pub owner_faction_id: u32,
    pub occupier_faction_id: u32,
    pub contested: ContestStatus,
    pub victory_points: i64,
    pub victory_points_threshold: i64,
    /// Advantage per faction id. Absent entries count as zero.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub advantage: BTreeMap<u32, f64>,
}

/// Kill counters for one faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KillTotals {
    pub yesterday: u64,
    pub last_week: u64,
    pub total: u64,
    /// Not part of the ESI payload; filled in by sources that track it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_hour: Option<u64>,
}

/// Victory point counters for one faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VictoryPointTotals {
    pub yesterday: u64,
    pub last_week: u64,
    pub total: u64,
}

/// Per-faction warzone statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub faction_id: u32,
    pub pilots: u64,
    pub systems_controlled: u64,
    pub kills: KillTotals,
    pub victory_points: VictoryPointTotals,
}

/// Everything one fetch returns for a warzone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub systems: Vec<SystemRecord>,
    #[serde(default)]
    pub statistics: Vec<StatsRecord>,
}
