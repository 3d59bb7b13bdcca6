//! Snapshot to `WarzoneStatus`, with no I/O.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::contest::{contest_percent, net_advantage, warzone_advantage};
use crate::classify::{AdjacencyClassifier, AdjacencyTier, Placement};
use crate::error::AnalysisError;
use crate::source::SourceError;
use crate::universe::{Faction, SystemId, UniverseIndex, Warzone};
use crate::warfare::{
    leading_faction, tally_factions, ContestStatus, FactionStats, FactionTally, FwSystem,
    SkipReason, SkippedRecord, Snapshot, StatsRecord, SystemRecord, TierCounts, WarzoneStatus,
};

/// A record that passed validation, with ids resolved to factions.
struct LiveState {
    owner: Faction,
    occupier: Faction,
    status: ContestStatus,
    victory_points: u64,
    threshold: u64,
    advantage: BTreeMap<Faction, f64>,
}

/// Analyzes one warzone against a snapshot.
///
/// The snapshot must hold exactly one record for every faction warfare
/// system of the warzone and nothing else; anything different is a data
/// source error. Individually malformed records are skipped and reported
/// in `WarzoneStatus::skipped`.
pub fn analyze_warzone<'u>(
    index: &'u UniverseIndex,
    warzone: Warzone,
    snapshot: &Snapshot,
) -> Result<WarzoneStatus<'u>, AnalysisError> {
    let records = index_records(index, warzone, &snapshot.systems)?;

    let mut live = BTreeMap::new();
    let mut skipped = Vec::new();
    for (id, record) in records {
        match validate(warzone, record) {
            Ok(state) => {
                live.insert(id, state);
            }
            Err(reason) => {
                let name = index
                    .system(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                warn!(system = %id, %name, %reason, "skipping malformed record");
                skipped.push(SkippedRecord {
                    system: id,
                    name,
                    reason,
                });
            }
        }
    }

    let owners: BTreeMap<SystemId, Faction> =
        live.iter().map(|(&id, state)| (id, state.owner)).collect();
    let placements = AdjacencyClassifier::new(index).classify(warzone, &owners);

    let mut systems = Vec::with_capacity(live.len());
    let mut tiers = TierCounts::default();
    for (id, state) in live {
        let system = index.system(id).ok_or(SourceError::UnknownSystem(id))?;
        let placement = placements.get(&id).copied().unwrap_or(Placement {
            tier: AdjacencyTier::Rearguard,
            front_distance: None,
        });
        tiers.add(placement.tier);
        systems.push(FwSystem {
            system,
            warzone,
            owner: state.owner,
            occupier: state.occupier,
            status: state.status,
            victory_points: state.victory_points,
            victory_points_threshold: state.threshold,
            contest_percent: contest_percent(state.victory_points, state.threshold),
            net_advantage: net_advantage(&state.advantage, warzone, state.owner),
            warzone_advantage: warzone_advantage(&state.advantage, warzone),
            advantage: state.advantage,
            tier: placement.tier,
            front_distance: placement.front_distance,
        });
    }

    let total_systems = systems.len();
    let tallies = tally_factions(warzone, &systems);
    let leader = leading_faction(&tallies, total_systems);
    let contested = systems.iter().filter(|s| s.is_contested()).count();
    let faction_stats = collect_stats(warzone, &snapshot.statistics, &tallies);

    debug!(
        %warzone,
        total_systems,
        contested,
        skipped = skipped.len(),
        leader = leader.map(Faction::name).unwrap_or("none"),
        "analyzed warzone"
    );

    Ok(WarzoneStatus {
        warzone,
        systems,
        tallies,
        total_systems,
        contested,
        tiers,
        leader,
        faction_stats,
        skipped,
    })
}

/// Keys records by system and checks them against the index.
fn index_records<'s>(
    index: &UniverseIndex,
    warzone: Warzone,
    records: &'s [SystemRecord],
) -> Result<BTreeMap<SystemId, &'s SystemRecord>, SourceError> {
    let mut by_id = BTreeMap::new();
    for record in records {
        let id = record.solar_system_id;
        match index.warzone_of(id) {
            Some(found) if found == warzone => {}
            Some(found) => {
                return Err(SourceError::ForeignSystem {
                    system: id,
                    expected: warzone,
                    found,
                })
            }
            None if index.system(id).is_some() => return Err(SourceError::NotFactionWarfare(id)),
            None => return Err(SourceError::UnknownSystem(id)),
        }
        if by_id.insert(id, record).is_some() {
            return Err(SourceError::DuplicateRecord(id));
        }
    }

    if let Some(&missing) = index
        .fw_system_ids(warzone)
        .iter()
        .find(|id| !by_id.contains_key(id))
    {
        return Err(SourceError::MissingSystem {
            system: missing,
            warzone,
        });
    }
    Ok(by_id)
}

fn belligerent(warzone: Warzone, faction_id: u32) -> Option<Faction> {
    Faction::from_id(faction_id).filter(|f| warzone.contains(*f))
}

fn validate(warzone: Warzone, record: &SystemRecord) -> Result<LiveState, SkipReason> {
    let victory_points =
        u64::try_from(record.victory_points).map_err(|_| SkipReason::NegativeVictoryPoints {
            victory_points: record.victory_points,
        })?;
    let threshold = u64::try_from(record.victory_points_threshold)
        .ok()
        .filter(|t| *t > 0)
        .ok_or(SkipReason::NonPositiveThreshold {
            threshold: record.victory_points_threshold,
        })?;
    let owner = belligerent(warzone, record.owner_faction_id).ok_or(SkipReason::ForeignOwner {
        faction_id: record.owner_faction_id,
    })?;
    let occupier =
        belligerent(warzone, record.occupier_faction_id).ok_or(SkipReason::ForeignOccupier {
            faction_id: record.occupier_faction_id,
        })?;

    let mut advantage = BTreeMap::new();
    for (&faction_id, &value) in &record.advantage {
        if !value.is_finite() {
            return Err(SkipReason::NonFiniteAdvantage { faction_id });
        }
        // Entries for factions outside the known set carry no meaning here.
        if let Some(faction) = Faction::from_id(faction_id) {
            advantage.insert(faction, value);
        }
    }

    Ok(LiveState {
        owner,
        occupier,
        status: record.contested,
        victory_points,
        threshold,
        advantage,
    })
}

/// Keeps the statistics of the two belligerents, in warzone order, and
/// cross-checks `systems_controlled` against the computed tally.
fn collect_stats(
    warzone: Warzone,
    statistics: &[StatsRecord],
    tallies: &[FactionTally; 2],
) -> Vec<FactionStats> {
    tallies
        .iter()
        .filter_map(|tally| {
            let stats = statistics
                .iter()
                .filter_map(FactionStats::from_record)
                .find(|s| s.faction == tally.faction)?;
            if stats.systems_controlled != tally.owned as u64 {
                warn!(
                    %warzone,
                    faction = tally.faction.name(),
                    reported = stats.systems_controlled,
                    counted = tally.owned,
                    "upstream systems_controlled disagrees with snapshot"
                );
            }
            Some(stats)
        })
        .collect()
}
