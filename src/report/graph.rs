//! Node/edge export of an analyzed warzone, for map rendering.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::classify::AdjacencyTier;
use crate::universe::{Faction, RegionId, SystemId, UniverseIndex, Warzone};
use crate::warfare::WarzoneStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: SystemId,
    pub name: String,
    pub region_id: RegionId,
    pub security_status: f64,
    pub owner: Faction,
    pub occupier: Faction,
    pub tier: AdjacencyTier,
    pub front_distance: Option<u32>,
    pub contest_percent: f64,
    pub net_advantage: f64,
    pub warzone_advantage: f64,
}

/// Undirected stargate link; `from` is always the lower id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GraphEdge {
    pub from: SystemId,
    pub to: SystemId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarzoneGraph {
    pub warzone: Warzone,
    /// In ascending id order.
    pub nodes: Vec<GraphNode>,
    /// Sorted, each link once.
    pub edges: Vec<GraphEdge>,
}

impl WarzoneGraph {
    /// Builds the induced subgraph over the analyzed systems of `status`.
    /// Skipped systems are left out together with their links.
    pub fn build(index: &UniverseIndex, status: &WarzoneStatus<'_>) -> WarzoneGraph {
        let present: BTreeSet<SystemId> = status.systems.iter().map(|s| s.id()).collect();

        let nodes = status
            .systems
            .iter()
            .map(|s| GraphNode {
                id: s.id(),
                name: s.name().to_string(),
                region_id: s.system.region_id,
                security_status: s.system.security_status,
                owner: s.owner,
                occupier: s.occupier,
                tier: s.tier,
                front_distance: s.front_distance,
                contest_percent: s.contest_percent,
                net_advantage: s.net_advantage,
                warzone_advantage: s.warzone_advantage,
            })
            .collect();

        let mut edges: Vec<GraphEdge> = present
            .iter()
            .flat_map(|&from| {
                index
                    .fw_neighbors(status.warzone, from)
                    .filter(move |&to| from < to)
                    .map(move |to| GraphEdge { from, to })
            })
            .filter(|e| present.contains(&e.to))
            .collect();
        edges.sort();
        edges.dedup();

        WarzoneGraph {
            warzone: status.warzone,
            nodes,
            edges,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
