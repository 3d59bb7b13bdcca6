//! Frontline detection over the warzone's induced stargate subgraph.
//!
//! Frontline systems (ownership boundary plus permanent overrides) seed a
//! multi-source BFS restricted to the warzone's faction warfare systems. The
//! resulting jump distance decides the tier: 0 frontline, 1 command
//! operations, anything further or unreachable rearguard.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use super::AdjacencyTier;
use crate::universe::{Faction, SystemId, UniverseIndex, Warzone};

/// Tier assignment for one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tier: AdjacencyTier,
    /// Jumps to the nearest frontline inside the warzone, if connected.
    pub front_distance: Option<u32>,
}

/// Classifies faction warfare systems against a read-only universe index.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyClassifier<'u> {
    index: &'u UniverseIndex,
}

impl<'u> AdjacencyClassifier<'u> {
    pub fn new(index: &'u UniverseIndex) -> Self {
        AdjacencyClassifier { index }
    }

    /// Assigns a tier to every faction warfare system in the warzone.
    ///
    /// `owners` maps system to owning faction; systems missing from it are
    /// still graph nodes but never form a boundary. The result covers every
    /// member of the warzone, keyed in ascending id order.
    pub fn classify(
        &self,
        warzone: Warzone,
        owners: &BTreeMap<SystemId, Faction>,
    ) -> BTreeMap<SystemId, Placement> {
        let members = self.index.fw_system_ids(warzone);
        let mut distance: BTreeMap<SystemId, u32> = BTreeMap::new();
        let mut queue = VecDeque::with_capacity(members.len());

        // Overrides are checked first so they seed the search unconditionally.
        for &id in members {
            if self.index.is_permanent_frontline(id) || self.on_boundary(warzone, id, owners) {
                distance.insert(id, 0);
                queue.push_back((id, 0u32));
            }
        }

        while let Some((cur, d)) = queue.pop_front() {
            for next in self.index.fw_neighbors(warzone, cur) {
                if !distance.contains_key(&next) {
                    distance.insert(next, d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }

        let placements: BTreeMap<SystemId, Placement> = members
            .iter()
            .map(|&id| {
                let front_distance = distance.get(&id).copied();
                let placement = Placement {
                    tier: AdjacencyTier::from_front_distance(front_distance),
                    front_distance,
                };
                (id, placement)
            })
            .collect();

        let frontline = placements
            .values()
            .filter(|p| p.tier == AdjacencyTier::Frontline)
            .count();
        let command_ops = placements
            .values()
            .filter(|p| p.tier == AdjacencyTier::CommandOperations)
            .count();
        debug!(
            %warzone,
            frontline,
            command_ops,
            rearguard = placements.len() - frontline - command_ops,
            "classified warzone adjacency"
        );

        placements
    }

    /// True if the system is owned by a belligerent and touches a system
    /// owned by its opponent.
    fn on_boundary(
        &self,
        warzone: Warzone,
        id: SystemId,
        owners: &BTreeMap<SystemId, Faction>,
    ) -> bool {
        let Some(&owner) = owners.get(&id) else {
            return false;
        };
        let Some(enemy) = warzone.opponent(owner) else {
            return false;
        };
        self.index
            .fw_neighbors(warzone, id)
            .any(|n| owners.get(&n) == Some(&enemy))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::universe::{RegionId, SolarSystem, WarzoneMembership};

    const AMARR: Faction = Faction::AmarrEmpire;
    const MINMATAR: Faction = Faction::MinmatarRepublic;

    /// Builds an Amarr-Minmatar warzone from an edge list. Systems `1..=n`
    /// are faction warfare systems; system 100 is a non-FW neighbor of 1.
    fn graph(n: u32, edges: &[(u32, u32)], overrides: &[u32]) -> UniverseIndex {
        let mut adj: BTreeMap<u32, Vec<SystemId>> = (1..=n).map(|i| (i, Vec::new())).collect();
        adj.insert(100, Vec::new());
        for &(a, b) in edges.iter().chain(std::iter::once(&(1, 100))) {
            adj.get_mut(&a).unwrap().push(SystemId(b));
            adj.get_mut(&b).unwrap().push(SystemId(a));
        }
        let systems = adj
            .into_iter()
            .map(|(id, neighbors)| SolarSystem {
                id: SystemId(id),
                name: format!("S{}", id),
                security_status: 0.3,
                region_id: RegionId(1),
                neighbors,
            })
            .collect();
        UniverseIndex::new(
            systems,
            vec![
                WarzoneMembership {
                    warzone: Warzone::AmarrMinmatar,
                    regions: [RegionId(1)].into_iter().collect(),
                    systems: (1..=n).map(SystemId).collect(),
                },
                WarzoneMembership {
                    warzone: Warzone::CaldariGallente,
                    regions: BTreeSet::new(),
                    systems: BTreeSet::new(),
                },
            ],
            overrides.iter().map(|&i| SystemId(i)).collect(),
        )
        .unwrap()
    }

    fn owners(list: &[(u32, Faction)]) -> BTreeMap<SystemId, Faction> {
        list.iter().map(|&(id, f)| (SystemId(id), f)).collect()
    }

    fn tiers(index: &UniverseIndex, own: &BTreeMap<SystemId, Faction>) -> Vec<AdjacencyTier> {
        AdjacencyClassifier::new(index)
            .classify(Warzone::AmarrMinmatar, own)
            .values()
            .map(|p| p.tier)
            .collect()
    }

    #[test]
    fn chain_gives_front_buffer_and_rear() {
        // 1-2-3-4-5-6, Minmatar holds 1..=3, Amarr holds 4..=6.
        let index = graph(6, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)], &[]);
        let own = owners(&[
            (1, MINMATAR),
            (2, MINMATAR),
            (3, MINMATAR),
            (4, AMARR),
            (5, AMARR),
            (6, AMARR),
        ]);
        use AdjacencyTier::*;
        assert_eq!(
            tiers(&index, &own),
            vec![Rearguard, CommandOperations, Frontline, Frontline, CommandOperations, Rearguard]
        );
    }

    #[test]
    fn uniform_ownership_has_no_front() {
        let index = graph(3, &[(1, 2), (2, 3)], &[]);
        let own = owners(&[(1, AMARR), (2, AMARR), (3, AMARR)]);
        assert!(tiers(&index, &own)
            .iter()
            .all(|t| *t == AdjacencyTier::Rearguard));
    }

    #[test]
    fn permanent_override_wins_regardless_of_ownership() {
        let index = graph(4, &[(1, 2), (2, 3), (3, 4)], &[4]);
        let own = owners(&[(1, AMARR), (2, AMARR), (3, AMARR), (4, AMARR)]);
        let placements = AdjacencyClassifier::new(&index).classify(Warzone::AmarrMinmatar, &own);
        assert_eq!(placements[&SystemId(4)].tier, AdjacencyTier::Frontline);
        assert_eq!(placements[&SystemId(4)].front_distance, Some(0));
        assert_eq!(placements[&SystemId(3)].tier, AdjacencyTier::CommandOperations);
        assert_eq!(placements[&SystemId(2)].tier, AdjacencyTier::Rearguard);
        assert_eq!(placements[&SystemId(1)].front_distance, Some(3));
    }

    #[test]
    fn isolated_system_defaults_to_rearguard_unless_overridden() {
        // 3 has no faction warfare neighbors.
        let index = graph(3, &[(1, 2)], &[]);
        let own = owners(&[(1, AMARR), (2, MINMATAR), (3, AMARR)]);
        let placements = AdjacencyClassifier::new(&index).classify(Warzone::AmarrMinmatar, &own);
        assert_eq!(placements[&SystemId(3)].tier, AdjacencyTier::Rearguard);
        assert_eq!(placements[&SystemId(3)].front_distance, None);

        let overridden = graph(3, &[(1, 2)], &[3]);
        let placements =
            AdjacencyClassifier::new(&overridden).classify(Warzone::AmarrMinmatar, &own);
        assert_eq!(placements[&SystemId(3)].tier, AdjacencyTier::Frontline);
    }

    #[test]
    fn non_fw_neighbors_do_not_count() {
        // System 1 touches non-FW system 100 only; nothing is owned there.
        let index = graph(2, &[(1, 2)], &[]);
        let own = owners(&[(1, AMARR), (2, AMARR)]);
        let placements = AdjacencyClassifier::new(&index).classify(Warzone::AmarrMinmatar, &own);
        assert!(!placements.contains_key(&SystemId(100)));
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn unowned_systems_never_form_a_boundary() {
        // 2 has no usable owner; 1 and 3 are on different sides but not adjacent.
        let index = graph(3, &[(1, 2), (2, 3)], &[]);
        let own = owners(&[(1, AMARR), (3, MINMATAR)]);
        assert!(tiers(&index, &own)
            .iter()
            .all(|t| *t == AdjacencyTier::Rearguard));
    }

    #[test]
    fn foreign_owner_is_not_an_enemy() {
        let index = graph(2, &[(1, 2)], &[]);
        let own = owners(&[(1, AMARR), (2, Faction::GuristasPirates)]);
        assert!(tiers(&index, &own)
            .iter()
            .all(|t| *t == AdjacencyTier::Rearguard));
    }

    #[test]
    fn cycle_classification_is_deterministic() {
        let index = graph(6, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)], &[]);
        let own = owners(&[
            (1, AMARR),
            (2, AMARR),
            (3, AMARR),
            (4, MINMATAR),
            (5, MINMATAR),
            (6, MINMATAR),
        ]);
        let first = tiers(&index, &own);
        let second = tiers(&index, &own);
        assert_eq!(first, second);
        use AdjacencyTier::*;
        // Boundaries at 3-4 and 6-1.
        assert_eq!(
            first,
            vec![Frontline, CommandOperations, Frontline, Frontline, CommandOperations, Frontline]
        );
    }
}
