//! The static universe index.
//!
//! Loaded once from a prepared JSON dataset and validated up front: unique
//! ids and names, symmetric stargate edges, and every faction warfare system
//! assigned to exactly one warzone inside that warzone's regions. After
//! construction the index is read-only and shared by reference.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::faction::{Warzone, ALL_WARZONES};
use super::system::{RegionId, SolarSystem, SystemId};

/// Errors raised while loading or validating a universe dataset.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse universe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate system id {0}")]
    DuplicateSystem(SystemId),

    #[error("duplicate system name '{0}'")]
    DuplicateName(String),

    #[error("system {0} has security status {1} outside -1.0..=1.0")]
    SecurityOutOfRange(SystemId, f64),

    #[error("system {system} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { system: SystemId, neighbor: SystemId },

    #[error("system {0} lists itself as a neighbor")]
    SelfLoop(SystemId),

    #[error("stargate {from} -> {to} has no reverse edge")]
    AsymmetricEdge { from: SystemId, to: SystemId },

    #[error("warzone {0} is defined more than once")]
    DuplicateWarzone(Warzone),

    #[error("warzone {0} is missing from the dataset")]
    MissingWarzone(Warzone),

    #[error("faction warfare system {0} is not in the system table")]
    UnknownFwSystem(SystemId),

    #[error("system {system} is assigned to both {first} and {second}")]
    MultipleWarzones {
        system: SystemId,
        first: Warzone,
        second: Warzone,
    },

    #[error("system {system} lies in region {region}, which is not part of {warzone}")]
    RegionMismatch {
        system: SystemId,
        region: RegionId,
        warzone: Warzone,
    },

    #[error("permanent frontline {0} is not a faction warfare system")]
    OverrideOutsideFw(SystemId),
}

/// Regions and faction warfare systems that make up one warzone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarzoneMembership {
    pub warzone: Warzone,
    pub regions: BTreeSet<RegionId>,
    pub systems: BTreeSet<SystemId>,
}

/// On-disk layout of a universe dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub systems: Vec<SolarSystem>,
    pub warzones: Vec<WarzoneMembership>,
    #[serde(default)]
    pub permanent_frontlines: BTreeSet<SystemId>,
}

/// Immutable index over the static universe.
#[derive(Debug, Clone)]
pub struct UniverseIndex {
    systems: BTreeMap<SystemId, SolarSystem>,
    warzones: BTreeMap<Warzone, WarzoneMembership>,
    system_warzone: HashMap<SystemId, Warzone>,
    permanent_frontlines: BTreeSet<SystemId>,
    /// Lowercased name -> id, for every system.
    names: BTreeMap<String, SystemId>,
}

impl UniverseIndex {
    /// Builds and validates an index from its parts.
    pub fn new(
        systems: Vec<SolarSystem>,
        warzones: Vec<WarzoneMembership>,
        permanent_frontlines: BTreeSet<SystemId>,
    ) -> Result<Self, UniverseError> {
        let mut by_id = BTreeMap::new();
        let mut names = BTreeMap::new();
        for mut system in systems {
            if !(-1.0..=1.0).contains(&system.security_status) {
                return Err(UniverseError::SecurityOutOfRange(
                    system.id,
                    system.security_status,
                ));
            }
            system.neighbors.sort_unstable();
            system.neighbors.dedup();
            if names.insert(system.name.to_lowercase(), system.id).is_some() {
                return Err(UniverseError::DuplicateName(system.name));
            }
            let id = system.id;
            if by_id.insert(id, system).is_some() {
                return Err(UniverseError::DuplicateSystem(id));
            }
        }

        validate_edges(&by_id)?;

        let mut by_warzone = BTreeMap::new();
        let mut system_warzone = HashMap::new();
        for membership in warzones {
            let warzone = membership.warzone;
            for &id in &membership.systems {
                let system = by_id.get(&id).ok_or(UniverseError::UnknownFwSystem(id))?;
                if !membership.regions.contains(&system.region_id) {
                    return Err(UniverseError::RegionMismatch {
                        system: id,
                        region: system.region_id,
                        warzone,
                    });
                }
                if let Some(first) = system_warzone.insert(id, warzone) {
                    return Err(UniverseError::MultipleWarzones {
                        system: id,
                        first,
                        second: warzone,
                    });
                }
            }
            if by_warzone.insert(warzone, membership).is_some() {
                return Err(UniverseError::DuplicateWarzone(warzone));
            }
        }
        for warzone in ALL_WARZONES {
            if !by_warzone.contains_key(&warzone) {
                return Err(UniverseError::MissingWarzone(warzone));
            }
        }

        if let Some(&stray) = permanent_frontlines
            .iter()
            .find(|id| !system_warzone.contains_key(id))
        {
            return Err(UniverseError::OverrideOutsideFw(stray));
        }

        Ok(UniverseIndex {
            systems: by_id,
            warzones: by_warzone,
            system_warzone,
            permanent_frontlines,
            names,
        })
    }

    /// Builds an index from a deserialized dataset.
    pub fn from_file(file: UniverseFile) -> Result<Self, UniverseError> {
        UniverseIndex::new(file.systems, file.warzones, file.permanent_frontlines)
    }

    /// Parses and validates a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, UniverseError> {
        let file: UniverseFile = serde_json::from_str(json)?;
        UniverseIndex::from_file(file)
    }

    /// Loads and validates a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, UniverseError> {
        let data = fs::read_to_string(path).map_err(|source| UniverseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = UniverseIndex::from_json(&data)?;
        info!(
            path = %path.display(),
            systems = index.len(),
            fw_systems = index.system_warzone.len(),
            "loaded universe index"
        );
        Ok(index)
    }

    /// Total number of systems in the index.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Looks up a system by id.
    pub fn system(&self, id: SystemId) -> Option<&SolarSystem> {
        self.systems.get(&id)
    }

    /// Returns the stargate neighbors of a system (empty if unknown).
    pub fn neighbors(&self, id: SystemId) -> &[SystemId] {
        self.systems
            .get(&id)
            .map(|s| s.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the warzone a faction warfare system belongs to.
    pub fn warzone_of(&self, id: SystemId) -> Option<Warzone> {
        self.system_warzone.get(&id).copied()
    }

    /// Returns true if the system takes part in faction warfare.
    pub fn is_fw_system(&self, id: SystemId) -> bool {
        self.system_warzone.contains_key(&id)
    }

    /// Returns the regions that make up a warzone.
    pub fn regions(&self, warzone: Warzone) -> &BTreeSet<RegionId> {
        &self.warzones[&warzone].regions
    }

    /// Returns the ids of a warzone's faction warfare systems, ascending.
    pub fn fw_system_ids(&self, warzone: Warzone) -> &BTreeSet<SystemId> {
        &self.warzones[&warzone].systems
    }

    /// Iterates a warzone's faction warfare systems in ascending id order.
    pub fn fw_systems(&self, warzone: Warzone) -> impl Iterator<Item = &SolarSystem> + '_ {
        self.fw_system_ids(warzone)
            .iter()
            .filter_map(move |id| self.systems.get(id))
    }

    /// Neighbors of `id` inside the warzone's induced subgraph.
    pub fn fw_neighbors(
        &self,
        warzone: Warzone,
        id: SystemId,
    ) -> impl Iterator<Item = SystemId> + '_ {
        let members = self.fw_system_ids(warzone);
        self.neighbors(id)
            .iter()
            .copied()
            .filter(move |n| members.contains(n))
    }

    /// Returns true if the system is frontline regardless of ownership.
    pub fn is_permanent_frontline(&self, id: SystemId) -> bool {
        self.permanent_frontlines.contains(&id)
    }

    pub fn permanent_frontlines(&self) -> &BTreeSet<SystemId> {
        &self.permanent_frontlines
    }

    /// Finds any system by exact, case-insensitive name.
    pub fn find_system(&self, name: &str) -> Option<&SolarSystem> {
        let key = name.trim().to_lowercase();
        self.names.get(&key).and_then(|id| self.systems.get(id))
    }

    /// Finds a faction warfare system by case-insensitive name.
    ///
    /// An exact match wins; otherwise the alphabetically first faction
    /// warfare system whose name starts with `name` is returned.
    pub fn find_fw_system(&self, name: &str) -> Option<&SolarSystem> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(&id) = self.names.get(&key) {
            if self.is_fw_system(id) {
                return self.systems.get(&id);
            }
        }
        self.names
            .range(key.clone()..)
            .take_while(|(k, _)| k.starts_with(&key))
            .map(|(_, id)| *id)
            .find(|id| self.is_fw_system(*id))
            .and_then(|id| self.systems.get(&id))
    }

    /// Stargate jump counts from `from` to every reachable system, over the
    /// whole static graph.
    pub fn jump_distances(&self, from: SystemId) -> HashMap<SystemId, u32> {
        let mut dist = HashMap::new();
        if !self.systems.contains_key(&from) {
            return dist;
        }
        let mut queue = VecDeque::new();
        dist.insert(from, 0u32);
        queue.push_back((from, 0u32));

        while let Some((cur, d)) = queue.pop_front() {
            for &next in self.neighbors(cur) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }
        dist
    }
}

/// Checks that every edge points at a known system, is not a self-loop, and
/// has a reverse edge.
fn validate_edges(systems: &BTreeMap<SystemId, SolarSystem>) -> Result<(), UniverseError> {
    for (&id, system) in systems {
        for &neighbor in &system.neighbors {
            if neighbor == id {
                return Err(UniverseError::SelfLoop(id));
            }
            let other = systems.get(&neighbor).ok_or(UniverseError::UnknownNeighbor {
                system: id,
                neighbor,
            })?;
            if !other.is_connected_to(id) {
                return Err(UniverseError::AsymmetricEdge {
                    from: id,
                    to: neighbor,
                });
            }
        }
    }
    Ok(())
}
