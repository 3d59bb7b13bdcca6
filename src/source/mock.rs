//! Offline data source backed by an in-memory snapshot.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::{generate_snapshot, routes_to, FwDataSource, SourceError};
use crate::universe::{UniverseIndex, Warzone};
use crate::warfare::{Snapshot, StatsRecord, SystemRecord};

/// Serves records from a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    snapshot: Snapshot,
}

impl MockSource {
    pub fn new(snapshot: Snapshot) -> Self {
        MockSource { snapshot }
    }

    /// Parses a `{systems, statistics}` snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let snapshot = serde_json::from_str(json).map_err(|source| SourceError::Malformed {
            what: "snapshot",
            source,
        })?;
        Ok(MockSource::new(snapshot))
    }

    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let json = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = MockSource::from_json(&json)?;
        debug!(
            path = %path.display(),
            systems = source.snapshot.systems.len(),
            "loaded snapshot file"
        );
        Ok(source)
    }

    /// Synthetic snapshot covering every faction warfare system of the index.
    pub fn generated(index: &UniverseIndex, seed: u64) -> Self {
        MockSource::new(generate_snapshot(index, seed))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl FwDataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_systems(
        &self,
        index: &UniverseIndex,
        warzone: Warzone,
    ) -> Result<Vec<SystemRecord>, SourceError> {
        Ok(self
            .snapshot
            .systems
            .iter()
            .filter(|r| routes_to(index, r, warzone))
            .cloned()
            .collect())
    }

    async fn fetch_statistics(&self) -> Result<Vec<StatsRecord>, SourceError> {
        Ok(self.snapshot.statistics.clone())
    }
}
