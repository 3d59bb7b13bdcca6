//! The async front of the analysis core.
//!
//! `WarzoneAnalyzer` fetches records from its data source and hands them to
//! the pure analysis functions. It keeps no state between calls.

use tracing::debug;

use super::effort::{estimate_capture_effort, CaptureEffort};
use super::sort::{sort_systems, SortKey};
use super::warzone::analyze_warzone;
use crate::error::AnalysisError;
use crate::source::{FwDataSource, SourceError};
use crate::universe::{Faction, UniverseIndex, Warzone, ALL_WARZONES};
use crate::warfare::{FwSystem, Snapshot, WarzoneStatus};

pub struct WarzoneAnalyzer<'u> {
    index: &'u UniverseIndex,
    source: Box<dyn FwDataSource>,
}

impl<'u> WarzoneAnalyzer<'u> {
    pub fn new(index: &'u UniverseIndex, source: Box<dyn FwDataSource>) -> Self {
        WarzoneAnalyzer { index, source }
    }

    pub fn index(&self) -> &'u UniverseIndex {
        self.index
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetches the records of one warzone plus the faction statistics.
    pub async fn fetch_snapshot(&self, warzone: Warzone) -> Result<Snapshot, SourceError> {
        let systems = self.source.fetch_systems(self.index, warzone).await?;
        let statistics = self.source.fetch_statistics().await?;
        debug!(
            source = self.source.name(),
            %warzone,
            systems = systems.len(),
            statistics = statistics.len(),
            "fetched snapshot"
        );
        Ok(Snapshot {
            systems,
            statistics,
        })
    }

    /// Status of a single warzone.
    pub async fn warzone_status(&self, warzone: Warzone) -> Result<WarzoneStatus<'u>, AnalysisError> {
        let snapshot = self.fetch_snapshot(warzone).await?;
        analyze_warzone(self.index, warzone, &snapshot)
    }

    /// Status of one warzone, or of both in fixed order when `None`.
    pub async fn get_warzone_status(
        &self,
        warzone: Option<Warzone>,
    ) -> Result<Vec<WarzoneStatus<'u>>, AnalysisError> {
        let warzones = match warzone {
            Some(w) => vec![w],
            None => ALL_WARZONES.to_vec(),
        };
        let mut statuses = Vec::with_capacity(warzones.len());
        for warzone in warzones {
            statuses.push(self.warzone_status(warzone).await?);
        }
        Ok(statuses)
    }

    /// Looks up a faction warfare system by name and returns its analyzed
    /// record.
    pub async fn search_system(&self, name: &str) -> Result<FwSystem<'u>, AnalysisError> {
        let system = self.index.find_fw_system(name).ok_or_else(|| {
            AnalysisError::NotFound(format!("no faction warfare system matches {name:?}"))
        })?;
        let warzone = self.index.warzone_of(system.id).ok_or_else(|| {
            AnalysisError::NotFound(format!("{} is not in a warzone", system.name))
        })?;

        let mut status = self.warzone_status(warzone).await?;
        if let Some(skip) = status.skipped.iter().find(|s| s.system == system.id) {
            return Err(AnalysisError::NotFound(format!(
                "{} has no usable record: {}",
                system.name, skip.reason
            )));
        }
        let pos = status
            .systems
            .iter()
            .position(|s| s.id() == system.id)
            .ok_or_else(|| AnalysisError::NotFound(format!("{} has no record", system.name)))?;
        Ok(status.systems.swap_remove(pos))
    }

    /// Systems of one warzone in the requested order.
    pub async fn get_warzone_systems(
        &self,
        warzone: Warzone,
        sort_by: SortKey,
    ) -> Result<Vec<FwSystem<'u>>, AnalysisError> {
        let mut systems = self.warzone_status(warzone).await?.systems;
        sort_systems(&mut systems, sort_by);
        Ok(systems)
    }

    /// Capture effort for `attacker` staging from the named system.
    ///
    /// The staging system may be any system in the universe, not only
    /// faction warfare space.
    pub async fn capture_effort(
        &self,
        warzone: Warzone,
        attacker: Faction,
        staging: &str,
    ) -> Result<Vec<CaptureEffort<'u>>, AnalysisError> {
        if !warzone.contains(attacker) {
            return Err(AnalysisError::InvalidArgument(format!(
                "{} does not fight in the {}",
                attacker.name(),
                warzone.name()
            )));
        }
        let staging = self
            .index
            .find_system(staging)
            .ok_or_else(|| AnalysisError::NotFound(format!("no system named {staging:?}")))?;
        let status = self.warzone_status(warzone).await?;
        estimate_capture_effort(self.index, &status, attacker, staging.id)
    }
}
