//! Faction warfare data sources.
//!
//! A source hands back raw upstream records; it never classifies or
//! aggregates. The live source talks to ESI, the mock source replays a
//! snapshot file or a seeded synthetic snapshot.

#[cfg(feature = "live")]
pub mod esi;
pub mod generate;
pub mod mock;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{Settings, SourceKind};
use crate::universe::{SystemId, UniverseIndex, Warzone};
use crate::warfare::{StatsRecord, SystemRecord};

#[cfg(feature = "live")]
pub use esi::EsiSource;
pub use generate::generate_snapshot;
pub use mock::MockSource;

/// Errors raised while fetching or validating upstream records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[cfg(feature = "live")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed {what} payload: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record for unknown system {0}")]
    UnknownSystem(SystemId),

    #[error("record for system {0}, which is not a faction warfare system")]
    NotFactionWarfare(SystemId),

    #[error("system {system} belongs to {found}, not {expected}")]
    ForeignSystem {
        system: SystemId,
        expected: Warzone,
        found: Warzone,
    },

    #[error("duplicate record for system {0}")]
    DuplicateRecord(SystemId),

    #[error("no record for {warzone} system {system}")]
    MissingSystem { system: SystemId, warzone: Warzone },

    #[error("live source requested but this build has no `live` feature")]
    LiveUnavailable,
}

/// Supplier of current faction warfare records.
#[async_trait]
pub trait FwDataSource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Records routed to `warzone` by [`routes_to`].
    async fn fetch_systems(
        &self,
        index: &UniverseIndex,
        warzone: Warzone,
    ) -> Result<Vec<SystemRecord>, SourceError>;

    /// Per-faction statistics for every faction upstream reports.
    async fn fetch_statistics(&self) -> Result<Vec<StatsRecord>, SourceError>;
}

/// True when `record` belongs in the snapshot of `warzone`.
///
/// Records go by where the system is, not by the factions they name, so a
/// record with a bogus owner still reaches its own warzone and is skipped
/// there. Systems outside every warzone are routed everywhere and rejected
/// by the analyzer.
pub fn routes_to(index: &UniverseIndex, record: &SystemRecord, warzone: Warzone) -> bool {
    index
        .warzone_of(record.solar_system_id)
        .map_or(true, |w| w == warzone)
}

/// Builds the source selected by the settings.
///
/// A mock seed takes precedence over a mock data file.
pub fn from_settings(
    settings: &Settings,
    index: &UniverseIndex,
) -> Result<Box<dyn FwDataSource>, SourceError> {
    match settings.source {
        SourceKind::Live => live_source(settings),
        SourceKind::Mock => {
            let source = match (settings.mock.seed, &settings.mock.data_path) {
                (Some(seed), _) => MockSource::generated(index, seed),
                (None, Some(path)) => MockSource::from_path(path)?,
                (None, None) => MockSource::generated(index, 0),
            };
            Ok(Box::new(source))
        }
    }
}

#[cfg(feature = "live")]
fn live_source(settings: &Settings) -> Result<Box<dyn FwDataSource>, SourceError> {
    Ok(Box::new(EsiSource::new(&settings.esi)?))
}

#[cfg(not(feature = "live"))]
fn live_source(_settings: &Settings) -> Result<Box<dyn FwDataSource>, SourceError> {
    Err(SourceError::LiveUnavailable)
}
