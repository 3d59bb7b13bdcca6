//! Live faction warfare state.
//!
//! Raw upstream records, the enriched per-system view, and the per-warzone
//! aggregates built from them.

pub mod record;
pub mod status;
pub mod system;

pub use record::{
    ContestStatus, KillTotals, Snapshot, StatsRecord, SystemRecord, VictoryPointTotals,
};
pub use status::{
    leading_faction, tally_factions, FactionStats, FactionTally, SkipReason, SkippedRecord,
    TierCounts, WarzoneStatus,
};
pub use system::FwSystem;
