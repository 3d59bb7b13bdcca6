//! Warzone analysis.
//!
//! `analyze_warzone` turns a snapshot into a `WarzoneStatus` without any
//! I/O; `WarzoneAnalyzer` wraps it with fetching from a data source and
//! exposes the query operations (status, system search, sorted listings,
//! capture effort).

pub mod analyzer;
pub mod contest;
pub mod effort;
pub mod sort;
pub mod warzone;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analyzer::WarzoneAnalyzer;
pub use contest::{contest_percent, net_advantage, warzone_advantage};
pub use effort::{effort_score, estimate_capture_effort, CaptureEffort, EffortCategory};
pub use sort::{sort_systems, SortKey, ALL_SORT_KEYS};
pub use warzone::analyze_warzone;
