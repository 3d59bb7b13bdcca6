//! Wiggin faction warfare analysis library.
//!
//! Loads a static universe index, fetches live or mock faction warfare
//! records, and derives per-warzone status: ownership tallies, contest
//! progress, adjacency tiers, and capture effort estimates.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod universe;
pub mod warfare;

pub use error::AnalysisError;
