//! Error taxonomy surfaced by the analysis core.
//!
//! Callers render these; the core never swallows or retries them.

use thiserror::Error;

use crate::source::SourceError;

/// Errors returned by analyzer operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Upstream fetch failed, or returned records that are malformed or
    /// inconsistent with the static index.
    #[error("data source error: {0}")]
    DataSource(#[from] SourceError),

    /// Unknown warzone token, sort key, faction or similar caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),
}

impl AnalysisError {
    /// Returns true for errors caused by caller input rather than upstream data.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidArgument(_) | AnalysisError::NotFound(_)
        )
    }
}
