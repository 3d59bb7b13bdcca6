//! Orderings for system listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::warfare::FwSystem;

/// Sort key accepted by `get_warzone_systems`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Name, ascending.
    #[default]
    Name,
    /// Security status, highest first.
    Security,
    /// Contest percentage, highest first.
    Contest,
    /// Region id, then name.
    Region,
}

pub const ALL_SORT_KEYS: [SortKey; 4] = [
    SortKey::Name,
    SortKey::Security,
    SortKey::Contest,
    SortKey::Region,
];

impl SortKey {
    pub const fn token(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Security => "security",
            SortKey::Contest => "contest",
            SortKey::Region => "region",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortKey {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_SORT_KEYS
            .iter()
            .copied()
            .find(|k| k.token() == key)
            .ok_or_else(|| {
                AnalysisError::InvalidArgument(format!(
                    "unknown sort key {s:?} (expected name, security, contest or region)"
                ))
            })
    }
}

/// Sorts in place. Stable: equal keys keep their input order.
pub fn sort_systems(systems: &mut [FwSystem<'_>], key: SortKey) {
    match key {
        SortKey::Name => systems.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::Security => systems.sort_by(|a, b| {
            b.system
                .security_status
                .total_cmp(&a.system.security_status)
        }),
        SortKey::Contest => systems.sort_by(|a, b| b.contest_percent.total_cmp(&a.contest_percent)),
        SortKey::Region => systems.sort_by(|a, b| {
            a.system
                .region_id
                .cmp(&b.system.region_id)
                .then_with(|| a.name().cmp(b.name()))
        }),
    }
}
