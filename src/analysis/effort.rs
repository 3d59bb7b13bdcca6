//! Capture effort estimation.
//!
//! A static difficulty score per enemy-held system, from the attacker's
//! point of view: how far it is from the staging system, who holds the
//! advantage, how much progress has already been made and how deep behind
//! the front it sits. Lower is easier. This does not predict flips.

use std::fmt;

use serde::Serialize;

use crate::classify::AdjacencyTier;
use crate::error::AnalysisError;
use crate::universe::{Faction, SolarSystem, SystemId, UniverseIndex};
use crate::warfare::{FwSystem, WarzoneStatus};

const BASE_EFFORT: f64 = 50.0;
const MAX_DISTANCE_EFFORT: f64 = 30.0;
/// Jumps at which the distance term saturates.
const DISTANCE_HORIZON: f64 = 15.0;
const ADVANTAGE_WEIGHT: f64 = 15.0;
const PROGRESS_WEIGHT: f64 = 20.0;

/// Coarse bucket of an effort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortCategory {
    VeryEasy,
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl EffortCategory {
    pub fn from_score(score: f64) -> EffortCategory {
        if score < 20.0 {
            EffortCategory::VeryEasy
        } else if score < 40.0 {
            EffortCategory::Easy
        } else if score < 60.0 {
            EffortCategory::Moderate
        } else if score < 80.0 {
            EffortCategory::Hard
        } else {
            EffortCategory::VeryHard
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EffortCategory::VeryEasy => "Very Easy",
            EffortCategory::Easy => "Easy",
            EffortCategory::Moderate => "Moderate",
            EffortCategory::Hard => "Hard",
            EffortCategory::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for EffortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effort estimate for one target system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureEffort<'u> {
    pub system: &'u SolarSystem,
    pub defender: Faction,
    /// Score in `0.0..=100.0`.
    pub score: f64,
    pub category: EffortCategory,
    /// Jumps from the staging system; `None` when unreachable.
    pub jumps: Option<u32>,
    pub tier: AdjacencyTier,
    pub contest_percent: f64,
}

fn tier_effort(tier: AdjacencyTier) -> f64 {
    match tier {
        AdjacencyTier::Frontline => 0.0,
        AdjacencyTier::CommandOperations => 20.0,
        AdjacencyTier::Rearguard => 40.0,
    }
}

fn distance_effort(jumps: Option<u32>) -> f64 {
    match jumps {
        Some(j) => (j as f64 / DISTANCE_HORIZON * MAX_DISTANCE_EFFORT).min(MAX_DISTANCE_EFFORT),
        None => MAX_DISTANCE_EFFORT,
    }
}

/// Scores one system held by `defender` against `attacker`.
pub fn effort_score(system: &FwSystem<'_>, attacker: Faction, defender: Faction, jumps: Option<u32>) -> f64 {
    let advantage =
        (system.advantage_of(defender) - system.advantage_of(attacker) + 1.0) * ADVANTAGE_WEIGHT;
    let progress = if system.victory_points_threshold > 0 {
        (system.victory_points as f64 / system.victory_points_threshold as f64).min(1.0)
    } else {
        0.0
    };
    let score = BASE_EFFORT + distance_effort(jumps) + advantage - PROGRESS_WEIGHT * progress
        + tier_effort(system.tier);
    score.clamp(0.0, 100.0)
}

/// Scores every system of the warzone occupied by the attacker's opponent,
/// easiest first. Ties are broken by name.
pub fn estimate_capture_effort<'u>(
    index: &'u UniverseIndex,
    status: &WarzoneStatus<'u>,
    attacker: Faction,
    staging: SystemId,
) -> Result<Vec<CaptureEffort<'u>>, AnalysisError> {
    let defender = status.warzone.opponent(attacker).ok_or_else(|| {
        AnalysisError::InvalidArgument(format!(
            "{} does not fight in the {}",
            attacker.name(),
            status.warzone.name()
        ))
    })?;
    if index.system(staging).is_none() {
        return Err(AnalysisError::NotFound(format!("staging system {staging}")));
    }

    let jumps = index.jump_distances(staging);
    let mut efforts: Vec<CaptureEffort<'u>> = status
        .systems
        .iter()
        .filter(|s| s.occupier == defender)
        .map(|s| {
            let distance = jumps.get(&s.id()).copied();
            let score = effort_score(s, attacker, defender, distance);
            CaptureEffort {
                system: s.system,
                defender,
                score,
                category: EffortCategory::from_score(score),
                jumps: distance,
                tier: s.tier,
                contest_percent: s.contest_percent,
            }
        })
        .collect();

    efforts.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| a.system.name.cmp(&b.system.name))
    });
    Ok(efforts)
}
