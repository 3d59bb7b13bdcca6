//! Contest percentage and advantage arithmetic.

use std::collections::BTreeMap;

use crate::universe::{Faction, Warzone};

/// Victory points as a percentage of the capture threshold, clamped to
/// `0.0..=100.0`. Systems sitting above the threshold (waiting for the game
/// to process the capture) read as 100.
pub fn contest_percent(victory_points: u64, threshold: u64) -> f64 {
    if threshold == 0 {
        return 0.0;
    }
    (victory_points as f64 / threshold as f64 * 100.0).clamp(0.0, 100.0)
}

fn advantage_of(advantage: &BTreeMap<Faction, f64>, faction: Faction) -> f64 {
    advantage.get(&faction).copied().unwrap_or(0.0)
}

/// Attacker advantage minus owner advantage.
///
/// Positive values mean the owner's opponent has the upper hand, negative
/// values mean the owner does. Zero when the owner is not a belligerent.
pub fn net_advantage(advantage: &BTreeMap<Faction, f64>, warzone: Warzone, owner: Faction) -> f64 {
    match warzone.opponent(owner) {
        Some(attacker) => advantage_of(advantage, attacker) - advantage_of(advantage, owner),
        None => 0.0,
    }
}

/// First belligerent's advantage minus the second's (Amarr minus Minmatar,
/// Caldari minus Gallente), independent of ownership.
pub fn warzone_advantage(advantage: &BTreeMap<Faction, f64>, warzone: Warzone) -> f64 {
    let (a, b) = warzone.factions();
    advantage_of(advantage, a) - advantage_of(advantage, b)
}
