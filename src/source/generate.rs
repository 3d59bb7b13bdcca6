//! Seeded synthetic snapshots.
//!
//! Produces plausible, internally consistent records for every faction
//! warfare system in an index so the analyzer can run without network
//! access. Identical seeds give identical snapshots.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::universe::{UniverseIndex, ALL_WARZONES};
use crate::warfare::{
    ContestStatus, KillTotals, Snapshot, StatsRecord, SystemRecord, VictoryPointTotals,
};

/// Capture threshold used for every generated system.
pub const GENERATED_THRESHOLD: i64 = 75_000;

/// Probability that a system is occupied by its owner's opponent.
const OCCUPATION_RATE: f64 = 0.15;

fn roll_status(rng: &mut SmallRng) -> (ContestStatus, i64) {
    let roll: f64 = rng.gen();
    if roll < 0.4 {
        (ContestStatus::Uncontested, 0)
    } else if roll < 0.85 {
        (ContestStatus::Contested, rng.gen_range(1..GENERATED_THRESHOLD))
    } else if roll < 0.95 {
        (ContestStatus::Vulnerable, GENERATED_THRESHOLD)
    } else {
        (
            ContestStatus::Captured,
            GENERATED_THRESHOLD + rng.gen_range(0..GENERATED_THRESHOLD / 10),
        )
    }
}

/// Generates a snapshot covering every faction warfare system in `index`.
///
/// Statistics report `systems_controlled` consistent with the generated
/// ownership.
pub fn generate_snapshot(index: &UniverseIndex, seed: u64) -> Snapshot {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut systems = Vec::new();
    let mut controlled: BTreeMap<u32, u64> = BTreeMap::new();

    for warzone in ALL_WARZONES {
        let (a, b) = warzone.factions();
        controlled.entry(a.id()).or_default();
        controlled.entry(b.id()).or_default();

        for &id in index.fw_system_ids(warzone) {
            let (owner, opponent) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
            let occupier = if rng.gen_bool(OCCUPATION_RATE) {
                opponent
            } else {
                owner
            };
            let (contested, victory_points) = roll_status(&mut rng);
            let advantage = [a, b]
                .into_iter()
                .map(|f| (f.id(), (rng.gen::<f64>() * 100.0).round() / 100.0))
                .collect();

            *controlled.entry(owner.id()).or_default() += 1;
            systems.push(SystemRecord {
                solar_system_id: id,
                owner_faction_id: owner.id(),
                occupier_faction_id: occupier.id(),
                contested,
                victory_points,
                victory_points_threshold: GENERATED_THRESHOLD,
                advantage,
            });
        }
    }

    let statistics = controlled
        .into_iter()
        .map(|(faction_id, systems_controlled)| {
            let yesterday = rng.gen_range(0..500);
            let last_week = yesterday * 7 + rng.gen_range(0..500);
            let vp_yesterday = rng.gen_range(0..50_000);
            StatsRecord {
                faction_id,
                pilots: rng.gen_range(500..10_000),
                systems_controlled,
                kills: KillTotals {
                    yesterday,
                    last_week,
                    total: last_week * 50 + rng.gen_range(0..10_000),
                    last_hour: Some(rng.gen_range(0..40)),
                },
                victory_points: VictoryPointTotals {
                    yesterday: vp_yesterday,
                    last_week: vp_yesterday * 7,
                    total: vp_yesterday * 300,
                },
            }
        })
        .collect();

    Snapshot {
        systems,
        statistics,
    }
}
