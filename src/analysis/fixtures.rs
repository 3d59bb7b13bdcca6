//! Synthetic universe and snapshots shared by the analysis unit tests.
//!
//! Amarr-Minmatar: Bosboger - Amamake - Huola - Kamela - Sosala, plus an
//! isolated Iesa. Sosala is a permanent frontline. Minmatar holds the
//! first three, Amarr the rest. Caldari-Gallente: Tama - Nourvukaiken.
//! Rens is a non-FW high-sec neighbor of Bosboger.

use std::collections::BTreeMap;

use crate::universe::{
    RegionId, SolarSystem, SystemId, UniverseIndex, Warzone, WarzoneMembership,
};
use crate::warfare::{
    ContestStatus, KillTotals, Snapshot, StatsRecord, SystemRecord, VictoryPointTotals,
};

pub const BOSBOGER: SystemId = SystemId(1);
pub const AMAMAKE: SystemId = SystemId(2);
pub const HUOLA: SystemId = SystemId(3);
pub const KAMELA: SystemId = SystemId(4);
pub const SOSALA: SystemId = SystemId(5);
pub const IESA: SystemId = SystemId(6);
pub const TAMA: SystemId = SystemId(7);
pub const NOURVUKAIKEN: SystemId = SystemId(8);
pub const RENS: SystemId = SystemId(9);

const AMARR: u32 = 500_003;
const MINMATAR: u32 = 500_002;
const CALDARI: u32 = 500_001;
const GALLENTE: u32 = 500_004;

fn sys(id: SystemId, name: &str, security: f64, region: u32, neighbors: &[SystemId]) -> SolarSystem {
    SolarSystem {
        id,
        name: name.to_string(),
        security_status: security,
        region_id: RegionId(region),
        neighbors: neighbors.to_vec(),
    }
}

pub fn universe() -> UniverseIndex {
    UniverseIndex::new(
        vec![
            sys(BOSBOGER, "Bosboger", 0.3, 10, &[AMAMAKE, RENS]),
            sys(AMAMAKE, "Amamake", 0.4, 10, &[BOSBOGER, HUOLA]),
            sys(HUOLA, "Huola", 0.4, 11, &[AMAMAKE, KAMELA]),
            sys(KAMELA, "Kamela", 0.4, 11, &[HUOLA, SOSALA]),
            sys(SOSALA, "Sosala", 0.3, 11, &[KAMELA]),
            sys(IESA, "Iesa", 0.4, 11, &[]),
            sys(TAMA, "Tama", 0.3, 20, &[NOURVUKAIKEN]),
            sys(NOURVUKAIKEN, "Nourvukaiken", 0.4, 20, &[TAMA]),
            sys(RENS, "Rens", 0.9, 12, &[BOSBOGER]),
        ],
        vec![
            WarzoneMembership {
                warzone: Warzone::AmarrMinmatar,
                regions: [RegionId(10), RegionId(11)].into_iter().collect(),
                systems: [BOSBOGER, AMAMAKE, HUOLA, KAMELA, SOSALA, IESA]
                    .into_iter()
                    .collect(),
            },
            WarzoneMembership {
                warzone: Warzone::CaldariGallente,
                regions: [RegionId(20)].into_iter().collect(),
                systems: [TAMA, NOURVUKAIKEN].into_iter().collect(),
            },
        ],
        [SOSALA].into_iter().collect(),
    )
    .unwrap()
}

pub fn record(
    id: SystemId,
    owner: u32,
    occupier: u32,
    contested: ContestStatus,
    victory_points: i64,
    threshold: i64,
) -> SystemRecord {
    SystemRecord {
        solar_system_id: id,
        owner_faction_id: owner,
        occupier_faction_id: occupier,
        contested,
        victory_points,
        victory_points_threshold: threshold,
        advantage: BTreeMap::new(),
    }
}

pub fn stats(faction_id: u32, systems_controlled: u64) -> StatsRecord {
    StatsRecord {
        faction_id,
        pilots: 1000,
        systems_controlled,
        kills: KillTotals {
            yesterday: 10,
            last_week: 70,
            total: 5000,
            last_hour: None,
        },
        victory_points: VictoryPointTotals {
            yesterday: 100,
            last_week: 700,
            total: 50_000,
        },
    }
}

pub fn amarr_minmatar_snapshot() -> Snapshot {
    use ContestStatus::*;
    let mut huola = record(HUOLA, MINMATAR, MINMATAR, Vulnerable, 4500, 3000);
    huola.advantage = [(AMARR, 0.6), (MINMATAR, 0.2)].into_iter().collect();
    let mut kamela = record(KAMELA, AMARR, AMARR, Contested, 1500, 3000);
    kamela.advantage = [(AMARR, 0.1), (MINMATAR, 0.4)].into_iter().collect();
    Snapshot {
        systems: vec![
            record(BOSBOGER, MINMATAR, MINMATAR, Uncontested, 0, 3000),
            record(AMAMAKE, MINMATAR, MINMATAR, Uncontested, 0, 3000),
            huola,
            kamela,
            record(SOSALA, AMARR, AMARR, Contested, 300, 3000),
            record(IESA, AMARR, MINMATAR, Contested, 2999, 3000),
        ],
        statistics: vec![stats(AMARR, 3), stats(MINMATAR, 3), stats(CALDARI, 1)],
    }
}

pub fn caldari_gallente_snapshot() -> Snapshot {
    use ContestStatus::*;
    Snapshot {
        systems: vec![
            record(TAMA, CALDARI, CALDARI, Contested, 600, 3000),
            record(NOURVUKAIKEN, GALLENTE, GALLENTE, Uncontested, 0, 3000),
        ],
        statistics: vec![stats(CALDARI, 1), stats(GALLENTE, 1)],
    }
}

/// Both warzones in one snapshot, as a mock source would hold them.
pub fn full_snapshot() -> Snapshot {
    let mut snapshot = amarr_minmatar_snapshot();
    let other = caldari_gallente_snapshot();
    snapshot.systems.extend(other.systems);
    snapshot.statistics.retain(|s| s.faction_id != CALDARI);
    snapshot.statistics.extend(other.statistics);
    snapshot
}
