//! End-to-end analysis over the bundled sample dataset.
//!
//! Loads `data/universe.json`, replays `data/snapshot.json` through the mock
//! source, and checks the derived warzone state.

use std::path::PathBuf;

use wiggin::analysis::{EffortCategory, SortKey, WarzoneAnalyzer};
use wiggin::classify::AdjacencyTier;
use wiggin::report::WarzoneGraph;
use wiggin::source::{generate_snapshot, MockSource};
use wiggin::universe::{Faction, SystemId, UniverseIndex, Warzone};
use wiggin::warfare::{Snapshot, SystemRecord};
use wiggin::AnalysisError;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn universe() -> UniverseIndex {
    UniverseIndex::load(&data("universe.json")).expect("sample universe loads")
}

fn analyzer(index: &UniverseIndex) -> WarzoneAnalyzer<'_> {
    let source = MockSource::from_path(&data("snapshot.json")).expect("sample snapshot loads");
    WarzoneAnalyzer::new(index, Box::new(source))
}

fn tier_of(index: &UniverseIndex, status: &wiggin::warfare::WarzoneStatus<'_>, name: &str) -> AdjacencyTier {
    let id = index.find_system(name).unwrap().id;
    status.system(id).unwrap().tier
}

#[test]
fn sample_universe_shape() {
    let index = universe();
    assert_eq!(index.len(), 19);
    assert_eq!(index.fw_system_ids(Warzone::AmarrMinmatar).len(), 12);
    assert_eq!(index.fw_system_ids(Warzone::CaldariGallente).len(), 6);
    assert_eq!(index.permanent_frontlines().len(), 2);
    let rens = index.find_system("Rens").unwrap();
    assert!(!index.is_fw_system(rens.id));
}

#[tokio::test]
async fn amarr_minmatar_status() {
    let index = universe();
    let analyzer = analyzer(&index);
    let statuses = analyzer
        .get_warzone_status(Some(Warzone::AmarrMinmatar))
        .await
        .unwrap();
    let status = &statuses[0];

    assert_eq!(status.total_systems, 12);
    assert!(status.skipped.is_empty());
    assert_eq!(status.leader, Some(Faction::MinmatarRepublic));
    assert_eq!(status.tiers.frontline, 4);
    assert_eq!(status.tiers.command_operations, 4);
    assert_eq!(status.tiers.rearguard, 4);

    for name in ["Arnstur", "Kamela", "Huola", "Raa"] {
        assert_eq!(tier_of(&index, status, name), AdjacencyTier::Frontline, "{name}");
    }
    for name in ["Evati", "Resbroko", "Sosala", "Anka"] {
        assert_eq!(tier_of(&index, status, name), AdjacencyTier::CommandOperations, "{name}");
    }
    for name in ["Amamake", "Bosboger", "Auner", "Iesa"] {
        assert_eq!(tier_of(&index, status, name), AdjacencyTier::Rearguard, "{name}");
    }

    let minmatar = status.tally(Faction::MinmatarRepublic).unwrap();
    assert_eq!(minmatar.owned, 7);
    assert_eq!(minmatar.occupied, 8);
    assert_eq!(status.stats(Faction::MinmatarRepublic).unwrap().pilots, 4875);
    assert_eq!(status.faction_stats.len(), 2);
}

#[tokio::test]
async fn caldari_gallente_status() {
    let index = universe();
    let analyzer = analyzer(&index);
    let status = analyzer.warzone_status(Warzone::CaldariGallente).await.unwrap();

    assert_eq!(status.total_systems, 6);
    assert_eq!(status.leader, None);
    assert_eq!(status.tiers.frontline, 4);
    assert_eq!(tier_of(&index, &status, "Kedama"), AdjacencyTier::CommandOperations);
    assert_eq!(tier_of(&index, &status, "Okkamon"), AdjacencyTier::CommandOperations);
}

#[tokio::test]
async fn over_capture_is_clamped() {
    let index = universe();
    let analyzer = analyzer(&index);
    let huola = analyzer.search_system("huola").await.unwrap();
    assert_eq!(huola.victory_points, 80_000);
    assert_eq!(huola.contest_percent, 100.0);
    assert!((huola.net_advantage - 0.7).abs() < 1e-9);
}

#[tokio::test]
async fn prefix_search_and_sorting() {
    let index = universe();
    let analyzer = analyzer(&index);

    assert_eq!(analyzer.search_system("Ich").await.unwrap().name(), "Ichoriya");
    assert_eq!(
        analyzer.search_system("huola").await.unwrap(),
        analyzer.search_system("Huola").await.unwrap()
    );
    assert!(matches!(
        analyzer.search_system("Jita").await,
        Err(AnalysisError::NotFound(_))
    ));

    let systems = analyzer
        .get_warzone_systems(Warzone::AmarrMinmatar, SortKey::Security)
        .await
        .unwrap();
    let securities: Vec<f64> = systems.iter().map(|s| s.system.security_status).collect();
    assert!(securities.windows(2).all(|w| w[0] >= w[1]));

    let by_region = analyzer
        .get_warzone_systems(Warzone::CaldariGallente, SortKey::Region)
        .await
        .unwrap();
    // Placid (10000048) sorts before Black Rise (10000069).
    assert_eq!(by_region[0].name(), "Ichoriya");
    assert_eq!(by_region[1].name(), "Okkamon");
}

#[tokio::test]
async fn capture_effort_from_highsec() {
    let index = universe();
    let analyzer = analyzer(&index);
    let efforts = analyzer
        .capture_effort(Warzone::AmarrMinmatar, Faction::AmarrEmpire, "Rens")
        .await
        .unwrap();

    // Minmatar occupies eight systems, Raa included.
    assert_eq!(efforts.len(), 8);
    assert!(efforts.windows(2).all(|w| w[0].score <= w[1].score));
    assert!(efforts.iter().all(|e| (0.0..=100.0).contains(&e.score)));
    let raa = efforts.iter().find(|e| e.system.name == "Raa").unwrap();
    assert_eq!(raa.tier, AdjacencyTier::Frontline);
    assert!(efforts
        .iter()
        .any(|e| e.category <= EffortCategory::Moderate));
}

#[tokio::test]
async fn graph_export_matches_induced_subgraph() {
    let index = universe();
    let analyzer = analyzer(&index);
    let status = analyzer.warzone_status(Warzone::CaldariGallente).await.unwrap();
    let graph = WarzoneGraph::build(&index, &status);

    assert_eq!(graph.nodes.len(), 6);
    assert_eq!(graph.edges.len(), 6);
    assert!(graph.edges.iter().all(|e| e.from < e.to));
    assert!(graph.edges.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn generated_snapshot_is_accepted() {
    let index = universe();
    for seed in [0, 1, 99] {
        let snapshot = generate_snapshot(&index, seed);
        let analyzer = WarzoneAnalyzer::new(&index, Box::new(MockSource::new(snapshot)));
        let statuses = analyzer.get_warzone_status(None).await.unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].total_systems + statuses[1].total_systems, 18);
        assert!(statuses.iter().all(|s| s.skipped.is_empty()));
    }
}

#[tokio::test]
async fn snapshot_missing_a_system_fails_whole_warzone() {
    let index = universe();
    let mut snapshot = MockSource::from_path(&data("snapshot.json"))
        .unwrap()
        .snapshot()
        .clone();
    snapshot
        .systems
        .retain(|r| r.solar_system_id != SystemId(30003072));
    let analyzer = WarzoneAnalyzer::new(&index, Box::new(MockSource::new(snapshot)));

    let err = analyzer
        .warzone_status(Warzone::AmarrMinmatar)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::DataSource(_)));
    // The other warzone is unaffected.
    assert!(analyzer.warzone_status(Warzone::CaldariGallente).await.is_ok());
}

fn with_record(
    snapshot: &Snapshot,
    id: SystemId,
    edit: impl FnOnce(&mut SystemRecord),
) -> Snapshot {
    let mut snapshot = snapshot.clone();
    let record = snapshot
        .systems
        .iter_mut()
        .find(|r| r.solar_system_id == id)
        .expect("record present");
    edit(record);
    snapshot
}

#[tokio::test]
async fn malformed_factions_skip_one_system_only() {
    let index = universe();
    let kamela = SystemId(30003068);
    let base = MockSource::from_path(&data("snapshot.json"))
        .unwrap()
        .snapshot()
        .clone();
    let baseline = WarzoneAnalyzer::new(&index, Box::new(MockSource::new(base.clone())))
        .warzone_status(Warzone::CaldariGallente)
        .await
        .unwrap();

    let corrupted = [
        with_record(&base, kamela, |r| {
            r.occupier_faction_id = Faction::GallenteFederation.id()
        }),
        with_record(&base, kamela, |r| {
            r.owner_faction_id = 0;
            r.occupier_faction_id = 0;
        }),
    ];
    for snapshot in corrupted {
        let analyzer = WarzoneAnalyzer::new(&index, Box::new(MockSource::new(snapshot)));
        let statuses = analyzer.get_warzone_status(None).await.unwrap();

        let am = &statuses[0];
        assert_eq!(am.skipped.len(), 1);
        assert_eq!(am.skipped[0].system, kamela);
        assert_eq!(am.total_systems, 11);
        assert!(am.system(kamela).is_none());
        assert_eq!(statuses[1], baseline);
    }
}
