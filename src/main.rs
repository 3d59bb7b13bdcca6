//! Wiggin -- faction warfare warzone analysis for EVE Online.
//!
//! Loads the static universe, fetches records from the configured source,
//! and prints warzone reports, single-system details, capture effort tables
//! or a JSON graph export. Logs go to stderr so stdout stays clean for
//! `--json`.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wiggin::analysis::{sort_systems, SortKey, WarzoneAnalyzer};
use wiggin::config::{Settings, SourceKind};
use wiggin::report::{
    write_capture_effort, write_system_details, write_systems_table, write_warzone_summary,
    WarzoneGraph,
};
use wiggin::source;
use wiggin::universe::{Faction, UniverseIndex, Warzone};

#[derive(Parser)]
#[command(name = "wiggin", version)]
#[command(about = "Faction warfare warzone analysis for EVE Online", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML settings file
    #[arg(long, global = true, env = "WIGGIN_CONFIG")]
    config: Option<PathBuf>,

    /// Static universe dataset (JSON)
    #[arg(long, global = true, env = "WIGGIN_UNIVERSE")]
    universe: Option<PathBuf>,

    /// Data source
    #[arg(long, global = true, value_enum, env = "WIGGIN_SOURCE")]
    source: Option<SourceKind>,

    /// Snapshot file for the mock source
    #[arg(long, global = true, env = "WIGGIN_MOCK_DATA")]
    mock_data: Option<PathBuf>,

    /// Generate mock data from this seed instead of reading a snapshot
    #[arg(long, global = true, env = "WIGGIN_MOCK_SEED")]
    mock_seed: Option<u64>,

    /// ESI base URL for the live source
    #[arg(long, global = true, env = "WIGGIN_ESI_URL")]
    esi_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Warzone summaries, system listings, or one system's details
    Report(ReportArgs),

    /// Export a warzone as a node/edge graph (JSON)
    Graph {
        #[arg(long)]
        warzone: Warzone,
    },

    /// Estimate the effort of capturing each enemy-held system
    Effort(EffortArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// amarr_minmatar or caldari_gallente; both when omitted
    #[arg(long)]
    warzone: Option<Warzone>,

    /// Show details for one system (exact name or prefix)
    #[arg(long)]
    system: Option<String>,

    /// name, security, contest or region
    #[arg(long, default_value = "name")]
    sort: SortKey,

    /// Include the per-system table
    #[arg(long)]
    full: bool,
}

#[derive(Args)]
struct EffortArgs {
    #[arg(long)]
    warzone: Warzone,

    /// Attacking faction (name, short name or id)
    #[arg(long)]
    attacker: Faction,

    /// System the attacker stages from
    #[arg(long)]
    staging: String,
}

impl Cli {
    /// Settings file first, then flags and environment on top.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;
        if let Some(path) = &self.universe {
            settings.universe_path = path.clone();
        }
        if let Some(kind) = self.source {
            settings.source = kind;
        }
        if let Some(path) = &self.mock_data {
            settings.mock.data_path = Some(path.clone());
            settings.mock.seed = None;
        }
        if let Some(seed) = self.mock_seed {
            settings.mock.seed = Some(seed);
        }
        if let Some(url) = &self.esi_url {
            settings.esi.base_url = url.clone();
        }
        Ok(settings)
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_tracing(&settings.log_filter);

    let index = UniverseIndex::load(&settings.universe_path)
        .with_context(|| format!("loading universe {}", settings.universe_path.display()))?;
    let source = source::from_settings(&settings, &index).context("building data source")?;
    info!(source = source.name(), "data source ready");
    let analyzer = WarzoneAnalyzer::new(&index, source);

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.command {
        Commands::Report(args) => report(&analyzer, &args, cli.json, &mut out).await?,
        Commands::Graph { warzone } => {
            let status = analyzer.warzone_status(warzone).await?;
            let graph = WarzoneGraph::build(&index, &status);
            write_json(&mut out, &graph)?;
        }
        Commands::Effort(args) => {
            let efforts = analyzer
                .capture_effort(args.warzone, args.attacker, &args.staging)
                .await?;
            if cli.json {
                write_json(&mut out, &efforts)?;
            } else {
                let staging = index
                    .find_system(&args.staging)
                    .context("staging system disappeared from the index")?;
                write_capture_effort(&mut out, args.warzone, args.attacker, staging, &efforts)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

async fn report<W: Write>(
    analyzer: &WarzoneAnalyzer<'_>,
    args: &ReportArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(name) = &args.system {
        let system = analyzer.search_system(name).await?;
        if json {
            write_json(out, &system)?;
        } else {
            write_system_details(out, &system)?;
        }
        return Ok(());
    }

    let statuses = analyzer.get_warzone_status(args.warzone).await?;
    if json {
        return write_json(out, &statuses);
    }
    for status in &statuses {
        write_warzone_summary(out, status)?;
        if args.full {
            // Same ordering as get_warzone_systems, without a second fetch.
            let mut systems = status.systems.clone();
            sort_systems(&mut systems, args.sort);
            writeln!(out)?;
            write_systems_table(out, &systems, args.sort)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
