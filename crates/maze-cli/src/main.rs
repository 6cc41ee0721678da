use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use maze_arm::{ArmConfig, DryRunArm};
use maze_grid::{doctor as grid_doctor, Grid, Reconcile};
use maze_proto::route::{MazeOrigin, RoutePlan};
use maze_solve::{solve_map, SolveReport};
use maze_vision::MazeSource;

#[derive(Debug, Parser)]
#[command(name = "maze", version, about = "Maze solving for the servo arm")]
struct Cli {
    #[arg(long)]
    config: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sanity-check the config file.
    Doctor,
    /// Carve a random maze and solve it.
    Generate {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Load a scanned maze (binarized PNG or edge JSON) and solve it.
    Solve {
        #[arg(long)]
        input: String,
        /// Dump the sampled edge evidence next to the route.
        #[arg(long)]
        dump_edges: Option<String>,
    },
    /// Solve, then walk the arm through the route (dry run).
    Run {
        /// Scanned maze; a random one is generated when omitted.
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, serde::Deserialize)]
struct Config {
    grid: GridCfg,
    generate: Option<GenerateCfg>,
    #[serde(default)]
    classify: ClassifyCfg,
    #[serde(default)]
    arm: ArmConfig,
    output: Option<OutputCfg>,
}

#[derive(Debug, serde::Deserialize)]
struct GridCfg { width: usize, height: usize }

#[derive(Debug, serde::Deserialize)]
struct GenerateCfg { seed: Option<u64> }

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct ClassifyCfg { reconcile: Reconcile }

impl Default for ClassifyCfg {
    fn default() -> Self { Self { reconcile: Reconcile::EitherSide } }
}

#[derive(Debug, serde::Deserialize)]
struct OutputCfg {
    /// Route plan JSON is written here after every successful solve.
    plan_path: Option<String>,
}

fn load_config(path: &str) -> Result<Config> {
    let s = std::fs::read_to_string(path).context("read config")?;
    parse_config(&s)
}

fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config toml")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;

    match cli.cmd {
        Command::Doctor => doctor(&cfg)?,
        Command::Generate { seed } => {
            let (grid, seed) = generated(&cfg, seed)?;
            let (_, plan) = solve_and_print(grid, MazeOrigin::Generated, Some(seed));
            finish(&cfg, plan)?;
        }
        Command::Solve { input, dump_edges } => {
            let grid = scanned(&cfg, &input, dump_edges.as_deref())?;
            let (_, plan) = solve_and_print(grid, MazeOrigin::Scanned, None);
            finish(&cfg, plan)?;
        }
        Command::Run { input, seed } => run(&cfg, input, seed).await?,
    }
    Ok(())
}

fn doctor(cfg: &Config) -> Result<()> {
    info!("doctor: starting");
    grid_doctor::check_dimensions(cfg.grid.width, cfg.grid.height)?;
    anyhow::ensure!(cfg.arm.pause_ms <= 10_000, "arm.pause_ms above 10s");
    if cfg.arm.pause_ms < 200 {
        warn!("arm.pause_ms={} may not let the servos settle", cfg.arm.pause_ms);
    }
    if let Some(path) = cfg.output.as_ref().and_then(|o| o.plan_path.as_ref()) {
        let dir = std::path::Path::new(path).parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            anyhow::ensure!(dir.is_dir(), "output.plan_path directory missing: {}", dir.display());
        }
    }
    if matches!(cfg.classify.reconcile, Reconcile::Independent) {
        warn!("classify.reconcile=independent: neighbors may disagree about shared walls");
    }
    info!("doctor: OK");
    Ok(())
}

fn generated(cfg: &Config, seed: Option<u64>) -> Result<(Grid, u64)> {
    grid_doctor::check_dimensions(cfg.grid.width, cfg.grid.height)?;
    let seed = seed
        .or_else(|| cfg.generate.as_ref().and_then(|g| g.seed))
        .unwrap_or_else(rand::random);
    let mut grid = Grid::new(cfg.grid.width, cfg.grid.height)?;
    let carve = grid.generate_seeded(seed);
    info!("generate: seed={} entry={:?} exit={:?} visited={}", seed, carve.entry, carve.exit, carve.visited);
    Ok((grid, seed))
}

fn scanned(cfg: &Config, input: &str, dump_edges: Option<&str>) -> Result<Grid> {
    let (w, h) = (cfg.grid.width, cfg.grid.height);
    grid_doctor::check_dimensions(w, h)?;
    let matrix = MazeSource::from_path(input).load(w, h)?;
    if let Some(path) = dump_edges {
        let s = serde_json::to_string_pretty(&matrix)?;
        std::fs::write(path, s).with_context(|| format!("write edges {}", path))?;
    }

    let mut grid = Grid::new(w, h)?;
    let stats = grid.populate_from_boundary_matrix(&matrix, cfg.classify.reconcile)?;
    info!("classify: walls={} disagreements={}", stats.walls, stats.disagreements);
    Ok(grid)
}

/// Prints the maze and solves it. Returns the report and a plan if solved.
fn solve_and_print(mut grid: Grid, origin: MazeOrigin, seed: Option<u64>) -> (SolveReport, Option<RoutePlan>) {
    print!("{}", grid);
    let report = solve_map(&mut grid);
    println!("{}", report);
    let plan = grid
        .solution()
        .map(|wps| RoutePlan::new(grid.width(), grid.height(), origin, seed, wps.to_vec()));
    (report, plan)
}

fn finish(cfg: &Config, plan: Option<RoutePlan>) -> Result<Option<RoutePlan>> {
    let Some(plan) = plan else { return Ok(None); };
    if let Some(path) = cfg.output.as_ref().and_then(|o| o.plan_path.as_ref()) {
        let s = serde_json::to_string_pretty(&plan)?;
        std::fs::write(path, s).with_context(|| format!("write route plan {}", path))?;
        info!("route plan written to {}", path);
    }
    Ok(Some(plan))
}

async fn run(cfg: &Config, input: Option<String>, seed: Option<u64>) -> Result<()> {
    info!("run: starting");
    let (grid, origin, seed) = match input {
        Some(path) => (scanned(cfg, &path, None)?, MazeOrigin::Scanned, None),
        None => {
            let (g, s) = generated(cfg, seed)?;
            (g, MazeOrigin::Generated, Some(s))
        }
    };

    let (report, plan) = solve_and_print(grid, origin, seed);
    let Some(plan) = finish(cfg, plan)? else {
        anyhow::bail!("{}; scan the maze again or pick another one", report);
    };

    let mut arm = DryRunArm::default();
    let st = maze_arm::traverse(&plan, &mut arm, &cfg.arm).await?;
    info!("run: visited {} waypoints in {:?}", st.visited, st.elapsed);
    Ok(())
}
