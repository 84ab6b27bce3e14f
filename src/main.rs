use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, GameEngine, Scenario};
use grid_snake::modes::{HeadlessMode, RealtimeMode, parse_script};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake simulation driven from the terminal")]
struct Cli {
    /// How ticks and input are driven
    #[arg(long, default_value = "headless")]
    mode: Mode,

    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Milliseconds between ticks (realtime mode)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Let the chain pass through its own body
    #[arg(long)]
    no_self_collision: bool,

    /// Seed for item placement
    #[arg(long)]
    seed: Option<u64>,

    /// Headless input script: w/a/s/d turn, '.' waits one tick
    #[arg(long, default_value = "")]
    script: String,

    /// JSON scenario to start from instead of a fresh game
    #[arg(long)]
    scenario: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Replay --script in lockstep and print the result
    Headless,
    /// Read commands from stdin and tick on a wall clock
    Realtime,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.no_self_collision {
        config.self_collision_fatal = false;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid scenario in {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let engine = match &cli.scenario {
        Some(path) => GameEngine::from_scenario(config, load_scenario(path)?)?,
        None => GameEngine::new(config)?,
    };

    // Dispatch to appropriate mode
    let report = match cli.mode {
        Mode::Headless => {
            let script = parse_script(&cli.script)?;
            HeadlessMode::new(engine).run(&script)
        }
        Mode::Realtime => RealtimeMode::new(engine).run().await?,
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");

    Ok(())
}
