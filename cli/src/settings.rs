use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use hueguess_core::{Coord, GameConfig};

/// Board settings that can be given on the command line.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// Read board and palette settings from a TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of guesses per round
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of colors in the solution
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Palette rows
    #[arg(long)]
    pub palette_rows: Option<Coord>,

    /// Palette columns
    #[arg(long)]
    pub palette_cols: Option<Coord>,

    /// Start playing right away instead of waiting in the menu
    #[arg(long)]
    pub no_menu: bool,
}

/// Defaults, then the config file, then explicit flags.
pub fn load(args: &ConfigArgs) -> anyhow::Result<GameConfig> {
    let config = match &args.config {
        Some(path) => read_file(path)?,
        None => GameConfig::default(),
    };
    Ok(apply_overrides(config, args).normalized())
}

fn read_file(path: &Path) -> anyhow::Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("Invalid config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse(text: &str) -> anyhow::Result<GameConfig> {
    Ok(toml::from_str(text)?)
}

fn apply_overrides(mut config: GameConfig, args: &ConfigArgs) -> GameConfig {
    if let Some(rows) = args.rows {
        config.board.0 = rows;
    }
    if let Some(cols) = args.cols {
        config.board.1 = cols;
    }
    if let Some(rows) = args.palette_rows {
        config.palette.0 = rows;
    }
    if let Some(cols) = args.palette_cols {
        config.palette.1 = cols;
    }
    if args.no_menu {
        config.start_in_menu = false;
    }
    config
}

/// Seed taken from the system clock, for when none is forced.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
