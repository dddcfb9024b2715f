use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use minefield_core::{CellCount, Coord, Difficulty, GameConfig, MineGenerator, RejectionGenerator, ShuffleGenerator};

mod command;
mod render;
mod session;
mod settings;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Play a round of minefield in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset used when no config file is given
    #[arg(short, long, value_enum, default_value_t = Level::Easy)]
    difficulty: Level,

    /// TOML file with `rows`, `cols`, `mines` and optionally `safe_zone`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<Coord>,

    /// Override the number of columns
    #[arg(long)]
    cols: Option<Coord>,

    /// Override the number of mines
    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Place mines by resampling random cells instead of shuffling
    #[arg(long)]
    legacy_placement: bool,

    /// Place mines on the first reveal, keeping the revealed cell and its neighbours clear
    #[arg(long)]
    safe_first_click: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let base = match &args.config {
        Some(path) => settings::load_config(path)?,
        None => GameConfig::from(Difficulty::from(args.difficulty)),
    };
    let overrides = settings::Overrides {
        rows: args.rows,
        cols: args.cols,
        mines: args.mines,
    };
    let config = settings::finalize(base, overrides, args.safe_first_click)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let generator: Box<dyn MineGenerator> = if args.legacy_placement {
        Box::new(RejectionGenerator::from_seed(seed))
    } else {
        Box::new(ShuffleGenerator::from_seed(seed))
    };

    let mut session = session::Session::new(config, generator, args.safe_first_click)?;
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
