//! Command-line arguments for the `stepstar` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stepstar_core::Grid;
use stepstar_gen::{DEFAULT_WALL_PROBABILITY, GenConfig, GenError, generate};
use stepstar_search::{SearchConfig, TieBreak};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreakArg {
    /// Prefer the smallest cell index.
    LowestIndex,
    /// Prefer the oldest frontier member.
    InsertionOrder,
}

impl TieBreakArg {
    pub fn to_tie_break(self) -> TieBreak {
        match self {
            TieBreakArg::LowestIndex => TieBreak::LowestIndex,
            TieBreakArg::InsertionOrder => TieBreak::InsertionOrder,
        }
    }
}

/// Animate an A* search from the top-left to the bottom-right corner of a
/// random obstacle grid.
#[derive(Parser, Debug)]
#[command(name = "stepstar", version)]
pub struct Args {
    /// Window width in pixels; divided by --scale to get the column count.
    #[arg(long, default_value_t = 600)]
    pub width: i32,
    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: i32,
    /// Pixels per cell.
    #[arg(long, default_value_t = 10)]
    pub scale: i32,
    /// Column count; overrides the window size.
    #[arg(long, requires = "rows")]
    pub cols: Option<i32>,
    /// Row count; overrides the window size.
    #[arg(long, requires = "cols")]
    pub rows: Option<i32>,
    /// Chance for each cell to be a wall.
    #[arg(long = "wall-probability", default_value_t = DEFAULT_WALL_PROBABILITY)]
    pub wall_probability: f64,
    /// RNG seed; a clock-derived seed is used (and logged) when absent.
    #[arg(long)]
    pub seed: Option<u64>,
    /// How to choose between frontier cells with equal f.
    #[arg(long = "tie-break", value_enum, default_value_t = TieBreakArg::LowestIndex)]
    pub tie_break: TieBreakArg,
    /// Pause after each step, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 20)]
    pub delay_ms: u64,
    /// Stop after this many steps.
    #[arg(long = "max-steps")]
    pub max_steps: Option<usize>,
    /// Load the grid from a text file (`#` wall, `.` open) instead of
    /// generating one.
    #[arg(long, conflicts_with_all = ["seed", "cols", "rows"])]
    pub map: Option<PathBuf>,
    /// Skip the terminal animation and log progress instead.
    #[arg(long = "no-render")]
    pub no_render: bool,
    /// Exit as soon as the search ends instead of waiting for a key.
    #[arg(long = "no-wait")]
    pub no_wait: bool,
}

impl Args {
    /// Generation parameters from the size, probability and seed flags.
    pub fn gen_config(&self) -> Result<GenConfig, GenError> {
        let config = match (self.cols, self.rows) {
            (Some(cols), Some(rows)) => GenConfig::new(cols, rows),
            _ => GenConfig::from_window(self.width, self.height, self.scale)?,
        };
        let config = config.with_wall_probability(self.wall_probability);
        let config = match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            tie_break: self.tie_break.to_tie_break(),
            max_steps: self.max_steps,
        }
    }

    /// Read `--map` if given, otherwise generate a grid.
    pub fn load_grid(&self) -> Result<Grid, Box<dyn Error>> {
        if let Some(path) = &self.map {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            let grid = Grid::parse(&text)?;
            log::info!(
                "loaded {}x{} grid from {}",
                grid.cols(),
                grid.rows(),
                path.display()
            );
            return Ok(grid);
        }
        Ok(generate(&self.gen_config()?)?.grid)
    }
}
