//! Random obstacle placement.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use stepstar_core::Grid;

use crate::config::GenConfig;
use crate::error::GenError;

/// A generated grid together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub grid: Grid,
    pub seed: u64,
}

/// Generate a grid from `config`, seeding a [`StdRng`] with `config.seed`
/// or, if absent, with a value derived from the system clock.
///
/// The seed actually used is logged and returned so the grid can be
/// reproduced.
pub fn generate(config: &GenConfig) -> Result<Generated, GenError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = generate_with_rng(config, &mut rng)?;
    log::info!(
        "generated {}x{} grid, seed {seed}, {} of {} cells open",
        grid.cols(),
        grid.rows(),
        grid.open_count(),
        grid.len()
    );
    Ok(Generated { grid, seed })
}

/// Generate a grid from `config` using the caller's RNG; `config.seed` is
/// ignored.
///
/// One `f64` is drawn per cell in index order; a draw below
/// `wall_probability` makes a wall. The first and last cells are then
/// forced open.
pub fn generate_with_rng<R: Rng>(
    config: &GenConfig,
    rng: &mut R,
) -> Result<Grid, GenError> {
    config.validate()?;
    let len = (config.cols as usize) * (config.rows as usize);

    let mut walls: Vec<bool> = (0..len)
        .map(|_| rng.random::<f64>() < config.wall_probability)
        .collect();
    walls[0] = false;
    walls[len - 1] = false;

    Ok(Grid::from_walls(config.cols, config.rows, walls)?)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
