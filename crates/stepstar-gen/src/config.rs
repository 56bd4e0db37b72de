//! Generation parameters.

use crate::error::GenError;

/// Default chance for a cell to become a wall.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.38;

/// Parameters for [`generate`](crate::generate).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Number of columns.
    pub cols: i32,
    /// Number of rows.
    pub rows: i32,
    /// Independent chance for each cell other than start and goal to be a
    /// wall.
    #[cfg_attr(feature = "serde", serde(default = "default_wall_probability"))]
    pub wall_probability: f64,
    /// RNG seed; `None` derives one from the system clock.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

#[cfg(feature = "serde")]
fn default_wall_probability() -> f64 {
    DEFAULT_WALL_PROBABILITY
}

impl Default for GenConfig {
    /// A 600×600 window at 10 pixels per cell: 60×60 cells.
    fn default() -> Self {
        Self {
            cols: 60,
            rows: 60,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: None,
        }
    }
}

impl GenConfig {
    /// A grid of `cols × rows` with the default wall probability.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Derive the grid size from a window size in pixels and the cell size
    /// `scale`.
    pub fn from_window(width: i32, height: i32, scale: i32) -> Result<Self, GenError> {
        if scale <= 0 || width < scale || height < scale {
            return Err(GenError::InvalidScale {
                width,
                height,
                scale,
            });
        }
        Ok(Self::new(width / scale, height / scale))
    }

    /// Set the wall probability (builder).
    pub fn with_wall_probability(mut self, p: f64) -> Self {
        self.wall_probability = p;
        self
    }

    /// Fix the seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.cols <= 0 || self.rows <= 0 {
            return Err(GenError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(GenError::InvalidProbability(self.wall_probability));
        }
        Ok(())
    }
}
