use thiserror::Error;

use stepstar_core::GridError;

/// Invalid generation parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// Columns or rows are not positive.
    #[error("grid must have at least one cell, got {cols}x{rows}")]
    EmptyGrid { cols: i32, rows: i32 },

    /// The wall probability is outside `[0, 1]` (or NaN).
    #[error("wall probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// `scale` does not fit the window at least once in each direction.
    #[error("scale {scale} does not fit a {width}x{height} window")]
    InvalidScale { width: i32, height: i32, scale: i32 },

    #[error(transparent)]
    Grid(#[from] GridError),
}
