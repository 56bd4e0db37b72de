//! Path reconstruction from scoreboard provenance.

use stepstar_core::{Grid, Point};

use crate::distance::euclidean;
use crate::engine::{SearchEngine, SearchState};
use crate::error::SearchError;
use crate::scoreboard::Scoreboard;

/// Walk predecessor links back from `goal` and return the cells from the
/// start to `goal`, both inclusive.
///
/// The walk collects the cells *behind* `goal`; `goal` itself is appended
/// explicitly at the end.
pub fn reconstruct(scores: &Scoreboard, grid: &Grid, goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal;
    while let Some(prev) = scores.predecessor(ci) {
        path.push(grid.point(prev));
        ci = prev;
    }
    path.reverse();
    path.push(grid.point(goal));
    path
}

/// Sum of the Euclidean move costs along `path`.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}

impl SearchEngine {
    /// The path from start to goal found by a successful search.
    ///
    /// Returns [`SearchError::NotReady`] unless the engine is in
    /// [`SearchState::Succeeded`].
    pub fn reconstruct_path(&self) -> Result<Vec<Point>, SearchError> {
        if self.state() != SearchState::Succeeded {
            return Err(SearchError::NotReady {
                state: self.state(),
            });
        }
        Ok(reconstruct(self.scoreboard(), self.grid(), self.goal_index()))
    }
}
