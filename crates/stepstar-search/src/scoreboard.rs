//! Per-cell cost state: g, f and predecessor.

use stepstar_core::{Grid, Point};

use crate::distance::heuristic;

/// Best-known costs and provenance for every cell, keyed by cell index.
///
/// [`relax`](Scoreboard::relax) is the only way to change a score after
/// construction, so a predecessor is always the cell that produced the
/// current `g`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    g: Vec<f64>,
    f: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    cols: usize,
    goal: Point,
}

impl Scoreboard {
    /// Initialise every cell to `g = f = +∞` with no predecessor, then seed
    /// the start cell with `g = 0` and `f = heuristic(start, goal)`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a cell index of `grid`.
    pub fn new(grid: &Grid, start: usize, goal: Point) -> Self {
        let len = grid.len();
        let mut sb = Self {
            g: vec![f64::INFINITY; len],
            f: vec![f64::INFINITY; len],
            predecessor: vec![None; len],
            cols: grid.cols() as usize,
            goal,
        };
        sb.g[start] = 0.0;
        sb.f[start] = heuristic(grid.point(start), goal);
        sb
    }

    /// Record a path to `to` through `from` costing `tentative_g`, if it is
    /// strictly cheaper than the best known one.
    ///
    /// Returns `true` when the relaxation was accepted; the caller must then
    /// (re-)admit `to` into the frontier.
    pub fn relax(&mut self, from: usize, to: usize, tentative_g: f64) -> bool {
        if tentative_g >= self.g[to] {
            return false;
        }
        let h = heuristic(self.point(to), self.goal);
        self.g[to] = tentative_g;
        self.f[to] = tentative_g + h;
        self.predecessor[to] = Some(from);
        log::trace!("relax {} -> {}: g={tentative_g} f={}", from, to, self.f[to]);
        true
    }

    /// Best known cost from the start to `idx` (`+∞` if undiscovered).
    #[inline]
    pub fn g(&self, idx: usize) -> f64 {
        self.g[idx]
    }

    /// `g + heuristic` for `idx` (`+∞` if undiscovered).
    #[inline]
    pub fn f(&self, idx: usize) -> f64 {
        self.f[idx]
    }

    /// The cell the current best path to `idx` arrives from.
    #[inline]
    pub fn predecessor(&self, idx: usize) -> Option<usize> {
        self.predecessor[idx]
    }

    /// All g-scores, indexed by cell.
    pub fn g_scores(&self) -> &[f64] {
        &self.g
    }

    /// All f-scores, indexed by cell.
    pub fn f_scores(&self) -> &[f64] {
        &self.f
    }

    /// The goal the heuristic estimates towards.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of cells tracked.
    pub fn len(&self) -> usize {
        self.g.len()
    }

    /// Whether the scoreboard tracks no cells.
    pub fn is_empty(&self) -> bool {
        self.g.is_empty()
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.cols) as i32, (idx / self.cols) as i32)
    }
}
