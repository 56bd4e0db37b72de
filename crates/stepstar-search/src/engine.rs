//! The step-wise A* state machine.

use std::fmt;

use stepstar_core::{Grid, GridError, Point};

use crate::distance::euclidean;
use crate::error::SearchError;
use crate::frontier::{Frontier, TieBreak};
use crate::scoreboard::Scoreboard;

/// Lifecycle of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// More steps are needed.
    Running,
    /// The goal was selected for expansion; a path is available.
    Succeeded,
    /// The frontier ran dry before reaching the goal: no path exists.
    Failed,
}

impl SearchState {
    /// Whether the search has reached a final state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        })
    }
}

/// Tunables for a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Policy for equal-f frontier members.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tie_break: TieBreak,
    /// Upper bound on steps taken by [`drive`](crate::drive); `None` runs to
    /// a terminal state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_steps: Option<usize>,
}

/// What one step did, as seen by an observer.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// State after the step.
    pub state: SearchState,
    /// Number of steps taken so far, this one included.
    pub step: usize,
    /// The cell selected by the most recent step.
    pub current: Option<Point>,
    /// Frontier members after the step, in insertion order.
    pub frontier: Vec<Point>,
    /// f-score of every cell, indexed by cell index.
    pub f_scores: Vec<f64>,
}

/// Incremental A* over a [`Grid`].
///
/// Each call to [`step`](Self::step) performs exactly one expansion. The
/// engine never runs on its own; the caller decides the pace and may stop
/// between any two steps.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    grid: Grid,
    start: usize,
    goal: usize,
    config: SearchConfig,
    scoreboard: Scoreboard,
    frontier: Frontier,
    state: SearchState,
    current: Option<usize>,
    steps: usize,
}

/// Start a search between two cell indices of `grid`.
pub fn new_search(grid: Grid, start: usize, goal: usize) -> Result<SearchEngine, SearchError> {
    SearchEngine::from_indices(grid, start, goal, SearchConfig::default())
}

impl SearchEngine {
    /// Start a search from `start` to `goal` with the default configuration.
    pub fn new(grid: Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        Self::with_config(grid, start, goal, SearchConfig::default())
    }

    /// Start a search from `start` to `goal`.
    pub fn with_config(
        grid: Grid,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let out_of_bounds = |pos| GridError::OutOfBounds {
            pos,
            bounds: grid.bounds(),
        };
        let start_idx = grid.index(start).ok_or_else(|| out_of_bounds(start))?;
        let goal_idx = grid.index(goal).ok_or_else(|| out_of_bounds(goal))?;
        Ok(Self::build(grid, start_idx, goal_idx, config))
    }

    /// Start a search between two cell indices.
    pub fn from_indices(
        grid: Grid,
        start: usize,
        goal: usize,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let len = grid.len();
        for index in [start, goal] {
            if index >= len {
                return Err(SearchError::IndexOutOfBounds { index, len });
            }
        }
        Ok(Self::build(grid, start, goal, config))
    }

    fn build(grid: Grid, start: usize, goal: usize, config: SearchConfig) -> Self {
        let goal_point = grid.point(goal);
        if grid.is_wall_at(goal) {
            log::warn!("goal {goal_point} is a wall; the search can only fail");
        }
        let scoreboard = Scoreboard::new(&grid, start, goal_point);
        let frontier = Frontier::with_start(grid.len(), start, config.tie_break);
        log::debug!(
            "new search {} -> {goal_point} on {}x{} grid",
            grid.point(start),
            grid.cols(),
            grid.rows()
        );
        Self {
            grid,
            start,
            goal,
            config,
            scoreboard,
            frontier,
            state: SearchState::Running,
            current: None,
            steps: 0,
        }
    }

    /// Discard all search progress and return to the initial state.
    pub fn reset(&mut self) {
        self.scoreboard = Scoreboard::new(&self.grid, self.start, self.grid.point(self.goal));
        self.frontier.clear();
        self.frontier.insert(self.start);
        self.state = SearchState::Running;
        self.current = None;
        self.steps = 0;
    }

    /// Advance the search by one expansion.
    ///
    /// 1. An empty frontier means the goal is unreachable: the engine fails.
    /// 2. Otherwise the lowest-f member becomes `current` and leaves the
    ///    frontier.
    /// 3. If `current` is the goal, the engine succeeds.
    /// 4. Otherwise every open neighbour is relaxed through `current`, and
    ///    each accepted relaxation (re-)admits the neighbour.
    ///
    /// Once the engine is in a terminal state, further calls change nothing
    /// and report that state again.
    pub fn step(&mut self) -> StepResult {
        if self.state.is_terminal() {
            return self.snapshot();
        }
        self.steps += 1;

        let Ok(ci) = self.frontier.pop_min_f(&self.scoreboard) else {
            self.state = SearchState::Failed;
            log::info!("frontier exhausted after {} steps: no path", self.steps);
            return self.snapshot();
        };
        self.current = Some(ci);

        if ci == self.goal {
            self.state = SearchState::Succeeded;
            log::info!(
                "goal reached after {} steps, cost {}",
                self.steps,
                self.scoreboard.g(ci)
            );
            return self.snapshot();
        }

        let cp = self.grid.point(ci);
        let current_g = self.scoreboard.g(ci);
        for np in self.grid.neighbors4(cp) {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            let tentative_g = current_g + euclidean(cp, np);
            if self.scoreboard.relax(ci, ni, tentative_g) {
                self.frontier.insert(ni);
            }
        }

        log::debug!(
            "step {}: expanded {cp} (g={current_g}), frontier {}",
            self.steps,
            self.frontier.len()
        );
        self.snapshot()
    }

    /// The observable state as of the last step.
    pub fn snapshot(&self) -> StepResult {
        StepResult {
            state: self.state,
            step: self.steps,
            current: self.current(),
            frontier: self.frontier.iter().map(|i| self.grid.point(i)).collect(),
            f_scores: self.scoreboard.f_scores().to_vec(),
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The cell selected by the most recent step, if any.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current.map(|i| self.grid.point(i))
    }

    /// Steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.grid.point(self.start)
    }

    /// Goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.grid.point(self.goal)
    }

    #[inline]
    pub(crate) fn goal_index(&self) -> usize {
        self.goal
    }

    /// Configuration the run was started with.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The open set.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Per-cell scores and predecessors.
    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Whether `p` is currently in the frontier. Out-of-bounds points never
    /// are.
    pub fn in_frontier(&self, p: Point) -> bool {
        self.grid.index(p).is_some_and(|i| self.frontier.contains(i))
    }

    /// Best known cost from the start to `p`, `None` while undiscovered or
    /// out of bounds.
    pub fn g_at(&self, p: Point) -> Option<f64> {
        let g = self.scoreboard.g(self.grid.index(p)?);
        g.is_finite().then_some(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_with_only_the_start() {
        let eng = SearchEngine::new(Grid::new(3, 3), Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(eng.state(), SearchState::Running);
        assert_eq!(eng.steps(), 0);
        assert_eq!(eng.current(), None);
        assert_eq!(eng.frontier().iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(eng.g_at(Point::new(0, 0)), Some(0.0));
        assert_eq!(eng.g_at(Point::new(1, 0)), None);
    }

    #[test]
    fn first_step_expands_start() {
        let mut eng =
            SearchEngine::new(Grid::new(3, 3), Point::new(0, 0), Point::new(2, 2)).unwrap();
        let r = eng.step();
        assert_eq!(r.state, SearchState::Running);
        assert_eq!(r.step, 1);
        assert_eq!(r.current, Some(Point::new(0, 0)));
        // Right then down, following neighbour order.
        assert_eq!(r.frontier, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(r.f_scores.len(), 9);
        assert!(!eng.in_frontier(Point::new(0, 0)));
        assert_eq!(eng.scoreboard().predecessor(1), Some(0));
        assert_eq!(eng.scoreboard().predecessor(3), Some(0));
    }

    #[test]
    fn start_equals_goal_succeeds_immediately() {
        let mut eng =
            SearchEngine::new(Grid::new(3, 3), Point::new(1, 1), Point::new(1, 1)).unwrap();
        let r = eng.step();
        assert_eq!(r.state, SearchState::Succeeded);
        assert_eq!(r.current, Some(Point::new(1, 1)));
        assert_eq!(eng.steps(), 1);
    }

    #[test]
    fn terminal_steps_are_no_ops() {
        let grid = Grid::parse(".#\n#.").unwrap();
        let mut eng = SearchEngine::new(grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(eng.step().state, SearchState::Running);
        assert_eq!(eng.step().state, SearchState::Failed);
        let before = eng.snapshot();
        let again = eng.step();
        assert_eq!(again, before);
        assert_eq!(eng.steps(), 2);
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let err = SearchEngine::new(Grid::new(2, 2), Point::new(0, 0), Point::new(2, 0));
        assert!(matches!(
            err,
            Err(SearchError::Grid(GridError::OutOfBounds { .. }))
        ));
        assert_eq!(
            new_search(Grid::new(2, 2), 0, 4).err(),
            Some(SearchError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn new_search_uses_indices() {
        let eng = new_search(Grid::new(4, 2), 0, 7).unwrap();
        assert_eq!(eng.start(), Point::new(0, 0));
        assert_eq!(eng.goal(), Point::new(3, 1));
        assert_eq!(eng.config(), SearchConfig::default());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut eng =
            SearchEngine::new(Grid::new(4, 4), Point::new(0, 0), Point::new(3, 3)).unwrap();
        let first = eng.snapshot();
        for _ in 0..4 {
            eng.step();
        }
        assert_ne!(eng.snapshot(), first);
        eng.reset();
        assert_eq!(eng.snapshot(), first);
        assert_eq!(eng.state(), SearchState::Running);
    }

    #[test]
    fn wall_goal_fails() {
        let grid = Grid::parse("..\n.#").unwrap();
        let mut eng = SearchEngine::new(grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        let mut last = eng.step();
        while !last.state.is_terminal() {
            last = eng.step();
        }
        assert_eq!(last.state, SearchState::Failed);
    }

    #[test]
    fn state_display() {
        assert_eq!(SearchState::Running.to_string(), "running");
        assert_eq!(SearchState::Succeeded.to_string(), "succeeded");
        assert_eq!(SearchState::Failed.to_string(), "failed");
        assert!(SearchState::Failed.is_terminal());
        assert!(!SearchState::Running.is_terminal());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let cfg: SearchConfig =
            serde_json::from_str(r#"{"tie_break": "insertion-order", "max_steps": 40}"#).unwrap();
        assert_eq!(cfg.tie_break, TieBreak::InsertionOrder);
        assert_eq!(cfg.max_steps, Some(40));

        let empty: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchConfig::default());
    }
}
