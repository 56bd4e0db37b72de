//! Incremental A* search over obstacle grids.
//!
//! Unlike a run-to-completion pathfinder, [`SearchEngine`] advances exactly
//! one expansion per [`step`](SearchEngine::step) and exposes its frontier,
//! scores and provenance between steps, so a driver can pace the search and
//! an [`Observer`] can render every intermediate state.
//!
//! | Piece | Owns |
//! |---|---|
//! | [`Scoreboard`] | g / f scores and predecessors, keyed by cell index |
//! | [`Frontier`] | the open set and its minimum-f selection |
//! | [`SearchEngine`] | the RUNNING → SUCCEEDED / FAILED state machine |
//! | [`drive`] | the step loop that feeds an [`Observer`] |
//!
//! Movement is 4-directional and both the edge cost and the heuristic are the
//! Euclidean distance. On a 4-connected grid every edge costs exactly 1 and
//! the straight-line estimate never exceeds the remaining step count, so the
//! heuristic is admissible and consistent, though not tight.

mod bfs;
mod distance;
mod engine;
mod error;
mod frontier;
mod observer;
mod path;
mod scoreboard;

pub use bfs::{UNREACHABLE, bfs_distances};
pub use distance::{euclidean, heuristic, manhattan};
pub use engine::{SearchConfig, SearchEngine, SearchState, StepResult, new_search};
pub use error::SearchError;
pub use frontier::{Frontier, TieBreak};
pub use observer::{NullObserver, Observer, Outcome, Trace, drive};
pub use path::{path_cost, reconstruct};
pub use scoreboard::Scoreboard;
