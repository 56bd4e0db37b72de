use thiserror::Error;

use stepstar_core::GridError;

use crate::engine::SearchState;

/// Errors surfaced by the search engine.
///
/// Reaching [`SearchState::Failed`] is not an error: an unreachable goal is a
/// normal outcome of the search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A start or goal point outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A start or goal index outside the grid.
    #[error("cell index {index} is outside a grid of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },

    /// [`Frontier::pop_min_f`](crate::Frontier::pop_min_f) was called on an
    /// empty frontier.
    #[error("cannot select from an empty frontier")]
    EmptyFrontierPop,

    /// A path was requested before the search succeeded.
    #[error("no path available: search is {state}")]
    NotReady { state: SearchState },
}
