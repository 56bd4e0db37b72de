//! **stepstar-core**: obstacle grids and geometry for step-by-step pathfinding.
//!
//! A [`Grid`] is a dense, immutable array of open/wall cells addressed either
//! by [`Point`] or by the canonical flat index `y * cols + x`. Everything in
//! the search crate keys its state by that index.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
