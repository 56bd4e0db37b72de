//! Errors raised while building or querying a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors that can occur when constructing or addressing a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, cols) × [0, rows)` was queried.
    #[error("point {pos} is outside grid bounds {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },

    /// The wall vector does not hold exactly `cols * rows` entries.
    #[error("expected {expected} cells for the grid, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A text map has lines of different widths.
    #[error("grid map: inconsistent size at line {line}:\n{content}")]
    InconsistentSize { line: usize, content: String },

    /// A text map contains a character other than `#` or `.`.
    #[error("grid map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },

    /// A text map with no cells.
    #[error("grid map is empty")]
    Empty,
}
