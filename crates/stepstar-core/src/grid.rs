//! The [`Grid`] type: a dense 2D array of open and wall cells.
//!
//! Cells are stored row-major in a flat vector, so a cell's index is
//! `y * cols + x`. The index is derived from the coordinates and is the only
//! key the search state uses; two cells are the same cell iff their indices
//! match.
//!
//! A grid is built once and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Character used for walls in the text format.
pub const WALL_RUNE: char = '#';
/// Character used for open cells in the text format.
pub const OPEN_RUNE: char = '.';

/// An immutable obstacle grid of `cols × rows` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    walls: Vec<bool>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell open.
    pub fn new(cols: i32, rows: i32) -> Self {
        let bounds = Range::new(0, 0, cols.max(0), rows.max(0));
        Self {
            walls: vec![false; bounds.len()],
            bounds,
        }
    }

    /// Create a grid from a row-major wall vector of length `cols * rows`.
    pub fn from_walls(cols: i32, rows: i32, walls: Vec<bool>) -> Result<Self, GridError> {
        let bounds = Range::new(0, 0, cols.max(0), rows.max(0));
        if walls.len() != bounds.len() {
            return Err(GridError::SizeMismatch {
                expected: bounds.len(),
                actual: walls.len(),
            });
        }
        Ok(Self { walls, bounds })
    }

    /// Parse a text map: one line per row, `#` for walls and `.` for open
    /// cells. Surrounding whitespace on the whole string and on each line is
    /// ignored, so maps can be written as indented string literals.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut walls = Vec::new();
        let mut cols: i32 = -1;
        let mut rows: i32 = 0;

        for (y, line) in s.trim().lines().enumerate() {
            let line = line.trim();
            let mut x: i32 = 0;
            for ch in line.chars() {
                let wall = match ch {
                    WALL_RUNE => true,
                    OPEN_RUNE => false,
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x, y as i32),
                        });
                    }
                };
                walls.push(wall);
                x += 1;
            }
            if cols >= 0 && x != cols {
                return Err(GridError::InconsistentSize {
                    line: y,
                    content: line.to_string(),
                });
            }
            cols = x;
            rows += 1;
        }

        if cols <= 0 {
            return Err(GridError::Empty);
        }
        Self::from_walls(cols, rows, walls)
    }

    /// The bounding range `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (cols, rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The top-left cell, index 0.
    #[inline]
    pub fn top_left(&self) -> Point {
        self.bounds.min
    }

    /// The bottom-right cell, index `len() - 1`.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }

    /// Canonical flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.cols() as usize + p.x as usize)
    }

    /// Convert a flat index back to its point.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        assert!(idx < self.len(), "cell index {idx} out of range");
        let cols = self.cols() as usize;
        Point::new((idx % cols) as i32, (idx / cols) as i32)
    }

    /// Checked wall lookup.
    pub fn cell(&self, p: Point) -> Result<bool, GridError> {
        self.index(p)
            .map(|i| self.walls[i])
            .ok_or(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            })
    }

    /// Whether the cell at `p` is a wall.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds; use [`cell`](Self::cell) for a
    /// checked query.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.walls[i],
            None => panic!("point {p} is outside grid bounds {}", self.bounds),
        }
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.walls[i])
    }

    /// Whether the cell with flat index `idx` is a wall.
    #[inline]
    pub fn is_wall_at(&self, idx: usize) -> bool {
        self.walls[idx]
    }

    /// Open in-bounds cardinal neighbours of `p`, in the order left, right,
    /// up, down.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_open(n))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Row-major iterator over `(Point, is_wall)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.walls.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.cols() {
                let ch = if self.is_wall(Point::new(x, y)) {
                    WALL_RUNE
                } else {
                    OPEN_RUNE
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
