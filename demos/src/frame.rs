//! Presentation-neutral picture of a search: one [`Tile`] per cell.
//!
//! A [`Frame`] is computed from a read-only engine (plus the path once one
//! is known) and can be diffed against the previous frame so renderers only
//! redraw what changed.

use std::fmt;

use stepstar_core::Point;
use stepstar_search::SearchEngine;

/// What a renderer should show for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
    Frontier,
    Current,
    Path,
}

impl Tile {
    /// Single-character text form.
    pub const fn ch(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Frontier => 'o',
            Self::Current => '@',
            Self::Path => '*',
        }
    }
}

/// A full grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub cols: i32,
    pub rows: i32,
    pub tiles: Vec<Tile>,
}

impl Frame {
    /// Picture the engine's current state.
    ///
    /// While searching, frontier members and the current cell are
    /// highlighted. Once a `path` is supplied only walls and the path are
    /// shown.
    pub fn capture(engine: &SearchEngine, path: Option<&[Point]>) -> Self {
        let grid = engine.grid();
        let mut tiles: Vec<Tile> = grid
            .iter()
            .map(|(_, wall)| if wall { Tile::Wall } else { Tile::Open })
            .collect();

        match path {
            Some(path) => {
                for &p in path {
                    if let Some(i) = grid.index(p) {
                        tiles[i] = Tile::Path;
                    }
                }
            }
            None => {
                for i in engine.frontier().iter() {
                    tiles[i] = Tile::Frontier;
                }
                if let Some(i) = engine.current().and_then(|p| grid.index(p)) {
                    tiles[i] = Tile::Current;
                }
            }
        }

        Self {
            cols: grid.cols(),
            rows: grid.rows(),
            tiles,
        }
    }

    /// Tile at `p`, `None` outside the frame.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if p.x < 0 || p.y < 0 || p.x >= self.cols || p.y >= self.rows {
            return None;
        }
        Some(self.tiles[(p.y * self.cols + p.x) as usize])
    }

    /// Cells whose tile differs from `prev`. A frame of a different size
    /// counts as entirely changed.
    pub fn diff(&self, prev: Option<&Frame>) -> Vec<(Point, Tile)> {
        let same_size = prev.is_some_and(|p| p.cols == self.cols && p.rows == self.rows);
        let mut changed = Vec::new();
        for (i, &tile) in self.tiles.iter().enumerate() {
            let p = Point::new(i as i32 % self.cols, i as i32 / self.cols);
            let old = if same_size {
                prev.and_then(|f| f.at(p))
            } else {
                None
            };
            if old != Some(tile) {
                changed.push((p, tile));
            }
        }
        changed
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 && i as i32 % self.cols == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", tile.ch())?;
        }
        Ok(())
    }
}
