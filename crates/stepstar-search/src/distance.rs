use stepstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used both as the cost of a move between adjacent cells (always 1 on a
/// 4-connected grid) and as the A* heuristic.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Heuristic estimate of the remaining cost from `p` to `goal`.
#[inline]
pub fn heuristic(p: Point, goal: Point) -> f64 {
    euclidean(p, goal)
}

/// Manhattan (L1) distance between two points: the exact step count between
/// two cells of an obstacle-free 4-connected grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
