use std::collections::VecDeque;

use stepstar_core::{Grid, Point};

/// Sentinel distance for cells the breadth-first search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Unweighted 4-directional step distances from `from` to every cell.
///
/// Walls and unreachable cells are [`UNREACHABLE`]. An out-of-bounds source
/// yields an all-unreachable map. This is the exact shortest-path length on
/// the grid, and serves as ground truth for the A* results.
pub fn bfs_distances(grid: &Grid, from: Point) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.index(from) else {
        return dist;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci];
        let cp = grid.point(ci);
        for np in grid.neighbors4(cp) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    dist
}
