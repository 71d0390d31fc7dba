//! Dijkstra's algorithm.

use pathviz_core::{CellState, Grid, Pacing};

use crate::heap::MinHeap;
use crate::node::{NO_PARENT, Node};
use crate::trace;

/// Dijkstra's algorithm from `start` to `end`.
///
/// Expands by cumulative cost: 1 per step, 10 into a weighted cell. An
/// improving relaxation updates the visited table and either lowers the
/// neighbor's heap priority (if already queued) or inserts it and paints it
/// `Frontier`. Shortest-path under these non-negative costs. Returns the
/// start→end cell indices, or `None` when the frontier exhausts without
/// reaching `end`.
///
/// Preconditions (not validated): `start` and `end` are in bounds, distinct,
/// and not walls.
pub fn dijkstra(grid: &Grid, start: usize, end: usize, pacing: Pacing) -> Option<Vec<usize>> {
    let mut heap = MinHeap::with_capacity(grid.len());
    let mut visited: Vec<Node> = (0..grid.len()).map(Node::unvisited).collect();

    let seed = Node::new(start, NO_PARENT, 0);
    heap.insert(seed);
    visited[start] = seed;
    pacing.pause();
    grid.set_state(start, CellState::Frontier);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(current) = heap.extract_min() {
        nbuf.clear();
        grid.neighbors(current.index, &mut nbuf);

        let mut solved = false;
        for &ni in &nbuf {
            let cell = grid.get(ni);
            if cell.is_wall() {
                continue;
            }
            let next = current.distance + trace::step_cost(cell);
            if next < visited[ni].distance {
                let neighbor = Node::new(ni, current.index, next);
                visited[ni] = neighbor;
                if heap.find(ni) {
                    heap.decrease_priority(ni, next);
                } else {
                    heap.insert(neighbor);
                    pacing.pause();
                    grid.set_state(ni, CellState::Frontier);
                }
                if ni == end {
                    solved = true;
                    break;
                }
            }
        }

        if solved {
            return Some(trace::paint_path(grid, &visited, end, pacing));
        }
    }
    None
}
