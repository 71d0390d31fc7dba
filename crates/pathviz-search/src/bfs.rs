//! Breadth-first search.

use pathviz_core::{CellState, Grid, Pacing};

use crate::node::Node;
use crate::queue::Queue;
use crate::trace;

/// Breadth-first search from `start` to `end`.
///
/// Expands cells in discovery order, so on an unweighted grid the returned
/// path has the minimum hop count. Returns the start→end cell indices, or
/// `None` when the frontier exhausts without reaching `end`.
///
/// Preconditions (not validated): `start` and `end` are in bounds, distinct,
/// and not walls.
pub fn bfs(grid: &Grid, start: usize, end: usize, pacing: Pacing) -> Option<Vec<usize>> {
    let mut queue = Queue::with_capacity(grid.len());
    let mut visited = vec![Node::root(0); grid.len()];

    let seed = Node::root(start);
    let pushed = queue.push(seed);
    debug_assert!(pushed);
    visited[start] = seed;
    grid.set_state(start, CellState::Frontier);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(current) = queue.pop() {
        nbuf.clear();
        grid.neighbors(current.index, &mut nbuf);

        let mut solved = false;
        for &ni in &nbuf {
            let state = grid.state(ni);
            // Frontier marking doubles as the visited check; each cell is
            // enqueued at most once, which also bounds the queue's
            // monotonic cursors.
            if state == CellState::Wall || state == CellState::Frontier {
                continue;
            }
            pacing.pause();
            grid.set_state(ni, CellState::Frontier);
            let neighbor = Node::new(ni, current.index, 0);
            visited[ni] = neighbor;
            let pushed = queue.push(neighbor);
            debug_assert!(pushed);
            if ni == end {
                solved = true;
                break;
            }
        }

        if solved {
            return Some(trace::paint_path(grid, &visited, end, pacing));
        }
    }
    None
}
