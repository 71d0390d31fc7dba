//! Depth-first search.

use pathviz_core::{CellState, Grid, Pacing};

use crate::node::Node;
use crate::stack::Stack;
use crate::trace;

/// Depth-first search from `start` to `end`.
///
/// Expands the most recently discovered cell first, so the animation dives
/// along corridors. No cost tracking: the result is a path, not a shortest
/// path. Returns the start→end cell indices, or `None` when the frontier
/// exhausts without reaching `end` (a defined outcome, not an error).
///
/// Preconditions (not validated): `start` and `end` are in bounds, distinct,
/// and not walls.
pub fn dfs(grid: &Grid, start: usize, end: usize, pacing: Pacing) -> Option<Vec<usize>> {
    let mut stack = Stack::with_capacity(grid.len());
    let mut visited = vec![Node::root(0); grid.len()];

    let seed = Node::root(start);
    let pushed = stack.push(seed);
    debug_assert!(pushed);
    visited[start] = seed;
    grid.set_state(start, CellState::Frontier);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(current) = stack.pop() {
        nbuf.clear();
        grid.neighbors(current.index, &mut nbuf);

        let mut solved = false;
        for &ni in &nbuf {
            let state = grid.state(ni);
            // Frontier marking doubles as the visited check.
            if state == CellState::Wall || state == CellState::Frontier {
                continue;
            }
            pacing.pause();
            grid.set_state(ni, CellState::Frontier);
            let neighbor = Node::new(ni, current.index, 0);
            visited[ni] = neighbor;
            let pushed = stack.push(neighbor);
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
