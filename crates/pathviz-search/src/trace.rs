//! Shared pieces of the search loops: step costs and paced path painting.

use pathviz_core::{Cell, CellState, Grid, Pacing};

use crate::node::{NO_PARENT, Node};

/// Cost of stepping into a weighted cell under Dijkstra and A*.
pub(crate) const WEIGHTED_COST: i32 = 10;

/// Cost of stepping into `cell`.
#[inline]
pub(crate) fn step_cost(cell: Cell) -> i32 {
    if cell.weighted { WEIGHTED_COST } else { 1 }
}

/// Reconstruct the solution by following parent pointers from `end` back to
/// the root, painting each cell `Path` (goal first, one paced mutation per
/// cell). Returns the path in start→end order.
pub(crate) fn paint_path(
    grid: &Grid,
    visited: &[Node],
    end: usize,
    pacing: Pacing,
) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = visited[end];
    grid.set_state(current.index, CellState::Path);
    path.push(current.index);
    while current.parent != NO_PARENT {
        current = visited[current.parent];
        pacing.pause();
        grid.set_state(current.index, CellState::Path);
        path.push(current.index);
    }
    path.reverse();
    path
}
