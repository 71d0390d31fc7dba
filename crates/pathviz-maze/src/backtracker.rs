//! Randomized depth-first (backtracker) maze generation.

use pathviz_core::{Cell, CellState, Grid, Pacing};
use pathviz_search::{Node, Stack};
use rand::{Rng, RngExt};

/// Carve a maze by randomized depth-first search with backtracking.
///
/// Fills the grid with walls, carves a random start cell and pushes it.
/// From the top of the stack, the candidate neighbors are the uncarved
/// cells that touch at most one passage (the current cell itself; a second
/// one would close a cycle). If any exist, a uniformly random candidate is
/// carved and pushed; otherwise the top stays popped, which is the
/// backtrack. The result is a perfect maze with long winding corridors.
pub fn backtracker(grid: &Grid, rng: &mut impl Rng, pacing: Pacing) {
    grid.fill(Cell::wall());

    let mut stack = Stack::with_capacity(grid.len());
    let mut nbuf = Vec::with_capacity(4);
    let mut nnbuf = Vec::with_capacity(4);
    let mut candidates = Vec::with_capacity(4);

    let start = rng.random_range(0..grid.len());
    grid.set_state(start, CellState::Empty);
    stack.push(Node::root(start));

    while let Some(current) = stack.pop() {
        nbuf.clear();
        grid.neighbors(current.index, &mut nbuf);

        candidates.clear();
        for &ni in &nbuf {
            if grid.get(ni).is_carved() {
                continue;
            }
            nnbuf.clear();
            grid.neighbors(ni, &mut nnbuf);
            let carved = nnbuf.iter().filter(|&&n| grid.get(n).is_carved()).count();
            if carved <= 1 {
                candidates.push(ni);
            }
        }

        if !candidates.is_empty() {
            stack.push(current);
            let next = candidates[rng.random_range(0..candidates.len())];
            pacing.pause();
            grid.set_state(next, CellState::Empty);
            stack.push(Node::root(next));
        }
    }
}
