//! Randomized Prim's maze generation.

use pathviz_core::{Cell, CellState, Grid, Pacing};
use pathviz_search::{Node, Stack};
use rand::{Rng, RngExt};

/// Carve a maze by randomized Prim's algorithm.
///
/// Fills the grid with walls, carves a random start cell, then repeatedly
/// picks a uniformly random wall candidate from the frontier list. A
/// candidate is carved only if at most one of its neighbors is already a
/// passage (carving one with two would merge passages and close a cycle),
/// and its uncarved neighbors then join the list. Processed candidates are
/// always removed, carved or not. The result is a perfect maze: every carved
/// cell reachable by exactly one path.
pub fn prim(grid: &Grid, rng: &mut impl Rng, pacing: Pacing) {
    grid.fill(Cell::wall());

    // A cell joins the list at most once per carved neighbor, so four slots
    // per cell bound the candidate stack.
    let mut candidates = Stack::with_capacity(grid.len() * 4);
    let mut nbuf = Vec::with_capacity(4);

    let start = rng.random_range(0..grid.len());
    grid.set_state(start, CellState::Empty);
    grid.neighbors(start, &mut nbuf);
    for &ni in &nbuf {
        candidates.push(Node::root(ni));
    }

    while !candidates.is_empty() {
        let slot = rng.random_range(0..candidates.len());
        let index = candidates.get(slot).index;

        nbuf.clear();
        grid.neighbors(index, &mut nbuf);
        let carved = nbuf.iter().filter(|&&n| grid.get(n).is_carved()).count();

        if carved <= 1 {
            pacing.pause();
            grid.set_state(index, CellState::Empty);
            for &ni in &nbuf {
                if !grid.get(ni).is_carved() {
                    candidates.push(Node::root(ni));
                }
            }
        }

        candidates.remove_at(slot);
    }
}
