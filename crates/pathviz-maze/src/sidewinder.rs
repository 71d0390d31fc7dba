//! Sidewinder maze generation.

use pathviz_core::{Cell, CellState, Grid, Pacing};
use rand::{Rng, RngExt};

/// Carve a maze by the sidewinder algorithm.
///
/// Passage rows sit at even y with wall rows between them. The first row is
/// carved whole, unpaced. Each later passage row is swept left to right:
/// every cell is carved, and a coin flip either extends the current run east
/// or closes it, carving exactly one northward connector in the wall row
/// above, over a random cell of the just-closed run. The last column always
/// closes its run, so every passage row connects to the row above.
///
/// Long east–west runs and a single north opening per run are the
/// algorithm's structural bias; the carve is fully connected but not
/// acyclic.
pub fn sidewinder(grid: &Grid, rng: &mut impl Rng, pacing: Pacing) {
    grid.fill(Cell::wall());
    let cols = grid.cols();

    for x in 0..cols {
        grid.set_state(x, CellState::Empty);
    }

    let mut y = 2;
    while y < grid.rows() {
        let mut run_start = 0;
        for x in 0..cols {
            pacing.pause();
            grid.set_state(y * cols + x, CellState::Empty);

            let close_run = x + 1 == cols || !rng.random_bool(0.5);
            if close_run {
                let opening = rng.random_range(run_start..=x);
                pacing.pause();
                grid.set_state((y - 1) * cols + opening, CellState::Empty);
                run_start = x + 1;
            }
        }
        y += 2;
    }
}
