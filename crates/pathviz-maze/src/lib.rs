//! Maze generation algorithms for pathviz grids.
//!
//! Three carving strategies with distinct connectivity characters:
//!
//! - **Randomized Prim's** ([`prim`]) — frontier-list growth; perfect maze.
//! - **Randomized DFS backtracker** ([`backtracker`]) — long winding
//!   corridors; perfect maze.
//! - **Sidewinder** ([`sidewinder`]) — fully-carved passage rows with one
//!   north opening per run; biased by construction, and intentionally so.
//!
//! Every generator resets the grid to walls, then carves `Empty` passage
//! cells, pausing for one pacing interval before each visible carve.

mod backtracker;
mod prim;
mod sidewinder;

pub use backtracker::backtracker;
pub use prim::prim;
pub use sidewinder::sidewinder;

#[cfg(test)]
pub(crate) mod testutil;

use pathviz_core::{Grid, Pacing};
use rand::Rng;

/// Which carving strategy to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    Prim,
    Backtracker,
    Sidewinder,
}

/// Carve a maze into `grid` with the strategy selected by `kind`.
pub fn generate(kind: MazeKind, grid: &Grid, rng: &mut impl Rng, pacing: Pacing) {
    match kind {
        MazeKind::Prim => prim(grid, rng, pacing),
        MazeKind::Backtracker => backtracker(grid, rng, pacing),
        MazeKind::Sidewinder => sidewinder(grid, rng, pacing),
    }
}
