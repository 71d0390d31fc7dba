//! Grid search algorithms over bounded frontier containers.
//!
//! This crate provides the four traversal strategies of the visualizer:
//!
//! - **DFS** ([`dfs`]) — stack order, no cost tracking.
//! - **BFS** ([`bfs`]) — queue order, hop-count optimal.
//! - **Dijkstra** ([`dijkstra`]) — min-heap by cumulative cost, weight-aware.
//! - **A\*** ([`astar`]) — Dijkstra plus an admissible Manhattan heuristic.
//!
//! Each run paints `Frontier` cells as it discovers them and, on success,
//! paints the reconstructed `Path` from the goal back to the start, pausing
//! for one pacing interval before every visible mutation. All four share the
//! same bounded containers ([`MinHeap`], [`Stack`], [`Queue`]), whose
//! capacity is the grid's cell count.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod heap;
mod node;
mod queue;
mod stack;
mod trace;

#[cfg(test)]
pub(crate) mod testutil;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use heap::MinHeap;
pub use node::{NO_PARENT, Node, UNREACHABLE};
pub use queue::Queue;
pub use stack::Stack;

use pathviz_core::{Grid, Pacing};

/// Which search strategy to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

/// Run the search strategy selected by `kind`. See the individual algorithm
/// functions for the shared contract and preconditions.
pub fn search(
    kind: SearchKind,
    grid: &Grid,
    start: usize,
    end: usize,
    pacing: Pacing,
) -> Option<Vec<usize>> {
    match kind {
        SearchKind::Dfs => dfs(grid, start, end, pacing),
        SearchKind::Bfs => bfs(grid, start, end, pacing),
        SearchKind::Dijkstra => dijkstra(grid, start, end, pacing),
        SearchKind::AStar => astar(grid, start, end, pacing),
    }
}
