//! **pathviz-core** — Grid search & maze visualizer engine (core types).
//!
//! This crate provides the foundational types used across the *pathviz*
//! ecosystem: geometry helpers, traversability cells, the shared grid that a
//! worker thread mutates while another thread reads, and the pacing delay
//! that turns those mutations into an animation.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod pacing;

pub use cell::{Cell, CellState};
pub use geom::{Point, manhattan, neighbors, to_index, to_point};
pub use grid::{Grid, MAX_CELLS};
pub use pacing::Pacing;
