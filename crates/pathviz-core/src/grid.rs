//! The [`Grid`] type — a 2D grid of [`Cell`]s over shared storage.
//!
//! A `Grid` is a *handle* onto a shared backing buffer. Cloning a `Grid`
//! yields another view of the **same** storage, so a worker thread can paint
//! cells while the presentation thread keeps reading them. Cell accesses are
//! `Relaxed` atomic loads and stores: cross-thread *ordering* is provided
//! only by the run's completion signal, and callers must not edit cells or
//! start a second run while a worker is active.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::cell::{Cell, CellState};
use crate::geom::{self, Point};

/// The maximum number of cells a grid may hold. Every per-run table and
/// frontier container is bounded by this same limit, so a grid that passes
/// [`Grid::new`] can never overflow one of them.
pub const MAX_CELLS: usize = 2500;

struct GridBuffer {
    cells: Box<[AtomicU8]>,
    cols: usize,
    rows: usize,
}

/// A 2D grid of [`Cell`]s backed by shared storage.
///
/// Cloning produces another handle onto the same buffer.
#[derive(Clone)]
pub struct Grid {
    buf: Arc<GridBuffer>,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with empty cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or if `cols * rows` exceeds
    /// [`MAX_CELLS`].
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols >= 1 && rows >= 1, "grid dimensions must be at least 1x1");
        assert!(
            cols * rows <= MAX_CELLS,
            "grid of {}x{} exceeds the {MAX_CELLS}-cell capacity",
            cols,
            rows,
        );
        let cells = (0..cols * rows)
            .map(|_| AtomicU8::new(Cell::empty().pack()))
            .collect();
        Self {
            buf: Arc::new(GridBuffer { cells, cols, rows }),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.buf.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.buf.rows
    }

    /// Total cell count (`cols * rows`).
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.cells.len()
    }

    /// Whether the grid has no cells. Never true: [`Grid::new`] rejects
    /// empty dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.buf.cols && (p.y as usize) < self.buf.rows
    }

    /// Convert a point to a cell index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| geom::to_index(p, self.buf.cols))
    }

    /// Convert a cell index back to a point.
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        geom::to_point(index, self.buf.cols)
    }

    /// Read the cell at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        Cell::unpack(self.buf.cells[index].load(Ordering::Relaxed))
    }

    /// Overwrite the cell at `index`.
    #[inline]
    pub fn set(&self, index: usize, cell: Cell) {
        self.buf.cells[index].store(cell.pack(), Ordering::Relaxed);
    }

    /// Read just the traversability state at `index`.
    #[inline]
    pub fn state(&self, index: usize) -> CellState {
        self.get(index).state
    }

    /// Repaint the state at `index`, preserving the weight flag.
    #[inline]
    pub fn set_state(&self, index: usize, state: CellState) {
        self.set(index, self.get(index).with_state(state));
    }

    /// Set or clear the weight flag at `index`, preserving the state.
    #[inline]
    pub fn set_weighted(&self, index: usize, weighted: bool) {
        self.set(index, self.get(index).with_weight(weighted));
    }

    /// Fill every cell with `cell`.
    pub fn fill(&self, cell: Cell) {
        let bits = cell.pack();
        for slot in self.buf.cells.iter() {
            slot.store(bits, Ordering::Relaxed);
        }
    }

    /// Append the in-bounds 4-neighbors of `index` to `buf`, in up, left,
    /// down, right order. See [`geom::neighbors`].
    #[inline]
    pub fn neighbors(&self, index: usize, buf: &mut Vec<usize>) {
        geom::neighbors(index, self.buf.cols, self.buf.rows, buf);
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("cols", &self.buf.cols)
            .field("rows", &self.buf.rows)
            .finish()
    }
}
