//! The per-run [`Node`] record shared by every frontier container.

/// Sentinel parent for a root node.
pub const NO_PARENT: usize = usize::MAX;

/// Sentinel distance for a cell not yet reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// A discovered cell: its index, the index of the cell it was discovered
/// from, and its best-known distance. Nodes are ephemeral: they live in a
/// run's visited table and frontier container and are discarded when the
/// run completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub index: usize,
    pub parent: usize,
    pub distance: i32,
}

impl Node {
    /// Create a node.
    #[inline]
    pub const fn new(index: usize, parent: usize, distance: i32) -> Self {
        Self {
            index,
            parent,
            distance,
        }
    }

    /// A parentless node at distance 0: a run's seed, or a maze candidate
    /// that carries no cost.
    #[inline]
    pub const fn root(index: usize) -> Self {
        Self::new(index, NO_PARENT, 0)
    }

    /// An unvisited placeholder for the visited table.
    #[inline]
    pub const fn unvisited(index: usize) -> Self {
        Self::new(index, NO_PARENT, UNREACHABLE)
    }
}
