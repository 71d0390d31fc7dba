//! The [`Cell`] type — a traversability state plus an optional weight flag.

/// What a cell currently is, from the point of view of a search or a maze
/// carve. Algorithms repaint cells through these states; the presentation
/// layer maps them to colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellState {
    /// Open, traversable ground (also a carved maze passage).
    #[default]
    Empty = 0,
    /// Impassable.
    Wall = 1,
    /// Discovered but not yet settled by the running search.
    Frontier = 2,
    /// Part of the reconstructed solution path.
    Path = 3,
    /// The search origin.
    Start = 4,
    /// The search goal.
    End = 5,
}

impl CellState {
    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Wall,
            2 => Self::Frontier,
            3 => Self::Path,
            4 => Self::Start,
            5 => Self::End,
            _ => Self::Empty,
        }
    }
}

/// A single grid cell. Weighted cells cost 10 to enter under Dijkstra and
/// A*, everything else costs 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub state: CellState,
    pub weighted: bool,
}

const WEIGHT_BIT: u8 = 0x80;

impl Cell {
    /// An open, unweighted cell.
    pub const fn empty() -> Self {
        Self {
            state: CellState::Empty,
            weighted: false,
        }
    }

    /// An unweighted wall.
    pub const fn wall() -> Self {
        Self {
            state: CellState::Wall,
            weighted: false,
        }
    }

    /// Set the state (builder).
    #[inline]
    pub const fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }

    /// Set the weight flag (builder).
    #[inline]
    pub const fn with_weight(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Whether this cell blocks traversal.
    #[inline]
    pub fn is_wall(self) -> bool {
        self.state == CellState::Wall
    }

    /// Whether this cell counts as a maze passage (anything but a wall).
    #[inline]
    pub fn is_carved(self) -> bool {
        self.state != CellState::Wall
    }

    /// Pack into a byte for atomic storage: state in the low bits, weight
    /// flag in bit 7.
    #[inline]
    pub fn pack(self) -> u8 {
        self.state as u8 | if self.weighted { WEIGHT_BIT } else { 0 }
    }

    /// Inverse of [`pack`](Cell::pack).
    #[inline]
    pub fn unpack(bits: u8) -> Self {
        Self {
            state: CellState::from_bits(bits & !WEIGHT_BIT),
            weighted: bits & WEIGHT_BIT != 0,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let cell = Cell {
            state: CellState::Frontier,
            weighted: true,
        };
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
