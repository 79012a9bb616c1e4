//! Cell kinds for the walkability grid.

use serde::{Deserialize, Serialize};

/// Walkability state of a single grid cell.
///
/// The grid is binary: a cell is either open to travel or it is not.
/// Every cell starts as `Free`; setup paints `Wall` cells before any
/// search runs, and no cell changes kind afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    /// Open cell the planner may enter
    #[default]
    Free = 0,

    /// Blocked cell the planner never enters
    Wall = 1,
}

impl CellKind {
    /// Can a path pass through this cell?
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, CellKind::Free)
    }

    /// Convert from u8 (for raw grid storage).
    /// Unrecognized values are treated as blocked.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CellKind::Free,
            _ => CellKind::Wall,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Wall => '#',
        }
    }
}
