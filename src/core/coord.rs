//! Coordinate type for the walkability grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
///
/// Rows grow downward and columns grow to the right, so (0, 0) is the
/// top-left cell. Components are signed so neighbor arithmetic at the
/// grid edge stays straightforward; bounds checking is the grid's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (0 at the top)
    pub row: i32,
    /// Column index (0 at the left)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Get the 4 cardinal neighbors
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.row - 1, self.col), // Up
            GridCoord::new(self.row, self.col + 1), // Right
            GridCoord::new(self.row + 1, self.col), // Down
            GridCoord::new(self.row, self.col - 1), // Left
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_4() {
        let c = GridCoord::new(5, 5);
        let n4 = c.neighbors_4();
        assert_eq!(n4[0], GridCoord::new(4, 5)); // Up
        assert_eq!(n4[1], GridCoord::new(5, 6)); // Right
        assert_eq!(n4[2], GridCoord::new(6, 5)); // Down
        assert_eq!(n4[3], GridCoord::new(5, 4)); // Left
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(9, 9);
        assert_eq!(a.manhattan_distance(&b), 18);
        assert_eq!(b.manhattan_distance(&a), 18);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = GridCoord::new(2, 3);
        let b = GridCoord::new(1, 1);
        assert_eq!(a + b, GridCoord::new(3, 4));
        assert_eq!(a - b, GridCoord::new(1, 2));
    }
}
