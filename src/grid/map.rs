//! Fixed-size walkability grid.

use crate::core::{CellKind, GridCoord};

/// Rectangular grid of walkable and blocked cells.
///
/// Cells are stored row-major as raw `CellKind` bytes. Dimensions are
/// fixed at construction; the setup mutators paint walls before a
/// search borrows the grid, and the borrow keeps it immutable while
/// the search runs.
///
/// Out-of-bounds lookups answer "not walkable" rather than erroring,
/// so callers can query neighbors at the edge without pre-checking.
#[derive(Clone, Debug)]
pub struct GridMap {
    /// Cell kinds (CellKind as u8: Free=0, Wall=1)
    kinds: Vec<u8>,
    /// Grid height in cells
    rows: usize,
    /// Grid width in cells
    cols: usize,
}

impl GridMap {
    /// Create a grid with every cell walkable
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            kinds: vec![CellKind::Free as u8; rows * cols],
            rows,
            cols,
        }
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.row as usize * self.cols + coord.col as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Get cell kind at grid coordinates (None if out of bounds)
    #[inline]
    pub fn kind_at(&self, coord: GridCoord) -> Option<CellKind> {
        self.coord_to_index(coord)
            .map(|i| CellKind::from_u8(self.kinds[i]))
    }

    /// Can a path pass through this cell? Out of bounds is not walkable.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| CellKind::from_u8(self.kinds[i]).is_walkable())
            .unwrap_or(false)
    }

    /// Set cell kind at grid coordinates.
    /// Returns false if the coordinate is out of bounds.
    #[inline]
    pub fn set_kind(&mut self, coord: GridCoord, kind: CellKind) -> bool {
        if let Some(i) = self.coord_to_index(coord) {
            self.kinds[i] = kind as u8;
            true
        } else {
            false
        }
    }

    /// Paint a horizontal run of cells on one row, both columns inclusive.
    /// Returns the number of cells painted; out-of-bounds cells are skipped.
    pub fn fill_row_span(&mut self, row: i32, col_from: i32, col_to: i32, kind: CellKind) -> usize {
        let mut painted = 0;
        for col in col_from..=col_to {
            if self.set_kind(GridCoord::new(row, col), kind) {
                painted += 1;
            }
        }
        painted
    }

    /// Paint a vertical run of cells on one column, both rows inclusive.
    /// Returns the number of cells painted; out-of-bounds cells are skipped.
    pub fn fill_col_span(&mut self, col: i32, row_from: i32, row_to: i32, kind: CellKind) -> usize {
        let mut painted = 0;
        for row in row_from..=row_to {
            if self.set_kind(GridCoord::new(row, col), kind) {
                painted += 1;
            }
        }
        painted
    }

    /// Iterate over all cells with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellKind)> + '_ {
        (0..self.kinds.len()).map(move |i| (self.index_to_coord(i), CellKind::from_u8(self.kinds[i])))
    }

    /// Count cells by kind
    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &kind in &self.kinds {
            match kind {
                0 => counts.free += 1,
                _ => counts.wall += 1,
            }
        }
        counts
    }
}

/// Cell counts by kind
#[derive(Clone, Copy, Debug, Default)]
pub struct CellCounts {
    /// Walkable cells
    pub free: usize,
    /// Blocked cells
    pub wall: usize,
}

impl CellCounts {
    /// Total cells
    pub fn total(&self) -> usize {
        self.free + self.wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = GridMap::new(10, 10);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.cell_count(), 100);
        // Everything starts walkable
        assert_eq!(grid.cell_counts().free, 100);
    }

    #[test]
    fn test_get_set_cell() {
        let mut grid = GridMap::new(10, 10);

        assert_eq!(grid.kind_at(GridCoord::new(5, 5)), Some(CellKind::Free));
        assert!(grid.is_walkable(GridCoord::new(5, 5)));

        assert!(grid.set_kind(GridCoord::new(5, 5), CellKind::Wall));
        assert_eq!(grid.kind_at(GridCoord::new(5, 5)), Some(CellKind::Wall));
        assert!(!grid.is_walkable(GridCoord::new(5, 5)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = GridMap::new(10, 10);

        assert_eq!(grid.kind_at(GridCoord::new(10, 0)), None);
        assert_eq!(grid.kind_at(GridCoord::new(0, -1)), None);
        assert!(!grid.is_walkable(GridCoord::new(-1, 0)));
        assert!(!grid.is_walkable(GridCoord::new(0, 10)));
        assert!(!grid.set_kind(GridCoord::new(10, 10), CellKind::Wall));
        assert!(!grid.is_valid_coord(GridCoord::new(-1, -1)));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = GridMap::new(4, 7);
        let coord = GridCoord::new(2, 5);
        let index = grid.coord_to_index(coord).unwrap();
        assert_eq!(index, 2 * 7 + 5);
        assert_eq!(grid.index_to_coord(index), coord);
    }

    #[test]
    fn test_fill_row_span() {
        let mut grid = GridMap::new(10, 10);
        let painted = grid.fill_row_span(5, 2, 7, CellKind::Wall);
        assert_eq!(painted, 6);

        for col in 2..=7 {
            assert!(!grid.is_walkable(GridCoord::new(5, col)));
        }
        assert!(grid.is_walkable(GridCoord::new(5, 1)));
        assert!(grid.is_walkable(GridCoord::new(5, 8)));
        assert_eq!(grid.cell_counts().wall, 6);
    }

    #[test]
    fn test_fill_col_span() {
        let mut grid = GridMap::new(10, 10);
        let painted = grid.fill_col_span(3, 0, 9, CellKind::Wall);
        assert_eq!(painted, 10);

        for row in 0..=9 {
            assert!(!grid.is_walkable(GridCoord::new(row, 3)));
        }
        assert!(grid.is_walkable(GridCoord::new(0, 2)));
    }

    #[test]
    fn test_fill_span_clips_to_bounds() {
        let mut grid = GridMap::new(5, 5);
        // Range reaches past the right edge; only in-bounds cells count
        let painted = grid.fill_row_span(0, 3, 8, CellKind::Wall);
        assert_eq!(painted, 2);
        assert_eq!(grid.cell_counts().wall, 2);
    }

    #[test]
    fn test_iter() {
        let mut grid = GridMap::new(3, 3);
        grid.set_kind(GridCoord::new(1, 2), CellKind::Wall);

        let mut walls = Vec::new();
        for (coord, kind) in grid.iter() {
            if kind == CellKind::Wall {
                walls.push(coord);
            }
        }
        assert_eq!(walls, vec![GridCoord::new(1, 2)]);
    }
}
