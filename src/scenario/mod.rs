//! Planning scenarios: a grid plus a start/goal pair.
//!
//! A [`Scenario`] bundles everything one planning run needs. It can be
//! loaded from a YAML file, built from an in-memory [`ScenarioConfig`],
//! or produced by [`Scenario::demo`] for quick experiments.

mod config;

pub use config::{ScenarioConfig, WallRegion};

use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::core::{CellKind, GridCoord};
use crate::grid::GridMap;

/// Errors raised while loading or validating a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{role} at ({}, {}) is outside the {rows}x{cols} grid", .coord.row, .coord.col)]
    InvalidCoordinate {
        role: &'static str,
        coord: GridCoord,
        rows: usize,
        cols: usize,
    },

    #[error("{role} is reversed: {from} > {to}")]
    ReversedSpan {
        role: &'static str,
        from: i32,
        to: i32,
    },
}

/// A fully validated planning scenario.
///
/// The grid is built once from the wall regions and is not mutated
/// afterwards; planners borrow it read-only.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name, used in logs and rendered output
    pub name: String,
    /// Walkability grid with all wall regions painted
    pub grid: GridMap,
    /// Start cell, guaranteed in bounds
    pub start: GridCoord,
    /// Goal cell, guaranteed in bounds
    pub goal: GridCoord,
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a scenario from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        Self::from_config(config)
    }

    /// Build and validate a scenario from its config.
    ///
    /// Wall regions are painted in file order. Region endpoints and the
    /// start/goal pair must lie inside the grid, and spans must list
    /// their low end first. A start or goal placed on a wall is accepted
    /// here; the planner reports it as a failed search rather than a
    /// broken scenario.
    pub fn from_config(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(ScenarioError::EmptyGrid {
                rows: config.rows,
                cols: config.cols,
            });
        }

        let mut grid = GridMap::new(config.rows, config.cols);

        for region in &config.walls {
            match *region {
                WallRegion::Cell { row, col } => {
                    let coord = GridCoord::new(row, col);
                    check_in_bounds("Wall cell", coord, &grid)?;
                    grid.set_kind(coord, CellKind::Wall);
                }
                WallRegion::RowSpan { row, col_from, col_to } => {
                    check_span_order("Wall row span", col_from, col_to)?;
                    check_in_bounds("Wall span end", GridCoord::new(row, col_from), &grid)?;
                    check_in_bounds("Wall span end", GridCoord::new(row, col_to), &grid)?;
                    grid.fill_row_span(row, col_from, col_to, CellKind::Wall);
                }
                WallRegion::ColSpan { col, row_from, row_to } => {
                    check_span_order("Wall column span", row_from, row_to)?;
                    check_in_bounds("Wall span end", GridCoord::new(row_from, col), &grid)?;
                    check_in_bounds("Wall span end", GridCoord::new(row_to, col), &grid)?;
                    grid.fill_col_span(col, row_from, row_to, CellKind::Wall);
                }
            }
        }

        check_in_bounds("Start", config.start, &grid)?;
        check_in_bounds("Goal", config.goal, &grid)?;

        let counts = grid.cell_counts();
        debug!(
            "[Scenario] Loaded '{}': {}x{} grid, {} wall cells, start=({},{}) goal=({},{})",
            config.name,
            config.rows,
            config.cols,
            counts.wall,
            config.start.row,
            config.start.col,
            config.goal.row,
            config.goal.col
        );

        Ok(Self {
            name: config.name,
            grid,
            start: config.start,
            goal: config.goal,
        })
    }

    /// Built-in demo: a 10x10 grid with a horizontal wall across row 5
    /// (columns 2 through 7), start at the top-left corner, goal at the
    /// bottom-right corner.
    pub fn demo() -> Self {
        let mut grid = GridMap::new(10, 10);
        grid.fill_row_span(5, 2, 7, CellKind::Wall);

        Self {
            name: "corner_to_corner".to_string(),
            grid,
            start: GridCoord::new(0, 0),
            goal: GridCoord::new(9, 9),
        }
    }
}

fn check_in_bounds(
    role: &'static str,
    coord: GridCoord,
    grid: &GridMap,
) -> Result<(), ScenarioError> {
    if grid.is_valid_coord(coord) {
        Ok(())
    } else {
        Err(ScenarioError::InvalidCoordinate {
            role,
            coord,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }
}

// A reversed span passes both endpoint bounds checks yet paints nothing
fn check_span_order(role: &'static str, from: i32, to: i32) -> Result<(), ScenarioError> {
    if from <= to {
        Ok(())
    } else {
        Err(ScenarioError::ReversedSpan { role, from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_valid() {
        let yaml = r#"
name: small
rows: 6
cols: 8
walls:
  - { row: 2, col_from: 1, col_to: 4 }
  - { row: 4, col: 6 }
start: { row: 0, col: 0 }
goal: { row: 5, col: 7 }
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();

        assert_eq!(scenario.name, "small");
        assert_eq!(scenario.grid.rows(), 6);
        assert_eq!(scenario.grid.cols(), 8);
        assert!(!scenario.grid.is_walkable(GridCoord::new(2, 3)));
        assert!(!scenario.grid.is_walkable(GridCoord::new(4, 6)));
        assert!(scenario.grid.is_walkable(GridCoord::new(0, 0)));
        assert_eq!(scenario.grid.cell_counts().wall, 5);
    }

    #[test]
    fn test_start_out_of_bounds_rejected() {
        let yaml = r#"
name: bad_start
rows: 5
cols: 5
start: { row: 7, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let err = Scenario::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidCoordinate { role: "Start", .. }
        ));
        assert!(err.to_string().contains("(7, 0)"));
    }

    #[test]
    fn test_wall_out_of_bounds_rejected() {
        let yaml = r#"
name: bad_wall
rows: 5
cols: 5
walls:
  - { row: 2, col_from: 0, col_to: 9 }
start: { row: 0, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let err = Scenario::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_reversed_row_span_rejected() {
        let yaml = r#"
name: backwards
rows: 5
cols: 5
walls:
  - { row: 2, col_from: 4, col_to: 1 }
start: { row: 0, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let err = Scenario::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::ReversedSpan { role: "Wall row span", from: 4, to: 1 }
        ));
        assert!(err.to_string().contains("4 > 1"));
    }

    #[test]
    fn test_reversed_col_span_rejected() {
        let yaml = r#"
name: backwards_col
rows: 5
cols: 5
walls:
  - { col: 2, row_from: 3, row_to: 0 }
start: { row: 0, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let err = Scenario::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::ReversedSpan { role: "Wall column span", from: 3, to: 0 }
        ));
    }

    #[test]
    fn test_single_cell_span_accepted() {
        // from == to is a one-cell span, not a reversal
        let yaml = r#"
name: one_cell_span
rows: 5
cols: 5
walls:
  - { row: 2, col_from: 3, col_to: 3 }
start: { row: 0, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert!(!scenario.grid.is_walkable(GridCoord::new(2, 3)));
        assert_eq!(scenario.grid.cell_counts().wall, 1);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let yaml = r#"
name: degenerate
rows: 0
cols: 5
start: { row: 0, col: 0 }
goal: { row: 0, col: 0 }
"#;
        let err = Scenario::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ScenarioError::EmptyGrid { rows: 0, cols: 5 }));
    }

    #[test]
    fn test_blocked_start_accepted_at_load() {
        // A start on a wall is a planner outcome, not a config error
        let yaml = r#"
name: walled_in
rows: 5
cols: 5
walls:
  - { row: 0, col: 0 }
start: { row: 0, col: 0 }
goal: { row: 4, col: 4 }
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert!(!scenario.grid.is_walkable(scenario.start));
    }

    #[test]
    fn test_demo_layout() {
        let scenario = Scenario::demo();

        assert_eq!(scenario.grid.rows(), 10);
        assert_eq!(scenario.grid.cols(), 10);
        assert_eq!(scenario.start, GridCoord::new(0, 0));
        assert_eq!(scenario.goal, GridCoord::new(9, 9));

        // Wall spans row 5, columns 2..=7; the row ends stay open
        for col in 2..=7 {
            assert!(!scenario.grid.is_walkable(GridCoord::new(5, col)));
        }
        assert!(scenario.grid.is_walkable(GridCoord::new(5, 0)));
        assert!(scenario.grid.is_walkable(GridCoord::new(5, 1)));
        assert!(scenario.grid.is_walkable(GridCoord::new(5, 8)));
        assert!(scenario.grid.is_walkable(GridCoord::new(5, 9)));
        assert_eq!(scenario.grid.cell_counts().wall, 6);
    }
}
