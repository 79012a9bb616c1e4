//! Scenario file format.
//!
//! Scenarios are described in YAML: grid dimensions, wall regions, and
//! the start/goal pair. Wall regions come in three shapes and are
//! painted onto the grid in file order.

use serde::Deserialize;

use crate::core::GridCoord;

/// On-disk scenario description
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Human-readable scenario name
    pub name: String,
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Wall regions, painted in order
    #[serde(default)]
    pub walls: Vec<WallRegion>,
    /// Start cell
    pub start: GridCoord,
    /// Goal cell
    pub goal: GridCoord,
}

/// A blocked region of the grid.
///
/// Variants are distinguished by their fields, so YAML stays terse:
///
/// ```yaml
/// walls:
///   - { row: 2, col: 3 }                    # single cell
///   - { row: 5, col_from: 2, col_to: 7 }    # horizontal run
///   - { col: 4, row_from: 0, row_to: 8 }    # vertical run
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WallRegion {
    /// A single blocked cell
    Cell { row: i32, col: i32 },
    /// A horizontal run of blocked cells (inclusive bounds)
    RowSpan { row: i32, col_from: i32, col_to: i32 },
    /// A vertical run of blocked cells (inclusive bounds)
    ColSpan { col: i32, row_from: i32, row_to: i32 },
}
