//! Plain-text rendering for terminals and logs.

use std::collections::HashSet;

use crate::core::{CellKind, GridCoord};
use crate::pathfinding::PathResult;
use crate::scenario::Scenario;

/// Render a scenario and its planning result as a character grid.
///
/// `S` and `G` mark the endpoints, `*` marks intermediate path cells,
/// and the remaining cells use their map glyphs (`.` free, `#` wall).
/// Rows are separated by newlines, row 0 first.
pub fn render_ascii(scenario: &Scenario, result: &PathResult) -> String {
    let path_cells: HashSet<GridCoord> = result.path.iter().copied().collect();

    let mut out = String::with_capacity((scenario.grid.cols() + 1) * scenario.grid.rows());
    for row in 0..scenario.grid.rows() as i32 {
        for col in 0..scenario.grid.cols() as i32 {
            let coord = GridCoord::new(row, col);
            let glyph = if coord == scenario.start {
                'S'
            } else if coord == scenario.goal {
                'G'
            } else if path_cells.contains(&coord) {
                '*'
            } else {
                scenario
                    .grid
                    .kind_at(coord)
                    .map(CellKind::as_char)
                    .unwrap_or('#')
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
