//! Binary PGM (P5) export.
//!
//! Writes the grid and planned path as a grayscale image, one pixel
//! per cell, row 0 at the top. The format is viewable with standard
//! image tools and trivially parseable in tests.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::core::GridCoord;
use crate::pathfinding::PathResult;
use crate::scenario::Scenario;

/// Pixel value for free cells
const PIXEL_FREE: u8 = 255;
/// Pixel value for wall cells
const PIXEL_WALL: u8 = 0;
/// Pixel value for intermediate path cells
const PIXEL_PATH: u8 = 128;
/// Pixel value for the start and goal cells
const PIXEL_ENDPOINT: u8 = 64;

/// Build the pixel buffer, row 0 first
fn build_pixels(scenario: &Scenario, result: &PathResult) -> Vec<u8> {
    let path_cells: HashSet<GridCoord> = result.path.iter().copied().collect();

    let mut pixels = Vec::with_capacity(scenario.grid.cell_count());
    for (coord, kind) in scenario.grid.iter() {
        let value = if coord == scenario.start || coord == scenario.goal {
            PIXEL_ENDPOINT
        } else if path_cells.contains(&coord) {
            PIXEL_PATH
        } else if kind.is_walkable() {
            PIXEL_FREE
        } else {
            PIXEL_WALL
        };
        pixels.push(value);
    }
    pixels
}

/// Write a scenario and its planning result as binary PGM (P5)
pub fn save_pgm(scenario: &Scenario, result: &PathResult, path: &Path) -> std::io::Result<()> {
    let pixels = build_pixels(scenario, result);

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "P5")?;
    writeln!(file, "{} {}", scenario.grid.cols(), scenario.grid.rows())?;
    writeln!(file, "255")?;
    file.write_all(&pixels)
}
