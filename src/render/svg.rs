//! SVG rendering of scenarios and planned paths.
//!
//! Produces a static vector image showing:
//! - The walkability grid (walls and free cells)
//! - The planned path as a line through cell centers
//! - Start and goal markers
//! - A legend and search statistics
//!
//! Output is plain SVG 1.1 text, viewable in any browser.

use crate::pathfinding::PathResult;
use crate::scenario::Scenario;
use std::fmt::Write;
use std::path::Path;

/// SVG color scheme for rendering
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Wall cell color
    pub wall: &'static str,
    /// Free cell color
    pub free: &'static str,
    /// Grid line color
    pub grid_lines: &'static str,
    /// Path line color
    pub path: &'static str,
    /// Start marker color
    pub start: &'static str,
    /// Goal marker color
    pub goal: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            wall: "#333333",
            free: "#FFFFFF",
            grid_lines: "#CCCCCC",
            path: "#2222AA",
            start: "#22AA22",
            goal: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per grid cell
    pub cell_size: f32,
    /// Path line width
    pub path_width: f32,
    /// Start/goal marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the grid in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            path_width: 4.0,
            marker_radius: 10.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG rendering builder
pub struct SvgRenderer<'a> {
    config: SvgConfig,
    /// Scenario to draw
    scenario: &'a Scenario,
    /// Planning result to overlay, if any
    result: Option<&'a PathResult>,
}

impl<'a> SvgRenderer<'a> {
    /// Create a renderer for a scenario
    pub fn new(scenario: &'a Scenario, config: SvgConfig) -> Self {
        Self {
            config,
            scenario,
            result: None,
        }
    }

    /// Overlay a planning result on the grid
    pub fn with_result(mut self, result: &'a PathResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let cell = self.config.cell_size;
        let grid_width_px = self.scenario.grid.cols() as f32 * cell;
        let grid_height_px = self.scenario.grid.rows() as f32 * cell;

        let padding = self.config.padding;
        let title_height = 30.0;

        // Legend entries: wall, start, goal, plus the path line when a
        // result is attached
        let legend_entries = if self.result.is_some() { 4 } else { 3 };
        let legend_height = (legend_entries * 20 + 25) as f32 + 10.0;

        let width = grid_width_px + 2.0 * padding;
        let height = grid_height_px + 2.0 * padding + title_height + legend_height;

        // SVG header
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        ).unwrap();

        // Background
        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )
        .unwrap();

        // Title
        writeln!(
            &mut svg,
            r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
            width / 2.0,
            escape_text(&self.scenario.name)
        ).unwrap();

        // Grid group with translation
        let grid_offset_x = padding;
        let grid_offset_y = padding + title_height;
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            grid_offset_x, grid_offset_y
        )
        .unwrap();

        self.render_grid(&mut svg);
        self.render_grid_lines(&mut svg, grid_width_px, grid_height_px);
        if let Some(result) = self.result {
            self.render_path(&mut svg, result);
        }
        self.render_markers(&mut svg);

        writeln!(&mut svg, "  </g>").unwrap();

        // Legend below the grid
        let legend_y = grid_offset_y + grid_height_px + 10.0;
        self.render_legend(&mut svg, width, legend_y);

        // SVG footer
        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    /// Render grid cells. Row 0 is drawn at the top edge.
    fn render_grid(&self, svg: &mut String) {
        let cell = self.config.cell_size;

        writeln!(svg, r#"    <g id="grid">"#).unwrap();

        // Free-cell background for the whole grid
        writeln!(
            svg,
            r#"      <rect width="{:.0}" height="{:.0}" fill="{}"/>"#,
            self.scenario.grid.cols() as f32 * cell,
            self.scenario.grid.rows() as f32 * cell,
            self.config.colors.free
        )
        .unwrap();

        for (coord, kind) in self.scenario.grid.iter() {
            if kind.is_walkable() {
                continue; // Free cells are already background
            }

            let px_x = coord.col as f32 * cell;
            let px_y = coord.row as f32 * cell;

            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px_x, px_y, cell, cell, self.config.colors.wall
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render cell boundary lines
    fn render_grid_lines(&self, svg: &mut String, width_px: f32, height_px: f32) {
        let cell = self.config.cell_size;
        let color = self.config.colors.grid_lines;

        writeln!(svg, r#"    <g id="grid-lines">"#).unwrap();

        for col in 0..=self.scenario.grid.cols() {
            let x = col as f32 * cell;
            writeln!(
                svg,
                r#"      <line x1="{:.1}" y1="0" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                x, x, height_px, color
            )
            .unwrap();
        }
        for row in 0..=self.scenario.grid.rows() {
            let y = row as f32 * cell;
            writeln!(
                svg,
                r#"      <line x1="0" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                y, width_px, y, color
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render the planned path as a line through cell centers
    fn render_path(&self, svg: &mut String, result: &PathResult) {
        if result.path.len() < 2 {
            return;
        }

        let cell = self.config.cell_size;
        writeln!(svg, r#"    <g id="path">"#).unwrap();

        let mut path_d = String::new();
        for (i, coord) in result.path.iter().enumerate() {
            let px = (coord.col as f32 + 0.5) * cell;
            let py = (coord.row as f32 + 0.5) * cell;

            if i == 0 {
                write!(&mut path_d, "M {:.1} {:.1}", px, py).unwrap();
            } else {
                write!(&mut path_d, " L {:.1} {:.1}", px, py).unwrap();
            }
        }

        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            path_d, self.config.colors.path, self.config.path_width
        ).unwrap();

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render start and goal markers
    fn render_markers(&self, svg: &mut String) {
        let cell = self.config.cell_size;
        let markers = [
            (self.scenario.start, self.config.colors.start),
            (self.scenario.goal, self.config.colors.goal),
        ];

        writeln!(svg, r#"    <g id="markers">"#).unwrap();

        for (coord, color) in markers {
            let cx = (coord.col as f32 + 0.5) * cell;
            let cy = (coord.row as f32 + 0.5) * cell;

            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="2"/>"#,
                cx, cy, self.config.marker_radius, color
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render legend and search statistics
    fn render_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        ).unwrap();

        let legend_entries = if self.result.is_some() { 4 } else { 3 };
        let legend_height = (legend_entries * 20 + 25) as f32;

        // Legend background
        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="{:.0}" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0,
            legend_height
        ).unwrap();

        let mut entry_y = 20.0;

        // Wall swatch
        writeln!(
            svg,
            r#"    <rect x="28" y="{:.0}" width="15" height="15" fill="{}"/>"#,
            entry_y - 8.0,
            self.config.colors.wall
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="60" y="{:.0}" fill="#333">Wall</text>"##,
            entry_y + 4.0
        )
        .unwrap();
        entry_y += 20.0;

        // Start and goal markers
        for (label, color) in [
            ("Start", self.config.colors.start),
            ("Goal", self.config.colors.goal),
        ] {
            writeln!(
                svg,
                r#"    <circle cx="35" cy="{:.0}" r="6" fill="{}" stroke="white" stroke-width="1"/>"#,
                entry_y, color
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333">{}</text>"##,
                entry_y + 4.0,
                label
            )
            .unwrap();
            entry_y += 20.0;
        }

        // Path line entry plus statistics on the right
        if let Some(result) = self.result {
            writeln!(
                svg,
                r#"    <line x1="20" y1="{:.0}" x2="50" y2="{:.0}" stroke="{}" stroke-width="3"/>"#,
                entry_y, entry_y, self.config.colors.path
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333">Path</text>"##,
                entry_y + 4.0
            )
            .unwrap();

            let stats = if result.success {
                format!(
                    "Cost: {} | Cells: {} | Expanded: {}",
                    result.cost,
                    result.length_cells(),
                    result.nodes_expanded
                )
            } else {
                format!("No path found | Expanded: {}", result.nodes_expanded)
            };
            writeln!(
                svg,
                r##"    <text x="{:.0}" y="22" fill="#333" text-anchor="end">{}</text>"##,
                svg_width - 25.0,
                escape_text(&stats)
            )
            .unwrap();
        }

        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let svg_content = self.render();
        std::fs::write(path, svg_content)
    }
}

// Escape for text node content; attribute values here are all
// generated numbers and palette constants. Ampersand first so
// produced entities are not re-escaped.
fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
