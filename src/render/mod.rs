//! Rendering of scenarios and planning results.
//!
//! Three output forms, all static:
//!
//! - **ASCII**: character grid for terminals and log output
//! - **SVG**: vector image with path overlay, markers, and legend
//! - **PGM**: binary grayscale image, one pixel per cell

mod ascii;
mod pgm;
mod svg;

pub use ascii::render_ascii;
pub use pgm::save_pgm;
pub use svg::{SvgColorScheme, SvgConfig, SvgRenderer};
