//! Core types shared across the crate.
//!
//! - [`GridCoord`]: integer cell coordinates (row, column)
//! - [`CellKind`]: binary walkability state of a cell

mod cell;
mod coord;

pub use cell::CellKind;
pub use coord::GridCoord;
