//! Grid model: fixed-size walkability storage.
//!
//! A [`GridMap`] is built once during setup (paint walls, then stop
//! mutating) and is only read during search and rendering.

mod map;

pub use map::{CellCounts, GridMap};
