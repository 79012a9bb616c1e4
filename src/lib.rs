//! # Marga-Grid: A* Path Planning on Walkability Grids
//!
//! A library and CLI for shortest-path search on 2D grids, with static
//! SVG, PGM, and ASCII rendering of the results.
//!
//! ## Features
//!
//! - **A\* Search**: 4-connected, unit-cost search with a Manhattan
//!   heuristic and arena-backed path reconstruction
//! - **Deterministic Runs**: equal-cost frontier ties break by insertion
//!   order, so the same scenario always yields the same path
//! - **Scenario Files**: YAML descriptions of grid size, wall regions,
//!   and the start/goal pair, validated at load time
//! - **Static Rendering**: SVG with path overlay and legend, binary PGM
//!   images, and ASCII grids for terminals
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_grid::{Scenario, pathfinding};
//!
//! let scenario = Scenario::demo();
//! let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);
//! assert!(result.success);
//! println!("cost={} cells={}", result.cost, result.path.len());
//! ```
//!
//! ## Coordinate Frame
//!
//! Grids are row-major with `(row 0, col 0)` in the top-left corner:
//! - **Rows** grow downward
//! - **Columns** grow rightward
//!
//! Rendered output (SVG, PGM, ASCII) uses the same orientation, so row 0
//! always appears at the top.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types (GridCoord, CellKind)
//! - [`grid`]: Walkability grid storage and region painting
//! - [`scenario`]: YAML scenario loading and validation
//! - [`pathfinding`]: A* planner and result types
//! - [`render`]: ASCII, SVG, and PGM output
//!
//! ## Data Flow
//!
//! ```text
//! scenario.yaml ──► Scenario ──────► AStarPlanner ──► PathResult
//!                  (GridMap +                        (path, cost,
//!                   start/goal)                       expansions)
//!                      │                                  │
//!                      └────────────────┬─────────────────┘
//!                                       ▼
//!                         render (ASCII / SVG / PGM)
//! ```

pub mod core;
pub mod grid;
pub mod pathfinding;
pub mod render;
pub mod scenario;

// Re-export main types at crate root
pub use core::{CellKind, GridCoord};
pub use grid::GridMap;
pub use pathfinding::{AStarPlanner, PathFailure, PathResult};
pub use scenario::{Scenario, ScenarioConfig, ScenarioError};
