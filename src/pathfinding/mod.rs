//! A* pathfinding over a walkability grid.
//!
//! Implements single-shot A* search with:
//! - 4-connected movement at unit step cost
//! - Manhattan-distance heuristic
//! - Deterministic tie-breaking (equal f-scores pop in insertion order)
//!
//! Search state (frontier, settled set, best-known costs, node arena)
//! is created per invocation and dropped when the result is returned.

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{PathFailure, PathResult};

use crate::core::GridCoord;
use crate::grid::GridMap;

/// Quick path finding over a grid
pub fn find_path(grid: &GridMap, start: GridCoord, goal: GridCoord) -> PathResult {
    AStarPlanner::new(grid).find_path(start, goal)
}

/// Check if a path exists between two cells
pub fn path_exists(grid: &GridMap, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).success
}
