//! A* pathfinding types.

use crate::core::GridCoord;
use std::cmp::Ordering;

/// A node in the search arena.
///
/// Parent links are arena indices, so reconstruction is a plain
/// index walk over a `Vec` owned by a single planner invocation.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    /// Cost from start in unit steps
    pub g: u32,
    /// Arena index of the predecessor (None for the start node)
    pub parent: Option<usize>,
}

/// A frontier entry pointing at an arena node.
///
/// Carries the f-score and an insertion sequence number; the node data
/// itself lives in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct FrontierNode {
    /// g + Manhattan heuristic
    pub f: u32,
    /// Push order, used to break f ties deterministically
    pub seq: u64,
    /// Index into the search arena
    pub node_idx: usize,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal f-scores pop
        // in insertion order so runs are reproducible
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Path as grid coordinates, start through goal inclusive
    /// (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Total path cost in unit steps
    pub cost: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: u32::MAX,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}

/// Reason for path failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start cell is not walkable
    StartBlocked,
    /// Goal cell is not walkable
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Start or goal is out of bounds
    OutOfBounds,
}
