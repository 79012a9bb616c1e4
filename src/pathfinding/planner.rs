//! A* planner implementation.

use crate::core::GridCoord;
use crate::grid::GridMap;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{FrontierNode, PathFailure, PathResult, SearchNode};

/// A* pathfinder over a borrowed grid.
///
/// All search state is local to one [`find_path`](AStarPlanner::find_path)
/// call; the planner itself is just the grid borrow, so the grid cannot
/// change while a search runs.
pub struct AStarPlanner<'a> {
    grid: &'a GridMap,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a GridMap) -> Self {
        Self { grid }
    }

    /// Find a shortest path from start to goal.
    ///
    /// 4-connected movement at unit cost with a Manhattan heuristic.
    /// An unreachable goal is an ordinary outcome reported in the
    /// result, never an error.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.row, start.col, goal.row, goal.col
        );

        // Check bounds
        if !self.grid.is_valid_coord(start) || !self.grid.is_valid_coord(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        // Check start and goal walkability
        if !self.grid.is_walkable(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.row, start.col);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.grid.is_walkable(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.row, goal.col);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        // A* search. Nodes live in an arena; the frontier and the
        // parent links refer to them by index.
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut frontier = BinaryHeap::new();
        let mut settled: HashSet<GridCoord> = HashSet::new();
        let mut best_g: HashMap<GridCoord, u32> = HashMap::new();
        let mut seq: u64 = 0;

        arena.push(SearchNode {
            coord: start,
            g: 0,
            parent: None,
        });
        best_g.insert(start, 0);
        frontier.push(FrontierNode {
            f: self.heuristic(start, goal),
            seq,
            node_idx: 0,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = frontier.pop() {
            let node = arena[current.node_idx];
            nodes_expanded += 1;

            // Goal reached
            if node.coord == goal {
                return self.reconstruct_path(&arena, current.node_idx, node.g, nodes_expanded);
            }

            if settled.contains(&node.coord) {
                continue;
            }
            settled.insert(node.coord);

            // Explore neighbors
            for neighbor in node.coord.neighbors_4() {
                if settled.contains(&neighbor) {
                    continue;
                }

                if !self.grid.is_valid_coord(neighbor) {
                    continue;
                }

                if !self.grid.is_walkable(neighbor) {
                    continue;
                }

                let tentative_g = node.g + 1;

                let current_g = best_g.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < current_g {
                    best_g.insert(neighbor, tentative_g);
                    arena.push(SearchNode {
                        coord: neighbor,
                        g: tentative_g,
                        parent: Some(current.node_idx),
                    });

                    seq += 1;
                    frontier.push(FrontierNode {
                        f: tentative_g + self.heuristic(neighbor, goal),
                        seq,
                        node_idx: arena.len() - 1,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Heuristic function (Manhattan distance for a 4-connected grid)
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> u32 {
        from.manhattan_distance(&to) as u32
    }

    /// Reconstruct the path by walking parent links through the arena
    fn reconstruct_path(
        &self,
        arena: &[SearchNode],
        goal_idx: usize,
        cost: u32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = Vec::new();
        let mut next = Some(goal_idx);

        while let Some(idx) = next {
            path.push(arena[idx].coord);
            next = arena[idx].parent;
        }
        path.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
