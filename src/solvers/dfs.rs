use std::collections::{HashMap, HashSet};

use super::{passage_neighbors, reconstruct};
use crate::maze::{GridCoord, Maze};

/// Depth-first search: LIFO frontier. Finds a path, not necessarily a short
/// one; the last-pushed neighbor is explored first.
pub fn solve_dfs(
    maze: &Maze,
    start: GridCoord,
    goal: GridCoord,
    cancel: &dyn Fn() -> bool,
) -> Vec<GridCoord> {
    let mut stack = vec![start];
    let mut parent: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut visited = HashSet::from([start]);

    while let Some(current) = stack.pop() {
        if cancel() {
            return Vec::new();
        }
        if current == goal {
            return reconstruct(&parent, current);
        }
        for next in passage_neighbors(maze, current) {
            if visited.insert(next) {
                parent.insert(next, current);
                stack.push(next);
            }
        }
    }
    Vec::new()
}
