use std::collections::{HashMap, HashSet, VecDeque};

use super::{passage_neighbors, reconstruct};
use crate::maze::{GridCoord, Maze};

/// Breadth-first search: FIFO frontier, shortest path on the unweighted grid.
pub fn solve_bfs(
    maze: &Maze,
    start: GridCoord,
    goal: GridCoord,
    cancel: &dyn Fn() -> bool,
) -> Vec<GridCoord> {
    let mut queue = VecDeque::from([start]);
    let mut parent: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if cancel() {
            return Vec::new();
        }
        if current == goal {
            return reconstruct(&parent, current);
        }
        for next in passage_neighbors(maze, current) {
            if visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    Vec::new()
}
