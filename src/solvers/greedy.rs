use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
    rc::Rc,
};

use super::{FrontierCell, manhattan, passage_neighbors, unwind};
use crate::maze::{GridCoord, Maze};

/// Greedy best-first: min-heap keyed by the Manhattan distance to the goal
/// alone. Fast and direct, but the path it finds carries no optimality
/// guarantee at all.
pub fn solve_greedy(
    maze: &Maze,
    start: GridCoord,
    goal: GridCoord,
    cancel: &dyn Fn() -> bool,
) -> Vec<GridCoord> {
    let mut heap: BinaryHeap<Reverse<Rc<FrontierCell>>> = BinaryHeap::new();
    heap.push(Reverse(Rc::new(FrontierCell {
        coord: start,
        parent: None,
        cost: 0,
        priority: manhattan(start, goal),
    })));
    let mut closed: HashSet<GridCoord> = HashSet::new();

    while let Some(Reverse(current)) = heap.pop() {
        if cancel() {
            return Vec::new();
        }
        if !closed.insert(current.coord) {
            continue;
        }
        if current.coord == goal {
            return unwind(&current);
        }

        for next in passage_neighbors(maze, current.coord) {
            if closed.contains(&next) {
                continue;
            }
            heap.push(Reverse(Rc::new(FrontierCell {
                coord: next,
                parent: Some(current.clone()),
                cost: current.cost + 1,
                priority: manhattan(next, goal),
            })));
        }
    }
    Vec::new()
}
