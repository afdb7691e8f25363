use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    rc::Rc,
};

use super::{FrontierCell, manhattan, passage_neighbors, unwind};
use crate::maze::{GridCoord, Maze};

/// A*: min-heap keyed by distance travelled plus the Manhattan distance
/// still to go. The heuristic never overestimates on a 4-connected grid, so
/// the first arrival at the goal is a shortest path.
pub fn solve_astar(
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
    let mut best = HashMap::from([(start, 0usize)]);
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

        let next_cost = current.cost + 1;
        for next in passage_neighbors(maze, current.coord) {
            if closed.contains(&next) {
                continue;
            }
            if best.get(&next).is_none_or(|&cost| next_cost < cost) {
                best.insert(next, next_cost);
                heap.push(Reverse(Rc::new(FrontierCell {
                    coord: next,
                    parent: Some(current.clone()),
                    cost: next_cost,
                    priority: next_cost + manhattan(next, goal),
                })));
            }
        }
    }
    Vec::new()
}
