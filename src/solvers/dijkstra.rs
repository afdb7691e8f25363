use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    rc::Rc,
};

use super::{FrontierCell, passage_neighbors, unwind};
use crate::maze::{GridCoord, Maze};

/// Dijkstra's algorithm: min-heap keyed by accumulated distance.
///
/// Every step costs one, so this matches BFS on a maze grid, but the
/// relaxation bookkeeping is kept explicit: a cell is re-queued whenever a
/// cheaper route to it appears, and stale heap entries are skipped when
/// popped.
pub fn solve_dijkstra(
    maze: &Maze,
    start: GridCoord,
    goal: GridCoord,
    cancel: &dyn Fn() -> bool,
) -> Vec<GridCoord> {
    // Reverse turns the max-heap into a min-heap
    let mut heap: BinaryHeap<Reverse<Rc<FrontierCell>>> = BinaryHeap::new();
    heap.push(Reverse(Rc::new(FrontierCell {
        coord: start,
        parent: None,
        cost: 0,
        priority: 0,
    })));
    let mut best = HashMap::from([(start, 0usize)]);
    let mut closed: HashSet<GridCoord> = HashSet::new();

    while let Some(Reverse(current)) = heap.pop() {
        if cancel() {
            return Vec::new();
        }
        if !closed.insert(current.coord) {
            continue; // stale entry, a cheaper route got here first
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
                    priority: next_cost,
                })));
            }
        }
    }
    Vec::new()
}
