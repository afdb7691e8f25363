use std::collections::{HashMap, VecDeque};

use super::passage_neighbors;
use crate::maze::{GridCoord, Maze};

/// Bidirectional BFS: two FIFO frontiers, one growing from the start and one
/// from the goal, expanded level by level (smaller frontier first).
///
/// A meeting cell is noted as soon as one side discovers a cell the other
/// side already reached, but the search only stops once no undiscovered
/// route could beat the best meeting found: any path still unseen by both
/// sides must be longer than the two explored depths combined.
pub fn solve_bidirectional(
    maze: &Maze,
    start: GridCoord,
    goal: GridCoord,
    cancel: &dyn Fn() -> bool,
) -> Vec<GridCoord> {
    let mut from_start = Side::new(start);
    let mut from_goal = Side::new(goal);
    // Best known meeting: (steps on the spliced path, meeting cell)
    let mut best: Option<(usize, GridCoord)> = None;

    while !from_start.frontier.is_empty() && !from_goal.frontier.is_empty() {
        if cancel() {
            return Vec::new();
        }
        if let Some((steps, meet)) = best {
            if steps <= from_start.depth + from_goal.depth + 1 {
                return splice(&from_start.parent, &from_goal.parent, meet);
            }
        }
        if from_start.frontier.len() <= from_goal.frontier.len() {
            from_start.expand_level(maze, &from_goal, &mut best);
        } else {
            from_goal.expand_level(maze, &from_start, &mut best);
        }
    }

    match best {
        Some((_, meet)) => splice(&from_start.parent, &from_goal.parent, meet),
        None => Vec::new(),
    }
}

/// One direction of the search.
struct Side {
    frontier: VecDeque<GridCoord>,
    dist: HashMap<GridCoord, usize>,
    parent: HashMap<GridCoord, GridCoord>,
    /// Depth of the fully explored region; the frontier sits at this depth.
    depth: usize,
}

impl Side {
    fn new(origin: GridCoord) -> Self {
        Side {
            frontier: VecDeque::from([origin]),
            dist: HashMap::from([(origin, 0)]),
            parent: HashMap::new(),
            depth: 0,
        }
    }

    /// Expands the whole current frontier one level, recording any meeting
    /// with the other side's explored region.
    fn expand_level(&mut self, maze: &Maze, other: &Side, best: &mut Option<(usize, GridCoord)>) {
        for _ in 0..self.frontier.len() {
            let Some(current) = self.frontier.pop_front() else {
                break;
            };
            for next in passage_neighbors(maze, current) {
                if self.dist.contains_key(&next) {
                    continue;
                }
                self.dist.insert(next, self.depth + 1);
                self.parent.insert(next, current);
                self.frontier.push_back(next);

                if let Some(&other_depth) = other.dist.get(&next) {
                    let steps = self.depth + 1 + other_depth;
                    if best.is_none_or(|(found, _)| steps < found) {
                        *best = Some((steps, next));
                    }
                }
            }
        }
        self.depth += 1;
    }
}

/// Joins the two parent chains through the meeting cell into one
/// start-to-goal path.
fn splice(
    parent_start: &HashMap<GridCoord, GridCoord>,
    parent_goal: &HashMap<GridCoord, GridCoord>,
    meet: GridCoord,
) -> Vec<GridCoord> {
    let mut path = vec![meet];
    let mut current = meet;
    while let Some(&previous) = parent_start.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();

    let mut current = meet;
    while let Some(&next) = parent_goal.get(&current) {
        path.push(next);
        current = next;
    }
    path
}
