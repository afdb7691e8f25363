use std::collections::HashMap;
use std::rc::Rc;

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod greedy;

use astar::solve_astar;
use bfs::solve_bfs;
use bidirectional::solve_bidirectional;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;
use greedy::solve_greedy;

use crate::error::MazeError;
use crate::maze::{GridCoord, Maze};

/// A frontier entry for the heap-based solvers. The parent chain doubles as
/// the path: reaching the goal walks the `Rc` links back to the start.
pub(crate) struct FrontierCell {
    /// Grid-space position of this entry
    pub coord: GridCoord,
    /// The cell this one was reached from
    pub parent: Option<Rc<FrontierCell>>,
    /// Steps taken from the start
    pub cost: usize,
    /// Heap key; what goes in here is what distinguishes the solvers
    pub priority: usize,
}

impl PartialEq for FrontierCell {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.coord == other.coord
    }
}

impl Eq for FrontierCell {}

impl PartialOrd for FrontierCell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Coordinate as a tie-break gives the heap a deterministic total order
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.coord.cmp(&other.coord))
    }
}

/// Walks the parent chain back from the goal entry and returns the path in
/// start-to-goal order.
pub(crate) fn unwind(end: &Rc<FrontierCell>) -> Vec<GridCoord> {
    let mut path = vec![end.coord];
    let mut current = end.clone();
    while let Some(parent) = current.parent.clone() {
        path.push(parent.coord);
        current = parent;
    }
    path.reverse();
    path
}

/// Path reconstruction for the parent-map solvers.
pub(crate) fn reconstruct(parent: &HashMap<GridCoord, GridCoord>, end: GridCoord) -> Vec<GridCoord> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&previous) = parent.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// The four grid-space neighbors that are carved passage.
pub(crate) fn passage_neighbors(maze: &Maze, (x, y): GridCoord) -> impl Iterator<Item = GridCoord> {
    // Wrapping x - 1 to u16::MAX on underflow makes the passage check reject
    // the left/top edges without branching; the grid is far smaller than
    // u16::MAX so saturation on the other side is equally safe.
    [
        (x.wrapping_sub(1), y),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x, y.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |&coord| maze.is_passage(coord))
}

/// Manhattan distance in grid space; the admissible heuristic for A* and the
/// whole priority for greedy best-first.
pub(crate) fn manhattan(a: GridCoord, b: GridCoord) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Greedy,
    Bidirectional,
}

impl Solver {
    /// Every available solver.
    pub const ALL: [Solver; 6] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::Dijkstra,
        Solver::AStar,
        Solver::Greedy,
        Solver::Bidirectional,
    ];

    /// Canonical identifier, round-trips through [`FromStr`](std::str::FromStr).
    /// Also the name stored in the solution record.
    pub fn name(self) -> &'static str {
        match self {
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
            Solver::Dijkstra => "dijkstra",
            Solver::AStar => "astar",
            Solver::Greedy => "greedy",
            Solver::Bidirectional => "bidirectional",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Greedy => write!(f, "Greedy Best-First Search"),
            Solver::Bidirectional => write!(f, "Bidirectional BFS"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Runs a solver from `start` to `goal` over the finished grid.
///
/// Both endpoints must be carved passage inside the grid, otherwise the call
/// fails with `InvalidPosition`. A disconnected grid is not an error: the
/// result is an empty path. `cancel` is polled once per frontier expansion;
/// when it trips, the solver gives up and returns an empty path.
///
/// A non-empty path runs start..goal inclusive over 4-adjacent passage
/// cells, and is appended to the maze's solution record.
pub fn solve_maze(
    maze: &mut Maze,
    solver: Solver,
    start: GridCoord,
    goal: GridCoord,
    cancel: impl Fn() -> bool,
) -> Result<Vec<GridCoord>, MazeError> {
    for (x, y) in [start, goal] {
        if !maze.is_passage((x, y)) {
            return Err(MazeError::InvalidPosition { x, y });
        }
    }

    let cancel: &dyn Fn() -> bool = &cancel;
    let path = if start == goal {
        vec![start]
    } else {
        match solver {
            Solver::Bfs => solve_bfs(maze, start, goal, cancel),
            Solver::Dfs => solve_dfs(maze, start, goal, cancel),
            Solver::Dijkstra => solve_dijkstra(maze, start, goal, cancel),
            Solver::AStar => solve_astar(maze, start, goal, cancel),
            Solver::Greedy => solve_greedy(maze, start, goal, cancel),
            Solver::Bidirectional => solve_bidirectional(maze, start, goal, cancel),
        }
    };

    if path.is_empty() {
        tracing::debug!("{} found no path {:?} -> {:?}", solver, start, goal);
    } else {
        tracing::debug!("{} found a path of {} cells", solver, path.len());
        maze.add_solution(path.clone(), solver.name());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Generator;
    use crate::maze::{cell_to_grid, wall_between};
    use std::collections::{HashMap, HashSet, VecDeque};

    fn never() -> bool {
        false
    }

    fn generated(generator: Generator, width: u8, height: u8, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height, (0, 0), None).unwrap();
        maze.generate(generator, false, Some(seed));
        maze
    }

    /// Independent shortest-path length (in cells) by plain BFS, used to
    /// cross-check the optimal solvers.
    fn bfs_distance(maze: &Maze, start: GridCoord, goal: GridCoord) -> Option<usize> {
        let mut dist = HashMap::from([(start, 1usize)]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            if current == goal {
                return dist.get(&goal).copied();
            }
            let steps = dist[&current];
            for next in passage_neighbors(maze, current) {
                if !dist.contains_key(&next) {
                    dist.insert(next, steps + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn assert_valid_path(maze: &Maze, path: &[GridCoord], start: GridCoord, goal: GridCoord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for coord in path {
            assert!(maze.is_passage(*coord), "path crosses wall at {coord:?}");
        }
        for pair in path.windows(2) {
            let dx = pair[0].0.abs_diff(pair[1].0);
            let dy = pair[0].1.abs_diff(pair[1].1);
            assert_eq!(dx + dy, 1, "path jumps from {:?} to {:?}", pair[0], pair[1]);
        }
        // No cell is visited twice
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn every_solver_returns_a_valid_path() {
        for generator in Generator::ALL {
            let mut maze = generated(generator, 8, 8, 17);
            let (start, goal) = (maze.start(), maze.goal());
            for solver in Solver::ALL {
                let path = solve_maze(&mut maze, solver, start, goal, never).unwrap();
                assert!(!path.is_empty(), "{solver} failed on a {generator} maze");
                assert_valid_path(&maze, &path, start, goal);
            }
        }
    }

    #[test]
    fn optimal_solvers_match_independent_bfs() {
        // Recursive division grids contain open rooms with several competing
        // routes, so optimality is actually exercised.
        for generator in [Generator::RecurDiv, Generator::Kruskal, Generator::Dfs] {
            let mut maze = generated(generator, 9, 7, 23);
            let (start, goal) = (maze.start(), maze.goal());
            let shortest = bfs_distance(&maze, start, goal).unwrap();
            for solver in [
                Solver::Bfs,
                Solver::Dijkstra,
                Solver::AStar,
                Solver::Bidirectional,
            ] {
                let path = solve_maze(&mut maze, solver, start, goal, never).unwrap();
                assert_eq!(
                    path.len(),
                    shortest,
                    "{solver} was not optimal on a {generator} maze"
                );
            }
        }
    }

    #[test]
    fn disconnected_regions_yield_empty_paths() {
        // Two carved pockets with no connection between them
        let mut maze = Maze::new(4, 4, (0, 0), None).unwrap();
        maze.carve(cell_to_grid((1, 0)));
        maze.carve(wall_between((0, 0), (1, 0)));
        maze.carve(cell_to_grid((2, 3)));
        maze.carve(wall_between((2, 3), (3, 3)));

        let (start, goal) = (maze.start(), maze.goal());
        for solver in Solver::ALL {
            let path = solve_maze(&mut maze, solver, start, goal, never).unwrap();
            assert!(path.is_empty(), "{solver} invented a path");
        }
        assert!(maze.solutions().is_empty());
    }

    #[test]
    fn endpoints_must_be_open() {
        let mut maze = generated(Generator::Dfs, 5, 5, 2);
        let (start, goal) = (maze.start(), maze.goal());
        // (0, 0) is the grid corner, always a wall
        assert_eq!(
            solve_maze(&mut maze, Solver::Bfs, (0, 0), goal, never).unwrap_err(),
            MazeError::InvalidPosition { x: 0, y: 0 }
        );
        // Out of bounds reads as wall as well
        assert_eq!(
            solve_maze(&mut maze, Solver::AStar, start, (99, 1), never).unwrap_err(),
            MazeError::InvalidPosition { x: 99, y: 1 }
        );
    }

    #[test]
    fn cancellation_returns_empty_without_recording() {
        let mut maze = generated(Generator::Prim, 8, 8, 4);
        let (start, goal) = (maze.start(), maze.goal());
        let path = solve_maze(&mut maze, Solver::Bfs, start, goal, || true).unwrap();
        assert!(path.is_empty());
        assert!(maze.solutions().is_empty());
    }

    #[test]
    fn solves_accumulate_in_the_solution_record() {
        let mut maze = generated(Generator::Kruskal, 6, 6, 12);
        let (start, goal) = (maze.start(), maze.goal());
        solve_maze(&mut maze, Solver::Bfs, start, goal, never).unwrap();
        solve_maze(&mut maze, Solver::Dijkstra, start, goal, never).unwrap();

        let record: Vec<_> = maze
            .solutions()
            .iter()
            .map(|solution| solution.solver.as_str())
            .collect();
        assert_eq!(record, vec!["bfs", "dijkstra"]);
        assert_eq!(maze.solutions()[0].path.first(), Some(&start));
    }

    #[test]
    fn start_equals_goal() {
        let mut maze = generated(Generator::Dfs, 4, 4, 6);
        let start = maze.start();
        let path = solve_maze(&mut maze, Solver::Greedy, start, start, never).unwrap();
        assert_eq!(path, vec![start]);
    }

    #[test]
    fn scenario_dfs_3x3_bfs_solve() {
        let mut maze = Maze::new(3, 3, (0, 0), Some((2, 2))).unwrap();
        maze.generate(Generator::Dfs, false, Some(5));
        let path = solve_maze(&mut maze, Solver::Bfs, (1, 1), (5, 5), never).unwrap();
        assert!(!path.is_empty());
        assert_valid_path(&maze, &path, (1, 1), (5, 5));
    }

    #[test]
    fn names_roundtrip() {
        for solver in Solver::ALL {
            assert_eq!(solver.name().parse::<Solver>().unwrap(), solver);
        }
        assert!(matches!(
            "warp".parse::<Solver>(),
            Err(MazeError::UnknownAlgorithm(_))
        ));
    }
}
