use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod hunt_and_kill;
mod kruskal;
mod prim;
mod recur_div;
mod wilson;

use dfs::randomized_dfs;
use hunt_and_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_div::recursive_division;
use wilson::wilsons;

use crate::error::MazeError;
use crate::maze::{CellCoord, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The four cardinal steps in cell space.
pub(crate) const DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Moves one step from a cell, or `None` if the step leaves the maze.
pub(crate) fn offset(maze: &Maze, (x, y): CellCoord, (dx, dy): (i8, i8)) -> Option<CellCoord> {
    let x = x.checked_add_signed(dx)?;
    let y = y.checked_add_signed(dy)?;
    maze.in_bounds((x, y)).then_some((x, y))
}

/// Row-major index of a cell into a `width * height` bookkeeping slice.
pub(crate) fn cell_index(maze: &Maze, (x, y): CellCoord) -> usize {
    y as usize * maze.width() as usize + x as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Dfs,
    Prim,
    Wilson,
    RecurDiv,
    HuntAndKill,
    Kruskal,
}

impl Generator {
    /// Every available generation algorithm.
    pub const ALL: [Generator; 6] = [
        Generator::Dfs,
        Generator::Prim,
        Generator::Wilson,
        Generator::RecurDiv,
        Generator::HuntAndKill,
        Generator::Kruskal,
    ];

    /// Canonical identifier, round-trips through [`FromStr`](std::str::FromStr).
    pub fn name(self) -> &'static str {
        match self {
            Generator::Dfs => "dfs",
            Generator::Prim => "prims",
            Generator::Wilson => "wilsons",
            Generator::RecurDiv => "recdiv",
            Generator::HuntAndKill => "handk",
            Generator::Kruskal => "kruskals",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Backtracker"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Carves `maze` with the chosen algorithm, replacing its previous contents.
///
/// History is cleared up front and recorded only when `animate` is true.
/// Whatever the algorithm did, start and goal end up carved.
pub fn generate_maze(maze: &mut Maze, generator: Generator, animate: bool, seed: Option<u64>) {
    tracing::debug!(
        "Generating {}x{} maze with {}",
        maze.width(),
        maze.height(),
        generator
    );
    let mut rng = get_rng(seed);

    maze.clear_history();
    // Recursive division is the one algorithm that subtracts walls from an
    // open field; the rest carve passages out of solid wall.
    match generator {
        Generator::RecurDiv => maze.open_interior(),
        _ => maze.reset_to_walls(),
    }

    maze.set_recording(animate);
    match generator {
        Generator::Dfs => randomized_dfs(maze, &mut rng),
        Generator::Prim => randomized_prim(maze, &mut rng),
        Generator::Wilson => wilsons(maze, &mut rng),
        Generator::RecurDiv => recursive_division(maze, &mut rng),
        Generator::HuntAndKill => hunt_and_kill(maze, &mut rng),
        Generator::Kruskal => randomized_kruskal(maze, &mut rng),
    }
    maze.set_recording(false);
    maze.restore_endpoints();
}
