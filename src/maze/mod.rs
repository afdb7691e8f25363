pub mod cell;
mod grid;
mod history;

use serde::Serialize;

pub use cell::Cell;
pub use history::CarveStep;

use grid::Grid;
use history::CarveHistory;

use crate::error::MazeError;
use crate::generators::{self, Generator};
use crate::solvers::{self, Solver};

/// Logical maze coordinate `(cx, cy)` in `[0, width) x [0, height)`.
pub type CellCoord = (u8, u8);
/// Coordinate `(gx, gy)` into the doubled grid, where odd/odd positions are
/// logical cells and even positions are walls or carved connectors.
pub type GridCoord = (u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Converts a cell-space coordinate to its grid-space position.
pub fn cell_to_grid((cx, cy): CellCoord) -> GridCoord {
    (cx as u16 * 2 + 1, cy as u16 * 2 + 1)
}

/// Inverse of [`cell_to_grid`]. Only meaningful for odd/odd grid positions.
pub fn grid_to_cell((gx, gy): GridCoord) -> CellCoord {
    (((gx - 1) / 2) as u8, ((gy - 1) / 2) as u8)
}

/// Grid-space position of the wall between two 4-adjacent cells: the
/// arithmetic midpoint of their grid positions. Every generator derives wall
/// coordinates through this function; there is no other wall arithmetic.
pub fn wall_between(a: CellCoord, b: CellCoord) -> GridCoord {
    let (ax, ay) = cell_to_grid(a);
    let (bx, by) = cell_to_grid(b);
    ((ax + bx) / 2, (ay + by) / 2)
}

/// Tunables that would otherwise live in ambient module state.
#[derive(Debug, Clone, Copy)]
pub struct MazeConfig {
    /// Maximum number of carve steps retained for animation replay; the
    /// oldest entries are evicted first once the cap is reached.
    pub max_history_steps: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            max_history_steps: 10_000,
        }
    }
}

/// One successful solve: the path walked and the solver that found it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<GridCoord>,
    pub solver: String,
}

/// Structured dump of a maze for persistence collaborators: 0/1 rows plus
/// start, goal and the accumulated solution record. Dump-only; the core has
/// no load path.
#[derive(Debug, Serialize)]
pub struct MazeDump {
    pub maze: Vec<Vec<u8>>,
    pub start: GridCoord,
    pub goal: GridCoord,
    pub solutions: Vec<Solution>,
}

#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    width: u8,
    height: u8,
    /// Grid-space entry position, always odd/odd. Fixed at construction.
    start: GridCoord,
    /// Grid-space goal position, always odd/odd. Fixed at construction.
    goal: GridCoord,
    history: CarveHistory,
    solutions: Vec<Solution>,
}

impl Maze {
    /// Smallest supported maze dimension. The upper bound is `u8::MAX`.
    pub const MIN_SIZE: u8 = 2;

    /// Creates an all-wall maze with the given dimensions, entry cell and
    /// optional goal cell (defaults to the bottom-right cell). Start and
    /// goal are carved as passage immediately.
    pub fn new(
        width: u8,
        height: u8,
        entry: CellCoord,
        goal: Option<CellCoord>,
    ) -> Result<Self, MazeError> {
        Maze::with_config(width, height, entry, goal, MazeConfig::default())
    }

    pub fn with_config(
        width: u8,
        height: u8,
        entry: CellCoord,
        goal: Option<CellCoord>,
        config: MazeConfig,
    ) -> Result<Self, MazeError> {
        if width < Maze::MIN_SIZE || height < Maze::MIN_SIZE {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let goal = goal.unwrap_or((width - 1, height - 1));
        for (x, y) in [entry, goal] {
            if x >= width || y >= height {
                return Err(MazeError::InvalidCoordinate { x, y });
            }
        }

        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_width = width as u16 * 2 + 1;
        let grid_height = height as u16 * 2 + 1;
        let mut maze = Maze {
            grid: Grid::new(grid_width, grid_height, Cell::Wall),
            width,
            height,
            start: cell_to_grid(entry),
            goal: cell_to_grid(goal),
            history: CarveHistory::new(config.max_history_steps),
            solutions: Vec::new(),
        };
        maze.grid.set(maze.start, Cell::Passage);
        maze.grid.set(maze.goal, Cell::Passage);
        Ok(maze)
    }

    /// Width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn start(&self) -> GridCoord {
        self.start
    }

    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    pub fn grid_width(&self) -> u16 {
        self.grid.width()
    }

    pub fn grid_height(&self) -> u16 {
        self.grid.height()
    }

    /// Checks if the given cell-space coordinate is within the maze.
    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Whether the grid-space position is a carved passage. Out-of-bounds
    /// positions read as walls.
    pub fn is_passage(&self, at: GridCoord) -> bool {
        self.grid.get(at).is_some_and(Cell::is_passage)
    }

    /// Cell-space neighbors one step away in the cardinal directions.
    pub fn neighbors(&self, coord: CellCoord) -> impl Iterator<Item = CellCoord> {
        let (x, y) = coord;
        // Wrapping x - 1 to u8::MAX on underflow and clamping x + 1 at
        // u8::MAX on overflow lets the bounds filter reject both ends
        // without branching (the largest valid index is u8::MAX - 1).
        let candidates = if self.in_bounds(coord) {
            vec![
                (x.wrapping_sub(1), y),
                (x.saturating_add(1), y),
                (x, y.wrapping_sub(1)),
                (x, y.saturating_add(1)),
            ]
        } else {
            vec![]
        };
        candidates
            .into_iter()
            .filter(move |&c| c.0 < self.width && c.1 < self.height)
    }

    // ---- carve primitives used by the generators ----

    /// Carves one grid position, recording a `(at, at)` step on change.
    pub(crate) fn carve(&mut self, at: GridCoord) {
        if self.grid.set(at, Cell::Passage) {
            self.history.record(CarveStep {
                primary: at,
                secondary: at,
            });
        }
    }

    /// Carves two grid positions as a single recorded step (typically a
    /// cell together with the wall connecting it to the structure).
    pub(crate) fn carve_pair(&mut self, primary: GridCoord, secondary: GridCoord) {
        let changed_primary = self.grid.set(primary, Cell::Passage);
        let changed_secondary = self.grid.set(secondary, Cell::Passage);
        if changed_primary || changed_secondary {
            self.history.record(CarveStep { primary, secondary });
        }
    }

    /// Places a wall at one grid position, recording the step on change.
    /// Only recursive division adds walls; everything else subtracts them.
    pub(crate) fn place_wall(&mut self, at: GridCoord) {
        if self.grid.set(at, Cell::Wall) {
            self.history.record(CarveStep {
                primary: at,
                secondary: at,
            });
        }
    }

    /// Inserts a full wall line after the given row (Horizontal) or column
    /// (Vertical), spanning the cells `span_start..=span_end` in the
    /// perpendicular direction. The line is contiguous in grid space, so it
    /// also seals the pillar corners between cells.
    pub(crate) fn insert_wall_line(
        &mut self,
        orientation: Orientation,
        after: u8,
        span_start: u8,
        span_end: u8,
    ) {
        let line = after as u16 * 2 + 2;
        let from = span_start as u16 * 2 + 1;
        let to = span_end as u16 * 2 + 1;
        match orientation {
            Orientation::Horizontal => {
                debug_assert!(after + 1 < self.height && span_end < self.width);
                for gx in from..=to {
                    self.place_wall((gx, line));
                }
            }
            Orientation::Vertical => {
                debug_assert!(after + 1 < self.width && span_end < self.height);
                for gy in from..=to {
                    self.place_wall((line, gy));
                }
            }
        }
    }

    /// Resets every grid position to wall (carving algorithms start here).
    pub(crate) fn reset_to_walls(&mut self) {
        self.grid.fill(Cell::Wall);
    }

    /// Opens the whole interior as passage, keeping the boundary walls
    /// (recursive division starts here and subtracts walls).
    pub(crate) fn open_interior(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if !self.grid.is_boundary(x, y) {
                    self.grid.set((x, y), Cell::Passage);
                }
            }
        }
    }

    /// Start and goal must be passage no matter what a generator did.
    pub(crate) fn restore_endpoints(&mut self) {
        self.grid.set(self.start, Cell::Passage);
        self.grid.set(self.goal, Cell::Passage);
    }

    pub(crate) fn set_recording(&mut self, recording: bool) {
        self.history.set_recording(recording);
    }

    // ---- generation / solving entry points ----

    /// Carves the maze with the chosen algorithm, replacing whatever the
    /// grid held before. History is cleared first and recorded only when
    /// `animate` is true; pass a seed for reproducible output.
    pub fn generate(&mut self, generator: Generator, animate: bool, seed: Option<u64>) {
        generators::generate_maze(self, generator, animate, seed);
    }

    /// Runs a solver from `start` to `goal` over the finished grid. See
    /// [`solvers::solve_maze`].
    pub fn solve(
        &mut self,
        solver: Solver,
        start: GridCoord,
        goal: GridCoord,
        cancel: impl Fn() -> bool,
    ) -> Result<Vec<GridCoord>, MazeError> {
        solvers::solve_maze(self, solver, start, goal, cancel)
    }

    // ---- animation replay ----

    /// Drains the recorded carve steps, oldest first. Single pass: a second
    /// call yields nothing until the next animated generation.
    pub fn take_steps(&mut self) -> impl Iterator<Item = CarveStep> {
        self.history.drain()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Frees the replay buffer without touching the grid.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ---- solution record ----

    pub(crate) fn add_solution(&mut self, path: Vec<GridCoord>, solver: impl Into<String>) {
        self.solutions.push(Solution {
            path,
            solver: solver.into(),
        });
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Structured dump for persistence collaborators.
    pub fn dump(&self) -> MazeDump {
        let maze = (0..self.grid.height())
            .map(|y| {
                (0..self.grid.width())
                    .map(|x| self.grid[(x, y)].as_bit())
                    .collect()
            })
            .collect();
        MazeDump {
            maze,
            start: self.start,
            goal: self.goal,
            solutions: self.solutions.clone(),
        }
    }
}

impl std::ops::Index<CellCoord> for Maze {
    type Output = Cell;

    fn index(&self, index: CellCoord) -> &Self::Output {
        &self.grid[cell_to_grid(index)]
    }
}
