use rand::{rngs::StdRng, seq::SliceRandom};

use super::{DIRS, cell_index, offset};
use crate::maze::{Maze, cell_to_grid, grid_to_cell, wall_between};

/// Iterative randomized depth-first backtracker.
///
/// Cells are marked visited when discovered, not when popped, so the stack
/// never holds duplicates. Each discovery carves the connecting wall in the
/// same step, which keeps the carved structure a spanning tree.
pub fn randomized_dfs(maze: &mut Maze, rng: &mut StdRng) {
    let mut visited = vec![false; maze.width() as usize * maze.height() as usize];

    let entry = grid_to_cell(maze.start());
    visited[cell_index(maze, entry)] = true;
    let mut stack = vec![entry];

    while let Some(cell) = stack.pop() {
        maze.carve(cell_to_grid(cell));

        let mut dirs = DIRS;
        dirs.shuffle(rng);
        for dir in dirs {
            let Some(next) = offset(maze, cell, dir) else {
                continue;
            };
            if visited[cell_index(maze, next)] {
                continue;
            }
            visited[cell_index(maze, next)] = true;
            maze.carve_pair(cell_to_grid(next), wall_between(cell, next));
            stack.push(next);
        }
    }
}
