use rand::{Rng, rngs::StdRng};

use super::{DIRS, cell_index, offset};
use crate::maze::{CellCoord, Maze, cell_to_grid, grid_to_cell, wall_between};

/// Wilson's algorithm: loop-erased random walks.
///
/// The tree starts as just the entry cell. Each round picks a uniformly
/// random cell outside the tree and walks randomly until it hits the tree,
/// erasing any loop the moment the walk revisits itself; the surviving
/// loop-free path is then carved and attached. Unbiased over all spanning
/// trees, at a higher cost than the other carving algorithms.
pub fn wilsons(maze: &mut Maze, rng: &mut StdRng) {
    let mut in_tree = vec![false; maze.width() as usize * maze.height() as usize];

    let root = grid_to_cell(maze.start());
    in_tree[cell_index(maze, root)] = true;
    maze.carve(cell_to_grid(root));

    let mut outside: Vec<CellCoord> = (0..maze.height())
        .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
        .filter(|&cell| cell != root)
        .collect();

    while !outside.is_empty() {
        let seed = outside[rng.random_range(0..outside.len())];
        let mut walk = vec![seed];
        let mut current = seed;

        loop {
            let (dx, dy) = DIRS[rng.random_range(0..DIRS.len())];
            // A step off the grid is retried as a no-op
            let Some(next) = offset(maze, current, (dx, dy)) else {
                continue;
            };
            current = next;
            if in_tree[cell_index(maze, current)] {
                break;
            }
            if let Some(pos) = walk.iter().position(|&cell| cell == current) {
                // The walk crossed itself: discard the loop
                walk.truncate(pos + 1);
            } else {
                walk.push(current);
            }
        }

        // Attach the loop-free path, nearest-to-tree first. `current` is the
        // tree cell the walk terminated on.
        let mut attach_to = current;
        for &cell in walk.iter().rev() {
            in_tree[cell_index(maze, cell)] = true;
            maze.carve_pair(wall_between(attach_to, cell), cell_to_grid(cell));
            attach_to = cell;
        }

        outside.retain(|&cell| !in_tree[cell_index(maze, cell)]);
    }
}
