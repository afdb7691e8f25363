use rand::{Rng, rngs::StdRng};

use super::cell_index;
use crate::maze::{CellCoord, Maze, cell_to_grid, grid_to_cell, wall_between};

/// Randomized Prim's algorithm.
///
/// Grows the maze outward from the entry cell by repeatedly attaching a
/// uniformly random frontier cell to the carved structure. The frontier
/// holds `(cell, parent)` pairs and is never deduplicated; entries whose
/// cell was reached through another parent are skipped when drawn.
pub fn randomized_prim(maze: &mut Maze, rng: &mut StdRng) {
    let mut visited = vec![false; maze.width() as usize * maze.height() as usize];

    let entry = grid_to_cell(maze.start());
    visited[cell_index(maze, entry)] = true;
    maze.carve(cell_to_grid(entry));

    let mut frontier: Vec<(CellCoord, CellCoord)> =
        maze.neighbors(entry).map(|next| (next, entry)).collect();

    while !frontier.is_empty() {
        let pick = rng.random_range(0..frontier.len());
        let (cell, parent) = frontier.swap_remove(pick);
        if visited[cell_index(maze, cell)] {
            // Lazy deletion: already attached through another parent
            continue;
        }
        visited[cell_index(maze, cell)] = true;
        maze.carve_pair(wall_between(parent, cell), cell_to_grid(cell));

        let unvisited: Vec<_> = maze
            .neighbors(cell)
            .filter(|&next| !visited[cell_index(maze, next)])
            .collect();
        for next in unvisited {
            frontier.push((next, cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn visits_every_cell() {
        let mut maze = Maze::new(7, 7, (3, 3), None).unwrap();
        maze.reset_to_walls();
        let mut rng = StdRng::seed_from_u64(0);
        randomized_prim(&mut maze, &mut rng);
        for cy in 0..7 {
            for cx in 0..7 {
                assert!(maze.is_passage(cell_to_grid((cx, cy))));
            }
        }
    }
}
