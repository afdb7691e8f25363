use rand::{Rng, rngs::StdRng};

use super::cell_index;
use crate::maze::{CellCoord, Maze, cell_to_grid, grid_to_cell, wall_between};

/// Hunt-and-kill.
///
/// Random walk ("kill") from the current cell until it is boxed in, then
/// scan all cells in fixed row-major order ("hunt") for the first unvisited
/// cell bordering the carved region and continue from there. The fixed hunt
/// order gives the maze a directional grain that plain backtracking lacks.
pub fn hunt_and_kill(maze: &mut Maze, rng: &mut StdRng) {
    let mut visited = vec![false; maze.width() as usize * maze.height() as usize];

    let entry = grid_to_cell(maze.start());
    visited[cell_index(maze, entry)] = true;
    maze.carve(cell_to_grid(entry));

    let mut current = entry;
    loop {
        let unvisited: Vec<_> = maze
            .neighbors(current)
            .filter(|&next| !visited[cell_index(maze, next)])
            .collect();

        let (cell, carved_neighbor) = if unvisited.is_empty() {
            match hunt(maze, &visited) {
                Some(found) => {
                    tracing::trace!("hunt phase resumed at {:?}", found.0);
                    found
                }
                None => break,
            }
        } else {
            (unvisited[rng.random_range(0..unvisited.len())], current)
        };

        maze.carve(wall_between(carved_neighbor, cell));
        maze.carve(cell_to_grid(cell));
        visited[cell_index(maze, cell)] = true;
        current = cell;
    }
}

/// First unvisited cell in row-major order that touches the carved region,
/// together with its first visited neighbor.
fn hunt(maze: &Maze, visited: &[bool]) -> Option<(CellCoord, CellCoord)> {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if visited[cell_index(maze, (x, y))] {
                continue;
            }
            if let Some(neighbor) = maze
                .neighbors((x, y))
                .find(|&next| visited[cell_index(maze, next)])
            {
                return Some(((x, y), neighbor));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn visits_every_cell() {
        let mut maze = Maze::new(6, 4, (0, 0), None).unwrap();
        maze.reset_to_walls();
        let mut rng = StdRng::seed_from_u64(3);
        hunt_and_kill(&mut maze, &mut rng);
        for cy in 0..4 {
            for cx in 0..6 {
                assert!(maze.is_passage(cell_to_grid((cx, cy))));
            }
        }
    }

    #[test]
    fn hunt_scans_row_major() {
        let mut maze = Maze::new(3, 3, (0, 0), None).unwrap();
        maze.reset_to_walls();
        // Only the center cell is visited; the first candidate in row-major
        // order is (1, 0), the cell directly above it.
        let mut visited = vec![false; 9];
        visited[cell_index(&maze, (1, 1))] = true;
        maze.carve(cell_to_grid((1, 1)));
        assert_eq!(hunt(&maze, &visited), Some(((1, 0), (1, 1))));
    }
}
