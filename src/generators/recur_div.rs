use rand::{Rng, rngs::StdRng};

use crate::maze::{Maze, Orientation, wall_between};

/// Recursive division.
///
/// The interior starts fully open; each region is split by a wall line
/// pierced by a single random gap, and the two halves are queued for further
/// splitting until a region is a single row or column of cells. Inverse of
/// the carving algorithms: this is the only one that adds walls. The region
/// queue is an explicit stack so deep mazes never touch the call stack.
pub fn recursive_division(maze: &mut Maze, rng: &mut StdRng) {
    // (x, y, width, height) of regions still to divide, in cell space
    let mut regions = vec![(0u8, 0u8, maze.width(), maze.height())];

    while let Some((x, y, width, height)) = regions.pop() {
        if width < 2 || height < 2 {
            continue;
        }

        // Split across the longer axis, ties broken at random
        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        match orientation {
            Orientation::Horizontal => {
                let split = rng.random_range(0..height - 1);
                let wall_row = y + split;
                let gap = x + rng.random_range(0..width);

                maze.insert_wall_line(Orientation::Horizontal, wall_row, x, x + width - 1);
                maze.carve(wall_between((gap, wall_row), (gap, wall_row + 1)));

                regions.push((x, y, width, split + 1));
                regions.push((x, wall_row + 1, width, height - split - 1));
            }
            Orientation::Vertical => {
                let split = rng.random_range(0..width - 1);
                let wall_col = x + split;
                let gap = y + rng.random_range(0..height);

                maze.insert_wall_line(Orientation::Vertical, wall_col, y, y + height - 1);
                maze.carve(wall_between((wall_col, gap), (wall_col + 1, gap)));

                regions.push((x, y, split + 1, height));
                regions.push((wall_col + 1, y, width - split - 1, height));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::cell_to_grid;
    use rand::SeedableRng;

    #[test]
    fn divides_without_burying_cells() {
        let mut maze = Maze::new(8, 8, (0, 0), None).unwrap();
        maze.open_interior();
        let mut rng = StdRng::seed_from_u64(21);
        recursive_division(&mut maze, &mut rng);

        // Wall lines run between cell rows/columns, never over the cells
        for cy in 0..8 {
            for cx in 0..8 {
                assert!(maze.is_passage(cell_to_grid((cx, cy))));
            }
        }
        // An 8x8 field must actually have been divided
        let interior_walls = (1..maze.grid_height() - 1)
            .flat_map(|gy| (1..maze.grid_width() - 1).map(move |gx| (gx, gy)))
            .filter(|&(gx, gy)| (gx % 2 == 0) != (gy % 2 == 0))
            .filter(|&at| !maze.is_passage(at))
            .count();
        assert!(interior_walls > 0);
    }
}
