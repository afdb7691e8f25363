use rand::{rngs::StdRng, seq::SliceRandom};

use super::cell_index;
use crate::maze::{CellCoord, Maze, cell_to_grid, wall_between};

struct UnionFind {
    parent: Vec<u16>,
    rank: Vec<u16>,
}

impl UnionFind {
    fn new(size: u16) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size as usize],
        }
    }

    fn find(&mut self, x: u16) -> u16 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn unite(&mut self, x: u16, y: u16) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x as usize].cmp(&self.rank[root_y as usize]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y as usize] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x as usize] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y as usize] = root_x;
                self.rank[root_x as usize] += 1;
            }
        }
        true
    }
}

/// Randomized Kruskal's algorithm.
///
/// Every cell starts carved; all candidate walls (cell-to-east and
/// cell-to-south) are shuffled and removed one by one iff they join two
/// cells that are not yet connected, tracked by a union-find over the cells.
pub fn randomized_kruskal(maze: &mut Maze, rng: &mut StdRng) {
    let width = maze.width();
    let height = maze.height();

    for y in 0..height {
        for x in 0..width {
            maze.carve(cell_to_grid((x, y)));
        }
    }

    let total_cells = width as u16 * height as u16;
    let mut sets = UnionFind::new(total_cells);

    // Candidate edges between horizontally and vertically adjacent cells
    let mut edges: Vec<(CellCoord, CellCoord)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then_some(((x, y), (x + 1, y))),
                (y + 1 < height).then_some(((x, y), (x, y + 1))),
            ]
        })
        .flatten()
        .collect();
    edges.shuffle(rng);

    for (a, b) in edges {
        let set_a = cell_index(maze, a) as u16;
        let set_b = cell_index(maze, b) as u16;
        if sets.unite(set_a, set_b) {
            maze.carve(wall_between(a, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn union_find_merges_once() {
        let mut sets = UnionFind::new(4);
        assert!(sets.unite(0, 1));
        assert!(sets.unite(2, 3));
        assert!(sets.unite(1, 2));
        // Everything is one component now
        assert!(!sets.unite(0, 3));
        assert_eq!(sets.find(0), sets.find(3));
    }

    #[test]
    fn carves_every_cell() {
        let mut maze = Maze::new(5, 5, (0, 0), None).unwrap();
        maze.reset_to_walls();
        let mut rng = StdRng::seed_from_u64(0);
        randomized_kruskal(&mut maze, &mut rng);
        for cy in 0..5 {
            for cx in 0..5 {
                assert!(maze.is_passage(cell_to_grid((cx, cy))));
            }
        }
    }
}
