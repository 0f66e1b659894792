use strum::IntoEnumIterator;

use super::super::{Coord, MazeGenerator};
use crate::maze::Direction;

/// Randomized frontier-wall carving (Prim-style, cell-adjacent variant).
///
/// The frontier holds walls next to carved cells. A picked wall is carved
/// only if exactly one of its neighbours is already carved, so every carve
/// adds one edge to a tree rooted at the start.
pub trait Frontier {
    fn frontier_carve(&mut self);
}

impl Frontier for MazeGenerator {
    fn frontier_carve(&mut self) {
        let start = self.grid.start();
        add_walls(self, start);

        while let Some(wall) = self.pick_out_wall() {
            // Duplicates stay in the frontier; a later copy may find the cell carved.
            if !self.grid.is_wall(wall) {
                continue;
            }

            if count_carved_neighbors(self, wall) == 1 {
                self.carve(wall);
                add_walls(self, wall);
            }
        }
    }
}

fn count_carved_neighbors(maze: &MazeGenerator, cell: Coord) -> usize {
    maze.grid
        .neighbors(cell)
        .filter(|&neighbor| maze.is_carved(neighbor))
        .count()
}

// A wall qualifies unless the cell beyond it, in the same direction, is
// already carved. Beyond the edge counts as uncarved, otherwise the last row
// and column could never be reached.
fn add_walls(maze: &mut MazeGenerator, cell: Coord) {
    for direction in Direction::iter() {
        let Some(wall) = maze.grid.neighbor(cell, direction) else {
            continue;
        };
        if !maze.grid.is_wall(wall) {
            continue;
        }

        let beyond = maze.grid.neighbor(wall, direction);
        if beyond.is_some_and(|beyond| maze.is_carved(beyond)) {
            continue;
        }

        maze.frontier.push(wall);
    }
}
