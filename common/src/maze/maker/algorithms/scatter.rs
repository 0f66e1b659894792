use rand::Rng;

use super::super::{Coord, MazeGenerator};

/// Drops walls at random positions over an open grid. Picks may repeat and
/// start/goal are skipped, so the final density is at most the configured
/// ratio. Nothing guarantees the goal stays reachable.
pub trait Scatter {
    fn scatter_walls(&mut self);
}

impl Scatter for MazeGenerator {
    fn scatter_walls(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        let count = ((width * height) as f64 * self.config.fallback_wall_ratio) as usize;

        for _ in 0..count {
            let cell = Coord::new(
                self.rng.random_range(0..height),
                self.rng.random_range(0..width),
            );
            self.grid.set_wall(cell);
        }
    }
}
