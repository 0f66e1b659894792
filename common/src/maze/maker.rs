pub mod algorithms;

use std::collections::{HashSet, VecDeque};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use algorithms::{frontier::Frontier, scatter::Scatter};

use super::{CellState, Coord, Grid};
use crate::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FALLBACK_WALL_RATIO, MAX_ATTEMPTS},
    error::ConfigError,
};

/// Generated mazes always start in the top-left corner.
pub const START: Coord = Coord::new(0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalPlacement {
    OppositeCorner, // Bottom-right cell.
    Random,         // Any cell but the start, redrawn on every attempt.
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub goal: GoalPlacement,
    pub max_attempts: usize,
    pub fallback_wall_ratio: f64,
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        GeneratorConfig {
            width,
            height,
            goal: GoalPlacement::OppositeCorner,
            max_attempts: MAX_ATTEMPTS,
            fallback_wall_ratio: FALLBACK_WALL_RATIO,
        }
    }

    pub fn with_goal(mut self, goal: GoalPlacement) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_fallback_wall_ratio(mut self, ratio: f64) -> Self {
        self.fallback_wall_ratio = ratio;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let cells = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            })?;
        // A single cell leaves nowhere for the goal but the start.
        if cells < 2 {
            return Err(ConfigError::StartIsGoal(START));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if !(0.0..1.0).contains(&self.fallback_wall_ratio) {
            return Err(ConfigError::WallRatio(self.fallback_wall_ratio));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeQuality {
    /// Carved, and the goal was confirmed reachable.
    Verified,
    /// Every carve failed the reachability check; the grid is random walls
    /// over open floor. `solvable` is the result of checking it anyway.
    Fallback { solvable: bool },
}

#[derive(Clone, Debug)]
pub struct Generated {
    pub grid: Grid,
    pub attempts: usize,
    pub quality: MazeQuality,
}

impl Generated {
    pub fn is_verified(&self) -> bool {
        self.quality == MazeQuality::Verified
    }
}

pub struct MazeGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    grid: Grid,
    frontier: Vec<Coord>,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Same seed and configuration, same sequence of mazes.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let goal = Coord::new(config.height - 1, config.width - 1);
        let grid = Grid::walled(config.width, config.height, START, goal)?;

        Ok(MazeGenerator {
            config,
            rng: StdRng::seed_from_u64(seed),
            grid,
            frontier: Vec::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Carves until the goal is reachable or the attempts run out, then
    /// degrades to [`MazeQuality::Fallback`].
    pub fn generate(&mut self) -> Generated {
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            self.reset(CellState::Wall);
            self.frontier_carve();

            if is_solvable(&self.grid) {
                info!(
                    attempt,
                    width = self.config.width,
                    height = self.config.height,
                    goal = %self.grid.goal(),
                    "generated a solvable maze"
                );
                return Generated {
                    grid: self.grid.clone(),
                    attempts: attempt,
                    quality: MazeQuality::Verified,
                };
            }

            debug!(attempt, goal = %self.grid.goal(), "goal unreachable, carving again");
        }

        warn!(
            attempts = max_attempts,
            "no solvable maze found; falling back to scattered walls"
        );
        self.fallback(max_attempts)
    }

    fn fallback(&mut self, attempts: usize) -> Generated {
        self.reset(CellState::Open);
        self.scatter_walls();

        let solvable = is_solvable(&self.grid);
        if !solvable {
            warn!(goal = %self.grid.goal(), "fallback maze has no path to the goal");
        }

        Generated {
            grid: self.grid.clone(),
            attempts,
            quality: MazeQuality::Fallback { solvable },
        }
    }

    /// Throws away the previous attempt: fresh grid, fresh goal, empty frontier.
    fn reset(&mut self, fill: CellState) {
        let goal = self.pick_goal();
        let (width, height) = (self.config.width, self.config.height);
        let grid = match fill {
            CellState::Wall => Grid::walled(width, height, START, goal),
            _ => Grid::new(width, height, START, goal),
        };
        self.grid = grid.expect("validated configuration should always build a grid");
        self.frontier.clear();
    }

    fn pick_goal(&mut self) -> Coord {
        let (width, height) = (self.config.width, self.config.height);
        match self.config.goal {
            GoalPlacement::OppositeCorner => Coord::new(height - 1, width - 1),
            GoalPlacement::Random => loop {
                let goal = Coord::new(
                    self.rng.random_range(0..height),
                    self.rng.random_range(0..width),
                );
                if goal != START {
                    break goal;
                }
            },
        }
    }

    fn is_carved(&self, cell: Coord) -> bool {
        matches!(self.grid.state(cell), CellState::Open | CellState::Start)
    }

    fn carve(&mut self, cell: Coord) {
        self.grid.set_open(cell);
    }

    fn pick_out_wall(&mut self) -> Option<Coord> {
        if self.frontier.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..self.frontier.len());
        Some(self.frontier.swap_remove(i))
    }
}

/// Breadth-first flood fill from the start over non-wall cells.
pub fn is_solvable(grid: &Grid) -> bool {
    let mut visited = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([grid.start()]);

    while let Some(cell) = queue.pop_front() {
        if grid.is_goal(cell) {
            return true;
        }
        for neighbor in grid.neighbors(cell) {
            if !grid.is_wall(neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    false
}
