use std::collections::HashSet;

use tracing::{debug, trace};

use super::{Exploration, Explorer, Outcome, Strategy, Trace, TraceKind};
use crate::maze::{Coord, Grid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Advancing,
    Backtracking,
}

/// One transition of the depth-first state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Pushed a fresh neighbour.
    Advanced(Coord),
    /// No usable neighbour around this cell; the next step backs up.
    DeadEnd(Coord),
    /// Popped the stack; the payload is the new top.
    Backtracked(Coord),
    /// Pushed the goal. The stack is now the path.
    Reached(Coord),
    /// Popped the last cell without meeting the goal.
    Exhausted,
}

impl Step {
    pub fn is_terminal(self) -> bool {
        matches!(self, Step::Reached(_) | Step::Exhausted)
    }
}

/// Depth-first search with an explicit stack instead of recursion.
///
/// Neighbours are tried east, south, west, north. Every advance and every
/// backtrack lands in the trace, so a dead end shows up as the same cell
/// recorded twice.
#[derive(Debug, Default)]
pub struct DepthFirst {
    stack: Vec<Coord>,
    visited: HashSet<Coord>,
    trace: Trace,
    mode: Mode,
    finished: Option<Step>,
}

impl DepthFirst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any earlier run and stands on the start cell.
    pub fn begin(&mut self, grid: &Grid) {
        let start = grid.start();

        self.stack.clear();
        self.visited.clear();
        self.trace.clear();
        self.mode = Mode::Advancing;
        self.finished = None;

        self.stack.push(start);
        self.visited.insert(start);
        self.trace.record(start, TraceKind::Visit);
    }

    /// Performs one transition. Once a terminal step has been returned, every
    /// further call returns it again.
    pub fn step(&mut self, grid: &mut Grid) -> Step {
        if let Some(step) = self.finished {
            return step;
        }

        let step = match self.mode {
            Mode::Advancing => self.advance(grid),
            Mode::Backtracking => self.backtrack(),
        };
        trace!(?step, depth = self.stack.len(), "depth-first step");

        if step.is_terminal() {
            self.finished = Some(step);
        }
        step
    }

    fn advance(&mut self, grid: &mut Grid) -> Step {
        let Some(&top) = self.stack.last() else {
            return Step::Exhausted;
        };

        let next = grid
            .neighbors(top)
            .find(|&neighbor| !grid.is_wall(neighbor) && !self.visited.contains(&neighbor));

        let Some(next) = next else {
            self.mode = Mode::Backtracking;
            return Step::DeadEnd(top);
        };

        self.visited.insert(next);
        self.stack.push(next);
        grid.set_visited(next);
        self.trace.record(next, TraceKind::Visit);

        if grid.is_goal(next) {
            Step::Reached(next)
        } else {
            Step::Advanced(next)
        }
    }

    fn backtrack(&mut self) -> Step {
        self.stack.pop();

        match self.stack.last() {
            Some(&top) => {
                self.trace.record(top, TraceKind::Backtrack);
                self.mode = Mode::Advancing;
                Step::Backtracked(top)
            }
            None => Step::Exhausted,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Bottom is the start, top is the current cell.
    pub fn stack(&self) -> &[Coord] {
        &self.stack
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn visited(&self) -> &HashSet<Coord> {
        &self.visited
    }
}

impl Explorer for DepthFirst {
    fn explore(&mut self, grid: &mut Grid) -> Exploration {
        self.begin(grid);

        let outcome = loop {
            match self.step(grid) {
                Step::Reached(_) => {
                    debug_assert_eq!(self.stack.first(), Some(&grid.start()));
                    break Outcome::Found(self.stack.clone());
                }
                Step::Exhausted => break Outcome::NoPathFound,
                _ => {}
            }
        };

        debug!(
            found = matches!(outcome, Outcome::Found(_)),
            steps = self.trace.len(),
            backtracks = self.trace.backtracks(),
            visited = self.visited.len(),
            "depth-first search finished"
        );

        Exploration {
            strategy: Strategy::DepthFirst,
            outcome,
            trace: self.trace.clone(),
            visited: self.visited.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::CellState, samples};

    fn grid(layout: &str) -> Grid {
        Grid::from_layout(layout).expect("sample layout should parse")
    }

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_hook_backs_out_of_dead_end() {
        let mut grid = grid(samples::HOOK);
        let exploration = DepthFirst::new().explore(&mut grid);

        let expected_path = vec![
            c(0, 0),
            c(0, 1),
            c(0, 2),
            c(0, 3),
            c(0, 4),
            c(1, 4),
            c(2, 4),
            c(2, 3),
        ];
        assert_eq!(exploration.outcome, Outcome::Found(expected_path));

        let positions: Vec<Coord> = exploration.trace.iter().map(|e| e.position).collect();
        assert_eq!(
            positions,
            vec![
                c(0, 0),
                c(0, 1),
                c(0, 2),
                c(0, 3),
                c(0, 4),
                c(0, 5),
                c(0, 4),
                c(1, 4),
                c(2, 4),
                c(2, 3),
            ]
        );
        assert_eq!(exploration.trace.entries()[6].kind, TraceKind::Backtrack);
        assert_eq!(exploration.trace.backtracks(), 1);
        assert_eq!(exploration.visited.len(), 9);
    }

    #[test]
    fn test_corridor_takes_the_long_way() {
        let mut grid = grid(samples::CORRIDOR);
        let exploration = DepthFirst::new().explore(&mut grid);

        let path = exploration.path().expect("corridor is solvable");
        assert_eq!(path.len(), 14);
        assert_eq!(path.first(), Some(&c(0, 0)));
        assert_eq!(path.last(), Some(&c(2, 3)));
        assert_eq!(exploration.steps(), 26);
        assert_eq!(exploration.trace.backtracks(), 6);
    }

    #[test]
    fn test_sealed_goal_exhausts_reachable_cells() {
        let mut grid = grid(samples::SEALED);
        let exploration = DepthFirst::new().explore(&mut grid);

        assert_eq!(exploration.outcome, Outcome::NoPathFound);
        assert_eq!(exploration.visited.len(), 6);
        assert_eq!(exploration.steps(), 11);
        assert_eq!(exploration.trace.last().map(|e| e.position), Some(c(0, 0)));
        assert!(!exploration.visited.contains(&c(2, 2)));
    }

    #[test]
    fn test_step_walks_the_state_machine() {
        let mut grid = grid(samples::HOOK);
        let mut dfs = DepthFirst::new();
        dfs.begin(&grid);

        assert_eq!(dfs.mode(), Mode::Advancing);
        assert_eq!(dfs.stack(), [c(0, 0)]);

        for col in 1..=5 {
            assert_eq!(dfs.step(&mut grid), Step::Advanced(c(0, col)));
        }
        assert_eq!(dfs.step(&mut grid), Step::DeadEnd(c(0, 5)));
        assert_eq!(dfs.mode(), Mode::Backtracking);

        assert_eq!(dfs.step(&mut grid), Step::Backtracked(c(0, 4)));
        assert_eq!(dfs.mode(), Mode::Advancing);
        assert_eq!(dfs.stack().len(), 5);

        assert_eq!(dfs.step(&mut grid), Step::Advanced(c(1, 4)));
        assert_eq!(dfs.step(&mut grid), Step::Advanced(c(2, 4)));
        assert_eq!(dfs.step(&mut grid), Step::Reached(c(2, 3)));

        // Terminal steps repeat without touching the trace.
        let recorded = dfs.trace().len();
        assert_eq!(dfs.step(&mut grid), Step::Reached(c(2, 3)));
        assert_eq!(dfs.trace().len(), recorded);
    }

    #[test]
    fn test_explore_paints_visited_cells() {
        let mut grid = grid(samples::HOOK);
        DepthFirst::new().explore(&mut grid);

        assert_eq!(grid.state(c(0, 5)), CellState::Visited);
        assert_eq!(grid.state(c(2, 4)), CellState::Visited);
        assert_eq!(grid.state(c(0, 0)), CellState::Start);
        assert_eq!(grid.state(c(2, 3)), CellState::Goal);
        assert_eq!(grid.state(c(4, 0)), CellState::Open);
    }

    #[test]
    fn test_explorer_is_reusable() {
        let mut dfs = DepthFirst::new();
        let mut sealed = grid(samples::SEALED);
        let mut hook = grid(samples::HOOK);

        assert!(!dfs.explore(&mut sealed).is_found());
        let exploration = dfs.explore(&mut hook);

        assert!(exploration.is_found());
        assert_eq!(exploration.trace.entries()[0].order, 1);
        assert_eq!(exploration.steps(), 10);
    }
}
