use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use super::{Exploration, Explorer, Outcome, Strategy, Trace, TraceKind};
use crate::maze::{Coord, Grid};

/// Breadth-first search with a FIFO frontier and a parent map.
///
/// The goal test happens when a cell leaves the queue. Each newly seen cell is
/// recorded in the trace as it is enqueued, so trace entries come in
/// non-decreasing distance from the start.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    frontier: VecDeque<Coord>,
    visited: HashSet<Coord>,
    parents: HashMap<Coord, Option<Coord>>,
    trace: Trace,
    reached: Option<Coord>,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, grid: &Grid) {
        let start = grid.start();

        self.frontier.clear();
        self.visited.clear();
        self.parents.clear();
        self.trace.clear();
        self.reached = None;

        self.frontier.push_back(start);
        self.visited.insert(start);
        self.parents.insert(start, None);
        self.trace.record(start, TraceKind::Visit);
    }

    /// The cell `cell` was first reached from, `None` for the start or for
    /// cells never reached.
    pub fn parent(&self, cell: Coord) -> Option<Coord> {
        self.parents.get(&cell).copied().flatten()
    }

    /// Walks parent links back from the goal and reverses them. `None` until a
    /// search has reached the goal. Calling it again gives the same path.
    pub fn shortest_path(&self) -> Option<Vec<Coord>> {
        let goal = self.reached?;

        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(cell) = current {
            path.push(cell);
            current = self.parent(cell);
        }
        path.reverse();

        Some(path)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

impl Explorer for BreadthFirst {
    fn explore(&mut self, grid: &mut Grid) -> Exploration {
        self.begin(grid);

        while let Some(cell) = self.frontier.pop_front() {
            if grid.is_goal(cell) {
                self.reached = Some(cell);
                break;
            }

            let neighbors: Vec<Coord> = grid.neighbors(cell).collect();
            for neighbor in neighbors {
                if grid.is_wall(neighbor) || !self.visited.insert(neighbor) {
                    continue;
                }

                self.parents.insert(neighbor, Some(cell));
                self.frontier.push_back(neighbor);
                grid.set_visited(neighbor);
                let entry = self.trace.record(neighbor, TraceKind::Visit);
                trace!(
                    order = entry.order,
                    cell = %neighbor,
                    from = %cell,
                    "breadth-first enqueue"
                );
            }
        }

        let outcome = match self.shortest_path() {
            Some(path) => Outcome::Found(path),
            None => Outcome::NoPathFound,
        };

        debug!(
            found = self.reached.is_some(),
            steps = self.trace.len(),
            visited = self.visited.len(),
            "breadth-first search finished"
        );

        Exploration {
            strategy: Strategy::BreadthFirst,
            outcome,
            trace: self.trace.clone(),
            visited: self.visited.clone(),
        }
    }
}
