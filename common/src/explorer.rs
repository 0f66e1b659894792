pub mod breadth_first;
pub mod depth_first;

use std::collections::HashSet;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

pub use breadth_first::BreadthFirst;
pub use depth_first::{DepthFirst, Mode, Step};

use crate::maze::{Coord, Grid};

/// A search over a grid from its start to its goal. Explorers paint visited
/// markers onto the grid as they go and hand back everything they recorded.
pub trait Explorer {
    fn explore(&mut self, grid: &mut Grid) -> Exploration;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
pub enum Strategy {
    #[serde(rename = "dfs")]
    #[strum(to_string = "dfs", serialize = "depth-first")]
    DepthFirst,
    #[serde(rename = "bfs")]
    #[strum(to_string = "bfs", serialize = "breadth-first")]
    BreadthFirst,
}

impl Strategy {
    pub fn explorer(self) -> Box<dyn Explorer> {
        match self {
            Strategy::DepthFirst => Box::new(DepthFirst::new()),
            Strategy::BreadthFirst => Box::new(BreadthFirst::new()),
        }
    }
}

pub fn explore(grid: &mut Grid, strategy: Strategy) -> Exploration {
    strategy.explorer().explore(grid)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Visit,
    Backtrack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub order: usize,
    pub position: Coord,
    pub kind: TraceKind,
}

/// Append-only log of every cell an explorer visits or backs up through.
/// Orders run 1, 2, 3, ... and the same cell may appear more than once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, position: Coord, kind: TraceKind) -> TraceEntry {
        let entry = TraceEntry {
            order: self.entries.len() + 1,
            position,
            kind,
        };
        self.entries.push(entry);
        entry
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn backtracks(&self) -> usize {
        self.iter()
            .filter(|entry| entry.kind == TraceKind::Backtrack)
            .count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Start to goal, both included.
    Found(Vec<Coord>),
    /// Every reachable cell was explored without meeting the goal.
    NoPathFound,
}

#[derive(Clone, Debug)]
pub struct Exploration {
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub trace: Trace,
    pub visited: HashSet<Coord>,
}

impl Exploration {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Coord]> {
        match &self.outcome {
            Outcome::Found(path) => Some(path),
            Outcome::NoPathFound => None,
        }
    }

    /// Total moves, one per trace entry.
    pub fn steps(&self) -> usize {
        self.trace.len()
    }
}
