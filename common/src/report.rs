use std::fmt;

use serde::Serialize;

use crate::{
    explorer::{Exploration, Strategy, TraceEntry},
    maze::Coord,
};

/// What a finished search has to say for itself, ready to print or serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub found: bool,
    pub steps: usize,
    pub visited: usize,
    pub trace: Vec<TraceEntry>,
    pub path: Option<Vec<Coord>>,
}

impl From<&Exploration> for Report {
    fn from(exploration: &Exploration) -> Self {
        Report {
            strategy: exploration.strategy,
            found: exploration.is_found(),
            steps: exploration.steps(),
            visited: exploration.visited.len(),
            trace: exploration.trace.entries().to_vec(),
            path: exploration.path().map(<[Coord]>::to_vec),
        }
    }
}

impl Report {
    /// `1(0,0), 2(0,1), ...`
    pub fn exploration_order(&self) -> String {
        self.trace
            .iter()
            .map(|entry| format!("{}{}", entry.order, entry.position))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Exploration order: {}", self.exploration_order())?;
        writeln!(f, "Total moves: {}", self.steps)?;

        match &self.path {
            Some(path) => {
                let cells = path
                    .iter()
                    .map(Coord::to_string)
                    .collect::<Vec<String>>()
                    .join(" -> ");
                write!(f, "Path ({} cells): {}", path.len(), cells)
            }
            None => write!(f, "No path to the goal."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{explorer::explore, maze::Grid, samples};

    #[test]
    fn test_report_for_found_path() {
        let mut grid = Grid::from_layout("S.G").expect("layout should parse");
        let exploration = explore(&mut grid, Strategy::BreadthFirst);
        let report = Report::from(&exploration);

        assert!(report.found);
        assert_eq!(report.steps, 3);
        assert_eq!(report.exploration_order(), "1(0,0), 2(0,1), 3(0,2)");
        assert_eq!(
            report.to_string(),
            "Strategy: bfs\n\
             Exploration order: 1(0,0), 2(0,1), 3(0,2)\n\
             Total moves: 3\n\
             Path (3 cells): (0,0) -> (0,1) -> (0,2)"
        );
    }

    #[test]
    fn test_report_for_missing_path() {
        let mut grid = Grid::from_layout(samples::SEALED).expect("layout should parse");
        let report = Report::from(&explore(&mut grid, Strategy::DepthFirst));

        assert!(!report.found);
        assert_eq!(report.path, None);
        assert_eq!(report.visited, 6);
        assert!(report.to_string().ends_with("No path to the goal."));
    }
}
