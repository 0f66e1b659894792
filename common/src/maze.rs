pub mod maker;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    constants::{
        CURRENT_GLYPH, GOAL_SYMBOL, OPEN_GLYPH, OPEN_SYMBOLS, START_SYMBOL, VISITED_GLYPH,
        WALL_GLYPH, WALL_SYMBOLS,
    },
    error::{ConfigError, LayoutError},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The adjacent coordinate in `direction`, or `None` when that would step
    /// above row 0 or left of column 0. Upper bounds are checked by
    /// [`Grid::is_within_bounds`].
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Movement directions. Declaration order is the order in which both
/// explorers try neighbours, and so decides which of several equally short
/// paths is found first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Open,
    Wall,
    Start,
    Goal,
    Visited,
}

impl CellState {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            START_SYMBOL => Some(CellState::Start),
            GOAL_SYMBOL => Some(CellState::Goal),
            s if WALL_SYMBOLS.contains(&s) => Some(CellState::Wall),
            s if OPEN_SYMBOLS.contains(&s) => Some(CellState::Open),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            CellState::Start => START_SYMBOL,
            CellState::Goal => GOAL_SYMBOL,
            CellState::Wall => WALL_GLYPH,
            CellState::Open | CellState::Visited => OPEN_GLYPH,
        }
    }
}

/// A fixed-size rectangular maze with exactly one start and one goal.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
    width: usize,
    height: usize,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// An all-open grid.
    pub fn new(
        width: usize,
        height: usize,
        start: Coord,
        goal: Coord,
    ) -> Result<Self, ConfigError> {
        Self::filled(width, height, start, goal, CellState::Open)
    }

    /// An all-wall grid, the blank canvas for carving.
    pub fn walled(
        width: usize,
        height: usize,
        start: Coord,
        goal: Coord,
    ) -> Result<Self, ConfigError> {
        Self::filled(width, height, start, goal, CellState::Wall)
    }

    fn filled(
        width: usize,
        height: usize,
        start: Coord,
        goal: Coord,
        fill: CellState,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        for pos in [start, goal] {
            if pos.row >= height || pos.col >= width {
                return Err(ConfigError::OutOfBounds(pos));
            }
        }
        if start == goal {
            return Err(ConfigError::StartIsGoal(start));
        }

        let mut cells = vec![vec![fill; width]; height];
        cells[start.row][start.col] = CellState::Start;
        cells[goal.row][goal.col] = CellState::Goal;

        Ok(Grid {
            cells,
            width,
            height,
            start,
            goal,
        })
    }

    /// Reads one row per non-blank line. Whitespace inside a line is ignored,
    /// so both `S..#` and `S . . #` are accepted.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.first().map(Vec::len).ok_or(LayoutError::Empty)?;
        let height = rows.len();

        let mut cells = Vec::with_capacity(height);
        let mut start = None;
        let mut goal = None;

        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found: symbols.len(),
                });
            }

            let mut line = Vec::with_capacity(width);
            for (col, &symbol) in symbols.iter().enumerate() {
                let state = CellState::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                match state {
                    CellState::Start if start.is_some() => return Err(LayoutError::MultipleStarts),
                    CellState::Start => start = Some(Coord::new(row, col)),
                    CellState::Goal if goal.is_some() => return Err(LayoutError::MultipleGoals),
                    CellState::Goal => goal = Some(Coord::new(row, col)),
                    _ => {}
                }
                line.push(state);
            }
            cells.push(line);
        }

        Ok(Grid {
            cells,
            width,
            height,
            start: start.ok_or(LayoutError::MissingStart)?,
            goal: goal.ok_or(LayoutError::MissingGoal)?,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn is_within_bounds(&self, pos: Coord) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Panics if `pos` is outside the grid; check [`Grid::is_within_bounds`] first.
    pub fn state(&self, pos: Coord) -> CellState {
        assert!(
            self.is_within_bounds(pos),
            "cell {} is outside the {}x{} grid",
            pos,
            self.width,
            self.height
        );
        self.cells[pos.row][pos.col]
    }

    pub fn is_wall(&self, pos: Coord) -> bool {
        self.state(pos) == CellState::Wall
    }

    /// Compares against the stored goal coordinate, so it holds whatever is
    /// painted over the cell.
    pub fn is_goal(&self, pos: Coord) -> bool {
        pos == self.goal
    }

    pub fn is_start(&self, pos: Coord) -> bool {
        pos == self.start
    }

    /// Start and goal keep their identity: writes to them are ignored.
    fn paint(&mut self, pos: Coord, state: CellState) {
        if self.is_start(pos) || self.is_goal(pos) {
            return;
        }
        assert!(
            self.is_within_bounds(pos),
            "cell {} is outside the {}x{} grid",
            pos,
            self.width,
            self.height
        );
        self.cells[pos.row][pos.col] = state;
    }

    pub fn set_wall(&mut self, pos: Coord) {
        self.paint(pos, CellState::Wall);
    }

    pub fn set_open(&mut self, pos: Coord) {
        self.paint(pos, CellState::Open);
    }

    /// Marks an open cell as visited. Walls, start and goal are left alone.
    pub fn set_visited(&mut self, pos: Coord) {
        if self.is_wall(pos) {
            return;
        }
        self.paint(pos, CellState::Visited);
    }

    /// Turns every visited marker back into an open cell.
    pub fn clear_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == CellState::Visited {
                *cell = CellState::Open;
            }
        }
    }

    pub fn neighbor(&self, pos: Coord, direction: Direction) -> Option<Coord> {
        pos.step(direction)
            .filter(|&neighbor| self.is_within_bounds(neighbor))
    }

    /// In-bounds neighbours of `pos`, east, south, west, north.
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::iter().filter_map(move |direction| self.neighbor(pos, direction))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &state)| (Coord::new(row, col), state))
        })
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&(_, s)| s == state).count()
    }

    /// Renders the grid with `current` highlighted. Per cell, the first match
    /// wins: current position, goal, wall, visited, start, open.
    pub fn snapshot(&self, current: Coord) -> Snapshot {
        let rows = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(|(col, &state)| {
                        let pos = Coord::new(row, col);
                        if pos == current {
                            CURRENT_GLYPH
                        } else if self.is_goal(pos) {
                            GOAL_SYMBOL
                        } else {
                            match state {
                                CellState::Wall => WALL_GLYPH,
                                CellState::Visited => VISITED_GLYPH,
                                CellState::Start => START_SYMBOL,
                                CellState::Open | CellState::Goal => OPEN_GLYPH,
                            }
                        }
                    })
                    .map(String::from)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect();

        Snapshot { rows }
    }

    /// The grid in layout symbols, one row per line. Visited markers are
    /// written as open cells, so the output parses back into the same maze.
    pub fn log(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&cell| cell.symbol()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_layout(s)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

/// One text line per grid row, symbols separated by single spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: Vec<String>,
}

impl Snapshot {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::from_layout(
            "
            S . #
            . # G
            . . .
            ",
        )
        .expect("layout should parse")
    }

    #[test]
    fn test_from_layout_reads_start_goal_and_walls() {
        let grid = corridor();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.goal(), Coord::new(1, 2));
        assert!(grid.is_wall(Coord::new(0, 2)));
        assert!(grid.is_wall(Coord::new(1, 1)));
        assert!(!grid.is_wall(Coord::new(2, 1)));
        assert_eq!(grid.count(CellState::Wall), 2);
        assert_eq!(grid.count(CellState::Open), 5);
    }

    #[test]
    fn test_from_layout_accepts_numeric_symbols() {
        let grid = Grid::from_layout("S01\n00G").expect("layout should parse");
        assert!(grid.is_wall(Coord::new(0, 2)));
        assert_eq!(grid.goal(), Coord::new(1, 2));
    }

    #[test]
    fn test_from_layout_rejects_malformed_layouts() {
        assert_eq!(Grid::from_layout("  \n "), Err(LayoutError::Empty));
        assert_eq!(
            Grid::from_layout("S..\n.G"),
            Err(LayoutError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_layout("S.?\n..G"),
            Err(LayoutError::UnknownSymbol {
                row: 0,
                col: 2,
                symbol: '?'
            })
        );
        assert_eq!(Grid::from_layout("...\n..G"), Err(LayoutError::MissingStart));
        assert_eq!(Grid::from_layout("S.S\n..G"), Err(LayoutError::MultipleStarts));
        assert_eq!(Grid::from_layout("S..\n..."), Err(LayoutError::MissingGoal));
        assert_eq!(Grid::from_layout("S.G\n..G"), Err(LayoutError::MultipleGoals));
    }

    #[test]
    fn test_new_rejects_bad_configuration() {
        let origin = Coord::new(0, 0);
        assert_eq!(
            Grid::new(0, 3, origin, Coord::new(1, 1)),
            Err(ConfigError::ZeroDimension {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Grid::new(3, 3, origin, origin),
            Err(ConfigError::StartIsGoal(origin))
        );
        assert_eq!(
            Grid::new(3, 3, origin, Coord::new(3, 0)),
            Err(ConfigError::OutOfBounds(Coord::new(3, 0)))
        );
    }

    #[test]
    fn test_bounds_and_neighbors() {
        let grid = corridor();

        assert!(grid.is_within_bounds(Coord::new(2, 2)));
        assert!(!grid.is_within_bounds(Coord::new(3, 0)));
        assert!(!grid.is_within_bounds(Coord::new(0, 3)));

        let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);

        let middle: Vec<Coord> = grid.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(
            middle,
            vec![
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(0, 1)
            ]
        );
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_state_panics_out_of_bounds() {
        corridor().is_wall(Coord::new(0, 5));
    }

    #[test]
    fn test_set_visited_keeps_start_goal_and_walls() {
        let mut grid = corridor();

        grid.set_visited(Coord::new(0, 0));
        grid.set_visited(Coord::new(1, 2));
        grid.set_visited(Coord::new(1, 1));
        grid.set_visited(Coord::new(2, 2));
        grid.set_visited(Coord::new(2, 2));

        assert_eq!(grid.state(Coord::new(0, 0)), CellState::Start);
        assert_eq!(grid.state(Coord::new(1, 2)), CellState::Goal);
        assert_eq!(grid.state(Coord::new(1, 1)), CellState::Wall);
        assert_eq!(grid.state(Coord::new(2, 2)), CellState::Visited);
        assert!(grid.is_goal(Coord::new(1, 2)));

        grid.clear_visited();
        assert_eq!(grid.count(CellState::Visited), 0);
        assert_eq!(grid, corridor());
    }

    #[test]
    fn test_snapshot_precedence() {
        let mut grid = corridor();
        grid.set_visited(Coord::new(1, 0));
        grid.set_visited(Coord::new(2, 0));

        let snapshot = grid.snapshot(Coord::new(2, 0));
        assert_eq!(snapshot.rows(), ["S . #", "x # G", "P . ."]);

        // The current position hides whatever is underneath, even the goal.
        let on_goal = grid.snapshot(Coord::new(1, 2));
        assert_eq!(on_goal.to_string(), "S . #\nx # P\nx . .");
    }

    #[test]
    fn test_log_round_trips_through_layout() {
        let mut grid = corridor();
        grid.set_visited(Coord::new(2, 1));

        assert_eq!(grid.log(), "S.#\n.#G\n...");
        let reparsed: Grid = grid.log().parse().expect("log output should parse");
        grid.clear_visited();
        assert_eq!(reparsed, grid);
    }
}
