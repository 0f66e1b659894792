use thiserror::Error;

use crate::maze::Coord;

/// Problems found while reading a literal maze layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at ({row},{col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("layout has no start cell")]
    MissingStart,
    #[error("layout has more than one start cell")]
    MultipleStarts,
    #[error("layout has no goal cell")]
    MissingGoal,
    #[error("layout has more than one goal cell")]
    MultipleGoals,
}

/// Rejected grid or generator settings. Nothing is constructed when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("a {width}x{height} grid has more cells than can be counted")]
    TooLarge { width: usize, height: usize },
    #[error("start and goal are both {0}")]
    StartIsGoal(Coord),
    #[error("{0} lies outside the grid")]
    OutOfBounds(Coord),
    #[error("at least one generation attempt is required")]
    NoAttempts,
    #[error("fallback wall ratio must be in [0, 1), got {0}")]
    WallRatio(f64),
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}
