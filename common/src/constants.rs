// Generator:
pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 30;
pub const MAX_ATTEMPTS: usize = 100; // Full re-carves before degrading to the fallback grid.
pub const FALLBACK_WALL_RATIO: f64 = 0.3; // Upper bound; repeated picks can land on the same cell.

// Layout symbols:
pub const WALL_SYMBOLS: [char; 2] = ['#', '1'];
pub const OPEN_SYMBOLS: [char; 2] = ['.', '0'];
pub const START_SYMBOL: char = 'S';
pub const GOAL_SYMBOL: char = 'G';

// Snapshot symbols:
pub const CURRENT_GLYPH: char = 'P';
pub const VISITED_GLYPH: char = 'x';
pub const OPEN_GLYPH: char = '.';
pub const WALL_GLYPH: char = '#';
