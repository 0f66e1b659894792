//! Literal mazes used by the demo binary and the tests.

/// The corridor maze the very first solver programs were written against.
/// Depth-first search takes the long way round the outside (14 cells);
/// breadth-first finds the 10-cell route through the middle.
pub const CORRIDOR: &str = "
S . . . . .
# . # # # .
# . # G # .
# . # . # .
# . . . . .
# # # # # .
";

/// A hook along the top edge with one dead end at (0,5). Depth-first search
/// backs out of it once and then reaches the goal in 8 cells.
pub const HOOK: &str = "
S . . . . .
. # # # . #
. # # G . #
. # # . # #
. . . . # #
# # # # # #
";

/// The goal is walled off; six cells are reachable from the start.
pub const SEALED: &str = "
S . .
. . #
. # G
";

pub const NAMES: [&str; 3] = ["corridor", "hook", "sealed"];

pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "corridor" => Some(CORRIDOR),
        "hook" => Some(HOOK),
        "sealed" => Some(SEALED),
        _ => None,
    }
}
