pub mod constants;
pub mod error;
pub mod explorer;
pub mod maze;
pub mod report;
pub mod samples;

pub use error::{ConfigError, LayoutError};
pub use explorer::{
    BreadthFirst, DepthFirst, Exploration, Explorer, Outcome, Strategy, Trace, TraceEntry,
    TraceKind, explore,
};
pub use maze::maker::{
    GeneratorConfig, Generated, GoalPlacement, MazeGenerator, MazeQuality, is_solvable,
};
pub use maze::{CellState, Coord, Direction, Grid, Snapshot};
pub use report::Report;
