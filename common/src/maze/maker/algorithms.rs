pub mod frontier;
pub mod scatter;
