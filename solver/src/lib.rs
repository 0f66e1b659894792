pub mod config;
pub mod options;
pub mod render;
pub mod run;
