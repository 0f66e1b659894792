use std::{env, str::FromStr};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use common::{
    GoalPlacement, Strategy,
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_ATTEMPTS},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{key}={value:?} is not a valid {expected}")]
pub struct SettingsError {
    pub key: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Defaults for the command line, taken from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub goal: GoalPlacement,
    pub attempts: usize,
    pub strategies: Vec<Strategy>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            goal: GoalPlacement::OppositeCorner,
            attempts: MAX_ATTEMPTS,
            strategies: vec![Strategy::DepthFirst, Strategy::BreadthFirst],
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();

        if let Some(value) = lookup("MAZE_WIDTH") {
            settings.width = parse_number("MAZE_WIDTH", &value)?;
        }
        if let Some(value) = lookup("MAZE_HEIGHT") {
            settings.height = parse_number("MAZE_HEIGHT", &value)?;
        }
        if let Some(value) = lookup("MAZE_SEED") {
            settings.seed = Some(parse_number("MAZE_SEED", &value)?);
        }
        if let Some(value) = lookup("MAZE_ATTEMPTS") {
            settings.attempts = parse_number("MAZE_ATTEMPTS", &value)?;
        }
        if let Some(value) = lookup("MAZE_GOAL") {
            settings.goal = parse_goal(&value).ok_or_else(|| SettingsError {
                key: "MAZE_GOAL",
                value: value.clone(),
                expected: "goal placement (corner or random)",
            })?;
        }
        if let Some(value) = lookup("MAZE_STRATEGY") {
            settings.strategies = parse_strategies(&value).ok_or_else(|| SettingsError {
                key: "MAZE_STRATEGY",
                value: value.clone(),
                expected: "strategy (dfs, bfs or both)",
            })?;
        }

        Ok(settings)
    }
}

/// Log filter from `RUST_LOG`-style directives, `info` when they are absent
/// or do not parse.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError {
        key,
        value: value.to_string(),
        expected: "number",
    })
}

pub fn parse_goal(value: &str) -> Option<GoalPlacement> {
    match value.trim() {
        "corner" => Some(GoalPlacement::OppositeCorner),
        "random" => Some(GoalPlacement::Random),
        _ => None,
    }
}

pub fn parse_strategies(value: &str) -> Option<Vec<Strategy>> {
    match value.trim() {
        "both" => Some(vec![Strategy::DepthFirst, Strategy::BreadthFirst]),
        name => Strategy::from_str(name).ok().map(|strategy| vec![strategy]),
    }
}
