//! Command-line parsing. Flags override the environment-derived [`Settings`].

use std::time::Duration;

use clap::{Arg, ArgAction, Command, value_parser};

use common::{GeneratorConfig, GoalPlacement, Strategy, samples};

use crate::config::{Settings, parse_goal, parse_strategies};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Sample(&'static str),
    Generate {
        config: GeneratorConfig,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source: Source,
    pub strategies: Vec<Strategy>,
    pub replay: Option<Duration>,
    pub json: bool,
}

fn sample_name(value: &str) -> Result<&'static str, String> {
    samples::NAMES
        .into_iter()
        .find(|&name| name == value)
        .ok_or_else(|| format!("expected one of: {}", samples::NAMES.join(", ")))
}

fn goal_placement(value: &str) -> Result<GoalPlacement, String> {
    parse_goal(value).ok_or_else(|| "expected corner or random".to_string())
}

fn strategy_list(value: &str) -> Result<Vec<Strategy>, String> {
    parse_strategies(value).ok_or_else(|| "expected dfs, bfs or both".to_string())
}

fn make_options_parser() -> Command {
    Command::new("maze-solver")
        .no_binary_name(true)
        .about("Generates a maze and solves it with depth-first and breadth-first search")
        .arg(
            Arg::new("sample")
                .long("sample")
                .value_name("NAME")
                .help("Solve a built-in maze instead of generating one (corridor, hook, sealed)")
                .value_parser(sample_name),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for reproducible generation")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("goal")
                .long("goal")
                .value_name("PLACEMENT")
                .help("Where generated mazes put the goal (corner, random)")
                .value_parser(goal_placement),
        )
        .arg(
            Arg::new("attempts")
                .long("attempts")
                .help("Carving attempts before falling back to scattered walls")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("dfs, bfs or both")
                .value_parser(strategy_list),
        )
        .arg(
            Arg::new("replay")
                .long("replay")
                .help("Redraw the maze after every step of the search")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("delay")
                .long("delay")
                .value_name("MS")
                .help("Pause between replay frames")
                .default_value("150")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print reports as JSON")
                .action(ArgAction::SetTrue),
        )
}

impl Options {
    pub fn parse_from_args(flags: &[String], settings: &Settings) -> Result<Self, clap::Error> {
        let matches = make_options_parser().try_get_matches_from(flags.iter())?;

        let source = match matches.get_one::<&'static str>("sample") {
            Some(&name) => Source::Sample(name),
            None => {
                let width = matches
                    .get_one::<usize>("width")
                    .copied()
                    .unwrap_or(settings.width);
                let height = matches
                    .get_one::<usize>("height")
                    .copied()
                    .unwrap_or(settings.height);
                let goal = matches
                    .get_one::<GoalPlacement>("goal")
                    .copied()
                    .unwrap_or(settings.goal);
                let attempts = matches
                    .get_one::<usize>("attempts")
                    .copied()
                    .unwrap_or(settings.attempts);

                Source::Generate {
                    config: GeneratorConfig::new(width, height)
                        .with_goal(goal)
                        .with_max_attempts(attempts),
                    seed: matches.get_one::<u64>("seed").copied().or(settings.seed),
                }
            }
        };

        let strategies = matches
            .get_one::<Vec<Strategy>>("strategy")
            .cloned()
            .unwrap_or_else(|| settings.strategies.clone());

        let replay = matches.get_flag("replay").then(|| {
            Duration::from_millis(matches.get_one::<u64>("delay").copied().unwrap_or(150))
        });

        Ok(Options {
            source,
            strategies,
            replay,
            json: matches.get_flag("json"),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let settings = Settings {
            width: 9,
            seed: Some(4),
            ..Settings::default()
        };
        let options = Options::parse_from_args(&[], &settings).expect("no flags is valid");

        assert_eq!(
            options.source,
            Source::Generate {
                config: GeneratorConfig::new(9, 30),
                seed: Some(4),
            }
        );
        assert_eq!(options.strategies, settings.strategies);
        assert_eq!(options.replay, None);
        assert!(!options.json);
    }

    #[test]
    fn test_flags_override_settings() {
        let options = Options::parse_from_args(
            &args(
                "--width 7 --height 5 --seed 42 --goal random --attempts 3 \
                 -s bfs --replay --delay 20 --json",
            ),
            &Settings::default(),
        )
        .expect("flags are valid");

        assert_eq!(
            options.source,
            Source::Generate {
                config: GeneratorConfig::new(7, 5)
                    .with_goal(GoalPlacement::Random)
                    .with_max_attempts(3),
                seed: Some(42),
            }
        );
        assert_eq!(options.strategies, vec![Strategy::BreadthFirst]);
        assert_eq!(options.replay, Some(Duration::from_millis(20)));
        assert!(options.json);
    }

    #[test]
    fn test_sample_selects_literal_maze() {
        let options = Options::parse_from_args(&args("--sample hook -s dfs"), &Settings::default())
            .expect("flags are valid");

        assert_eq!(options.source, Source::Sample("hook"));
        assert_eq!(options.strategies, vec![Strategy::DepthFirst]);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let settings = Settings::default();

        for line in ["--sample spiral", "--goal centre", "-s astar", "--width many"] {
            let error = Options::parse_from_args(&args(line), &settings)
                .expect_err("value should be rejected");
            assert_eq!(error.kind(), ErrorKind::ValueValidation, "{line}");
        }
    }

    #[test]
    fn test_both_runs_depth_first_then_breadth_first() {
        let options = Options::parse_from_args(&args("--strategy both"), &Settings::default())
            .expect("flags are valid");

        assert_eq!(
            options.strategies,
            vec![Strategy::DepthFirst, Strategy::BreadthFirst]
        );
    }
}
