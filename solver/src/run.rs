use std::{error::Error, io::stdout};

use tracing::{info, warn};

use common::{Grid, MazeGenerator, MazeQuality, Report, explore, samples};

use crate::{
    options::{Options, Source},
    render,
};

/// Builds the maze the options ask for: a named sample, or a freshly
/// generated one.
pub fn load_grid(source: &Source) -> Result<Grid, Box<dyn Error>> {
    match source {
        Source::Sample(name) => {
            let layout = samples::by_name(name).ok_or(format!("no sample named '{name}'"))?;
            Ok(Grid::from_layout(layout)?)
        }
        Source::Generate { config, seed } => {
            let mut generator = match seed {
                Some(seed) => MazeGenerator::with_seed(config.clone(), *seed)?,
                None => MazeGenerator::new(config.clone())?,
            };
            let generated = generator.generate();

            match generated.quality {
                MazeQuality::Verified => {
                    info!(attempts = generated.attempts, "maze ready")
                }
                MazeQuality::Fallback { solvable } => warn!(
                    attempts = generated.attempts,
                    solvable, "using a scattered-wall maze"
                ),
            }
            Ok(generated.grid)
        }
    }
}

/// Solves `grid` once per requested strategy, each on its own clean copy.
pub fn solve(grid: &Grid, options: &Options) -> Result<Vec<Report>, Box<dyn Error>> {
    let mut reports = Vec::with_capacity(options.strategies.len());

    for &strategy in &options.strategies {
        let mut working = grid.clone();
        let exploration = explore(&mut working, strategy);

        if let Some(delay) = options.replay {
            render::replay(&mut stdout(), grid, &exploration.trace, delay)?;
        }

        reports.push(Report::from(&exploration));
    }

    Ok(reports)
}

pub fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let grid = load_grid(&options.source)?;
    let reports = solve(&grid, options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("{grid}\n");
    for report in &reports {
        println!("{report}\n");
    }

    Ok(())
}
