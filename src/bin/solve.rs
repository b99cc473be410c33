use std::process::ExitCode;

use clap::Parser;
use log::info;

use rusty_maze::codec::read_maze_file;
use rusty_maze::config::{init_logger, SolveArgs, SolveConfig};
use rusty_maze::render::render_ascii;
use rusty_maze::trace::write_trace_file;
use rusty_maze::{solve, MazeError, SolveOutcome};

fn run(config: &SolveConfig) -> Result<SolveOutcome, MazeError> {
    let mut grid = read_maze_file(&config.maze_file, config.dimensions)?;
    let outcome = solve(&mut grid, config.start, config.goal, config.mode)?;
    write_trace_file(&config.output_file, &outcome, config.format)?;
    info!(
        "{} trace with {} rooms written to {}",
        outcome.mode(),
        outcome.path().len(),
        config.output_file.display()
    );

    if config.print {
        print!("{}", render_ascii(&grid, Some(outcome.path())));
    }
    Ok(outcome)
}

fn main() -> ExitCode {
    init_logger();
    let args = SolveArgs::parse();

    let config = match SolveConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(SolveOutcome::NotFound { explored, .. }) => {
            eprintln!(
                "No path found from {:?} to {:?} ({} rooms explored)",
                config.start, config.goal, explored
            );
            ExitCode::SUCCESS
        }
        Ok(SolveOutcome::Found(_)) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
