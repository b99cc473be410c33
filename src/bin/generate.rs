use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_maze::codec::write_maze_file;
use rusty_maze::config::{init_logger, GenerateArgs, GenerateConfig};
use rusty_maze::generator::generate_maze;
use rusty_maze::render::render_ascii;
use rusty_maze::MazeError;

fn run(config: &GenerateConfig) -> Result<(), MazeError> {
    let grid = match config.seed {
        Some(seed) => generate_maze(config.dimensions, &mut StdRng::seed_from_u64(seed)),
        None => generate_maze(config.dimensions, &mut rand::rng()),
    };
    write_maze_file(&config.output_file, &grid)?;
    info!(
        "{}x{} maze written to {}",
        grid.rows(),
        grid.columns(),
        config.output_file.display()
    );

    if config.print {
        print!("{}", render_ascii(&grid, None));
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let args = GenerateArgs::parse();

    let result = GenerateConfig::try_from(args)
        .map_err(MazeError::from)
        .and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
