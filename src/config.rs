//! Options de la ligne de commande.
//! Arguments des deux programmes et configurations validées qui en découlent.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::grid::{Coord, Dimensions};
use crate::solver::TraceMode;
use crate::trace::TraceFormat;

/// Variable d'environnement qui règle le niveau de log (`MAZE_LOG=debug`).
pub const LOG_ENV: &str = "MAZE_LOG";
/// Variable d'environnement qui règle la couleur des logs.
pub const LOG_STYLE_ENV: &str = "MAZE_LOG_STYLE";

/// Initialise `env_logger` depuis `MAZE_LOG`, niveau `warn` par défaut.
pub fn init_logger() {
    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, "warn")
        .write_style(LOG_STYLE_ENV);
    // échoue seulement si un logger est déjà installé : on garde celui-là
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Generates a maze and writes it in hexadecimal form
#[derive(Parser, Debug)]
#[command(name = "generate", version, about, long_about = None)]
pub struct GenerateArgs {
    /// Output maze file
    pub output_file: PathBuf,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Random seed, for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,
    /// Also print the maze as ASCII art on stdout
    #[arg(long)]
    pub print: bool,
}

/// Solves a maze with a depth first search
#[derive(Parser, Debug)]
#[command(name = "solve", version, about, long_about = None)]
pub struct SolveArgs {
    /// Input maze file
    pub maze_file: PathBuf,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Output solution file
    pub output_file: PathBuf,
    /// Starting row (from 0)
    #[arg(allow_negative_numbers = true)]
    pub start_row: i64,
    /// Starting column (from 0)
    #[arg(allow_negative_numbers = true)]
    pub start_column: i64,
    /// Ending row (from 1)
    #[arg(allow_negative_numbers = true)]
    pub end_row: i64,
    /// Ending column (from 1)
    #[arg(allow_negative_numbers = true)]
    pub end_column: i64,
    /// Write every visited room, dead ends included
    #[arg(long)]
    pub full: bool,
    /// Write the trace as JSON
    #[arg(long)]
    pub json: bool,
    /// Also print the maze and path as ASCII art on stdout
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub output_file: PathBuf,
    pub dimensions: Dimensions,
    pub seed: Option<u64>,
    pub print: bool,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = ConfigError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            dimensions: Dimensions::new(args.rows, args.columns)?,
            output_file: args.output_file,
            seed: args.seed,
            print: args.print,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub maze_file: PathBuf,
    pub output_file: PathBuf,
    pub dimensions: Dimensions,
    /// Départ, à partir de 0.
    pub start: Coord,
    /// Arrivée, convertie en coordonnées à partir de 0.
    pub goal: Coord,
    pub mode: TraceMode,
    pub format: TraceFormat,
    pub print: bool,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = ConfigError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let dimensions = Dimensions::new(args.rows, args.columns)?;

        if args.start_row < 0
            || args.start_column < 0
            || args.start_row > args.end_row
            || args.start_column > args.end_column
        {
            return Err(ConfigError::InvalidStart);
        }
        if args.end_row <= 0 || args.end_column <= 0 {
            return Err(ConfigError::InvalidEnd);
        }

        // les valeurs sont positives à partir d'ici
        let start = (args.start_row as usize, args.start_column as usize);
        let end = (args.end_row as usize, args.end_column as usize);
        if !dimensions.contains(start) {
            return Err(ConfigError::StartOutOfMaze {
                row: start.0,
                column: start.1,
                rows: dimensions.rows(),
                columns: dimensions.columns(),
            });
        }
        if end.0 > dimensions.rows() || end.1 > dimensions.columns() {
            return Err(ConfigError::EndOutOfMaze {
                row: end.0,
                column: end.1,
                rows: dimensions.rows(),
                columns: dimensions.columns(),
            });
        }

        Ok(Self {
            maze_file: args.maze_file,
            output_file: args.output_file,
            dimensions,
            start,
            goal: (end.0 - 1, end.1 - 1),
            mode: if args.full {
                TraceMode::Full
            } else {
                TraceMode::Pruned
            },
            format: if args.json {
                TraceFormat::Json
            } else {
                TraceFormat::Text
            },
            print: args.print,
        })
    }
}
