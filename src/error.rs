//! Erreurs du générateur et du solveur.

use std::io;

use thiserror::Error;

/// Erreurs de configuration, détectées avant tout travail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Maze Rows/Columns must be non-zero")]
    ZeroDimension,
    #[error("Error with starting row/column")]
    InvalidStart,
    #[error("Error with ending row/column")]
    InvalidEnd,
    #[error("Starting room ({row}, {column}) is outside a {rows}x{columns} maze")]
    StartOutOfMaze {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("Ending room ({row}, {column}) is outside a {rows}x{columns} maze")]
    EndOutOfMaze {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Erreurs de lecture / écriture du format hexadécimal.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("maze data too short: expected {expected} rooms, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("invalid hex digit {character:?} for room ({row}, {column})")]
    InvalidDigit {
        character: char,
        row: usize,
        column: usize,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Erreur globale renvoyée aux binaires.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}
