//! Génération et résolution de labyrinthes rectangulaires.
//!
//! - [`generator`] creuse un labyrinthe par parcours en profondeur aléatoire ;
//! - [`codec`] lit et écrit le format hexadécimal (un chiffre par pièce) ;
//! - [`solver`] cherche un chemin en profondeur, trace `FULL` ou `PRUNED` ;
//! - [`trace`] écrit le résultat, [`render`] dessine la grille en ASCII.

pub mod cell;
pub mod codec;
pub mod config;
pub mod direction;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;
pub mod trace;
pub mod walls;

pub use cell::{Cell, CellState};
pub use direction::Direction;
pub use error::{CodecError, ConfigError, MazeError};
pub use grid::{is_out_of_bounds, Coord, Dimensions, Grid};
pub use solver::{solve, SolveOutcome, Trace, TraceMode};
pub use walls::{Connection, Walls};
