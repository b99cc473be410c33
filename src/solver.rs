/*!
 * # Résolution du labyrinthe
 *
 * Parcours en profondeur depuis la pièce de départ vers la pièce d'arrivée.
 * Les voisins sont examinés dans l'ordre fixe Est, Ouest, Sud, Nord et seules
 * les ouvertures sont franchies. La première branche qui atteint l'arrivée est
 * retenue : le chemin n'est pas forcément le plus court.
 *
 * Deux modes de trace :
 * - `Full` garde toutes les pièces visitées, impasses comprises ;
 * - `Pruned` ne garde que les pièces du chemin final.
 */

use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::direction::Direction;
use crate::error::ConfigError;
use crate::grid::{Coord, Grid};

/// Politique d'accumulation de la trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TraceMode {
    Full,
    Pruned,
}

impl TraceMode {
    /// Première ligne du fichier de sortie.
    pub fn tag(self) -> &'static str {
        match self {
            TraceMode::Full => "FULL",
            TraceMode::Pruned => "PRUNED",
        }
    }
}

impl fmt::Display for TraceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Trace d'une résolution réussie : la dernière entrée est toujours l'arrivée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub mode: TraceMode,
    pub path: Vec<Coord>,
}

/// Résultat d'une résolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Found(Trace),
    /// Toutes les branches ont été épuisées. `explored` compte les pièces visitées.
    NotFound { mode: TraceMode, explored: usize },
}

impl SolveOutcome {
    pub fn mode(&self) -> TraceMode {
        match self {
            SolveOutcome::Found(trace) => trace.mode,
            SolveOutcome::NotFound { mode, .. } => *mode,
        }
    }

    /// Les coordonnées à écrire ; vide si aucun chemin n'a été trouvé.
    pub fn path(&self) -> &[Coord] {
        match self {
            SolveOutcome::Found(trace) => &trace.path,
            SolveOutcome::NotFound { .. } => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }
}

/// Une pièce sur la pile du parcours, avec la prochaine direction à essayer.
struct SolveFrame {
    row: usize,
    column: usize,
    next: usize,
}

struct Search<'a> {
    grid: &'a mut Grid,
    goal: Coord,
    mode: TraceMode,
    entries: Vec<Coord>,
    stack: Vec<SolveFrame>,
    explored: usize,
}

impl Search<'_> {
    /// Entre dans une pièce. Renvoie vrai si c'est l'arrivée.
    fn enter(&mut self, (row, column): Coord) -> bool {
        self.entries.push((row, column));
        if (row, column) == self.goal {
            return true;
        }
        self.grid.cell_mut(row, column).visit();
        self.explored += 1;
        self.stack.push(SolveFrame {
            row,
            column,
            next: 0,
        });
        false
    }

    fn run(mut self, start: Coord) -> SolveOutcome {
        if self.enter(start) {
            return self.found();
        }

        while let Some(frame) = self.stack.last_mut() {
            if frame.next == Direction::ALL.len() {
                trace!("solve: dead end at ({}, {})", frame.row, frame.column);
                self.stack.pop();
                if self.mode == TraceMode::Pruned {
                    self.entries.pop();
                }
                continue;
            }
            let direction = Direction::ALL[frame.next];
            frame.next += 1;
            let (row, column) = (frame.row, frame.column);

            if !self.grid.cell(row, column).walls.is_open(direction) {
                continue;
            }
            let Some(next) = self.grid.neighbor(row, column, direction) else {
                continue;
            };
            if self.grid.cell(next.0, next.1).is_visited() {
                continue;
            }
            trace!("solve: ({}, {}) -> {:?} -> {:?}", row, column, direction, next);
            if self.enter(next) {
                return self.found();
            }
        }

        debug!("solve: no path, {} rooms explored", self.explored);
        SolveOutcome::NotFound {
            mode: self.mode,
            explored: self.explored,
        }
    }

    fn found(self) -> SolveOutcome {
        debug!(
            "solve: reached {:?}, {} entries, {} rooms explored",
            self.goal,
            self.entries.len(),
            self.explored
        );
        SolveOutcome::Found(Trace {
            mode: self.mode,
            path: self.entries,
        })
    }
}

/// Cherche un chemin de `start` à `goal` (coordonnées à partir de 0).
///
/// Les états de visite de `grid` sont remis à `NotVisited` au départ, puis
/// chaque pièce explorée est marquée. La même grille peut donc servir à
/// plusieurs résolutions, y compris juste après `generate_maze`.
pub fn solve(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    mode: TraceMode,
) -> Result<SolveOutcome, ConfigError> {
    let dimensions = grid.dimensions();
    if !dimensions.contains(start) {
        return Err(ConfigError::StartOutOfMaze {
            row: start.0,
            column: start.1,
            rows: dimensions.rows(),
            columns: dimensions.columns(),
        });
    }
    if !dimensions.contains(goal) {
        return Err(ConfigError::EndOutOfMaze {
            row: goal.0,
            column: goal.1,
            rows: dimensions.rows(),
            columns: dimensions.columns(),
        });
    }
    debug!("solve: {} from {:?} to {:?}", mode, start, goal);
    grid.reset_visits();

    let search = Search {
        grid,
        goal,
        mode,
        entries: Vec::new(),
        stack: Vec::new(),
        explored: 0,
    };
    Ok(search.run(start))
}
