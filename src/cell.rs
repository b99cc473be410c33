use crate::walls::Walls;

/// État d'une cellule (visitée ou pas) pendant une passe d'algorithme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    NotVisited,
    Visited,
}

/// Représente une pièce du labyrinthe.
///
/// Une pièce connaît sa position, ses quatre connexions et un état indiquant
/// si la passe en cours (génération ou résolution) l'a déjà visitée.
#[derive(Debug, Clone)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    /// Les connexions délimitant la pièce.
    pub walls: Walls,
    /// L'état de la pièce.
    pub state: CellState,
}

impl Cell {
    /// Crée une pièce aux connexions non initialisées, état `NotVisited`.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            walls: Walls::default(),
            state: CellState::NotVisited,
        }
    }

    /// Crée une pièce à partir de sa valeur hexadécimale.
    pub fn from_nibble(row: usize, column: usize, nibble: u8) -> Self {
        Self {
            row,
            column,
            walls: Walls::from_nibble(nibble),
            state: CellState::NotVisited,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }

    pub fn visit(&mut self) {
        self.state = CellState::Visited;
    }

    /// Remet la pièce à `NotVisited`, les connexions restent inchangées.
    pub fn reset(&mut self) {
        self.state = CellState::NotVisited;
    }
}
