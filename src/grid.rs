use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::ConfigError;

/// Une position (ligne, colonne) dans la grille, à partir de 0.
pub type Coord = (usize, usize);

/// Dimensions d'un labyrinthe, validées une seule fois.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, (row, column): Coord) -> bool {
        row < self.rows && column < self.columns
    }
}

/// Vrai si (row, column) est en dehors d'une grille `rows` x `columns`.
pub fn is_out_of_bounds(row: isize, column: isize, columns: usize, rows: usize) -> bool {
    !(row >= 0 && (row as usize) < rows && column >= 0 && (column as usize) < columns)
}

/// Carte du labyrinthe, stockée ligne par ligne dans un `Vec`.
#[derive(Debug, Clone)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Crée une grille dont toutes les connexions sont non initialisées.
    pub fn new(dimensions: Dimensions) -> Self {
        let cells = (0..dimensions.rows)
            .flat_map(|row| (0..dimensions.columns).map(move |column| Cell::new(row, column)))
            .collect();
        Self { dimensions, cells }
    }

    /// Crée une grille à partir des valeurs hexadécimales, ligne par ligne.
    ///
    /// `nibbles` doit contenir exactement une valeur par pièce.
    pub(crate) fn from_nibbles(dimensions: Dimensions, nibbles: &[u8]) -> Self {
        debug_assert_eq!(nibbles.len(), dimensions.cell_count());
        let columns = dimensions.columns;
        let cells = nibbles
            .iter()
            .enumerate()
            .map(|(i, &nibble)| Cell::from_nibble(i / columns, i % columns, nibble))
            .collect();
        Self { dimensions, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            self.dimensions.contains((row, column)),
            "room ({}, {}) outside {}x{} maze",
            row,
            column,
            self.dimensions.rows,
            self.dimensions.columns
        );
        row * self.dimensions.columns + column
    }

    /// Récupère une pièce en lecture seule.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[self.index(row, column)]
    }

    /// Récupère une pièce en écriture.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        let index = self.index(row, column);
        &mut self.cells[index]
    }

    /// Voisin dans une direction donnée, `None` s'il sort de la grille.
    pub fn neighbor(&self, row: usize, column: usize, direction: Direction) -> Option<Coord> {
        let (nr, nc) = direction.neighbor_of(row, column);
        if is_out_of_bounds(nr, nc, self.dimensions.columns, self.dimensions.rows) {
            None
        } else {
            Some((nr as usize, nc as usize))
        }
    }

    /// Les pièces d'une ligne, de gauche à droite.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.dimensions.columns]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Remet toutes les pièces à `NotVisited` avant une nouvelle passe.
    pub fn reset_visits(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walls::Connection;

    #[test]
    fn test_out_of_bounds() {
        assert!(!is_out_of_bounds(0, 0, 3, 2));
        assert!(!is_out_of_bounds(1, 2, 3, 2));
        assert!(is_out_of_bounds(-1, 0, 3, 2));
        assert!(is_out_of_bounds(0, -1, 3, 2));
        assert!(is_out_of_bounds(2, 0, 3, 2));
        assert!(is_out_of_bounds(0, 3, 3, 2));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(Dimensions::new(0, 4), Err(ConfigError::ZeroDimension));
        assert_eq!(Dimensions::new(4, 0), Err(ConfigError::ZeroDimension));
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_grid_is_uninitialized() {
        let grid = Grid::new(Dimensions::new(2, 3).unwrap());
        assert_eq!(grid.cells().count(), 6);
        let cell = grid.cell(1, 2);
        assert_eq!((cell.row, cell.column), (1, 2));
        assert_eq!(cell.walls.east, Connection::Uninitialized);
        assert!(!cell.is_visited());
    }

    #[test]
    fn test_neighbor_on_edges() {
        let grid = Grid::new(Dimensions::new(2, 2).unwrap());
        assert_eq!(grid.neighbor(0, 0, Direction::North), None);
        assert_eq!(grid.neighbor(0, 0, Direction::West), None);
        assert_eq!(grid.neighbor(0, 0, Direction::East), Some((0, 1)));
        assert_eq!(grid.neighbor(0, 0, Direction::South), Some((1, 0)));
        assert_eq!(grid.neighbor(1, 1, Direction::South), None);
    }

    #[test]
    fn test_from_nibbles_row_major() {
        let grid = Grid::from_nibbles(Dimensions::new(2, 2).unwrap(), &[0xd, 0xe, 0x7, 0xb]);
        assert_eq!(grid.cell(0, 1).walls.to_nibble(), 0xe);
        assert_eq!(grid.cell(1, 0).walls.to_nibble(), 0x7);
        assert_eq!(grid.row_cells(1).len(), 2);
    }

    #[test]
    fn test_reset_visits_keeps_walls() {
        let mut grid = Grid::from_nibbles(Dimensions::new(1, 2).unwrap(), &[0x7, 0xb]);
        grid.cell_mut(0, 0).visit();
        grid.cell_mut(0, 1).visit();
        grid.reset_visits();
        assert!(grid.cells().all(|cell| !cell.is_visited()));
        assert_eq!(grid.cell(0, 0).walls.to_nibble(), 0x7);
    }

    #[test]
    #[should_panic]
    fn test_cell_outside_panics() {
        let grid = Grid::new(Dimensions::new(2, 2).unwrap());
        grid.cell(2, 0);
    }
}
