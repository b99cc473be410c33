/// Les quatre directions d'une pièce du labyrinthe.
///
/// L'ordre de déclaration est celui du parcours du solveur :
/// Est, Ouest, Sud, Nord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Toutes les directions, dans l'ordre fixe du parcours.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Fait demi tour (par ex. East -> West)
    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    /// Décalage (delta ligne, delta colonne) vers la pièce voisine.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
        }
    }

    /// Bit du chiffre hexadécimal qui porte le mur dans cette direction.
    pub fn hex_bit(self) -> u8 {
        match self {
            Direction::East => 8,
            Direction::West => 4,
            Direction::South => 2,
            Direction::North => 1,
        }
    }

    //Position voisine, peut sortir de la grille
    pub fn neighbor_of(self, row: usize, column: usize) -> (isize, isize) {
        let (dr, dc) = self.offset();
        (row as isize + dr, column as isize + dc)
    }
}
