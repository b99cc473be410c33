use crate::direction::Direction;

/// État d'une connexion entre deux pièces voisines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Uninitialized,
    Opening,
    Wall,
}

/// Ensemble des 4 connexions d'une pièce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub east: Connection,
    pub west: Connection,
    pub south: Connection,
    pub north: Connection,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            east: Connection::Uninitialized,
            west: Connection::Uninitialized,
            south: Connection::Uninitialized,
            north: Connection::Uninitialized,
        }
    }
}

impl Walls {
    /// Construit les connexions à partir d'un chiffre hexadécimal (bit à 1 = mur).
    ///
    /// Chaque direction est lue indépendamment : aucune connexion ne reste
    /// `Uninitialized` après décodage.
    pub fn from_nibble(nibble: u8) -> Self {
        let pick = |dir: Direction| {
            if nibble & dir.hex_bit() == dir.hex_bit() {
                Connection::Wall
            } else {
                Connection::Opening
            }
        };
        Self {
            east: pick(Direction::East),
            west: pick(Direction::West),
            south: pick(Direction::South),
            north: pick(Direction::North),
        }
    }

    /// Valeur hexadécimale de la pièce. Une connexion non initialisée compte comme un mur.
    pub fn to_nibble(&self) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.get(dir) != Connection::Opening)
            .fold(0, |acc, dir| acc | dir.hex_bit())
    }

    pub fn get(&self, direction: Direction) -> Connection {
        match direction {
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::South => self.south,
            Direction::North => self.north,
        }
    }

    pub fn set(&mut self, direction: Direction, connection: Connection) {
        match direction {
            Direction::East => self.east = connection,
            Direction::West => self.west = connection,
            Direction::South => self.south = connection,
            Direction::North => self.north = connection,
        }
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        self.get(direction) == Connection::Opening
    }

    /// Vrai si aucune des 4 connexions n'est `Uninitialized`.
    pub fn is_complete(&self) -> bool {
        Direction::ALL
            .iter()
            .all(|&dir| self.get(dir) != Connection::Uninitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nibble_all_walls() {
        let walls = Walls::from_nibble(0xF);
        for dir in Direction::ALL {
            assert_eq!(walls.get(dir), Connection::Wall);
        }
    }

    #[test]
    fn test_from_nibble_mixed() {
        // 0xa = Est + Sud
        let walls = Walls::from_nibble(0xa);
        assert_eq!(walls.east, Connection::Wall);
        assert_eq!(walls.west, Connection::Opening);
        assert_eq!(walls.south, Connection::Wall);
        assert_eq!(walls.north, Connection::Opening);
        assert_eq!(walls.to_nibble(), 0xa);
    }

    #[test]
    fn test_uninitialized_encodes_as_wall() {
        let mut walls = Walls::default();
        walls.set(Direction::West, Connection::Opening);
        assert!(!walls.is_complete());
        assert_eq!(walls.to_nibble(), 0xb);
    }

    #[test]
    fn test_every_nibble_survives() {
        for nibble in 0u8..16 {
            let walls = Walls::from_nibble(nibble);
            assert!(walls.is_complete());
            assert_eq!(walls.to_nibble(), nibble);
        }
    }
}
