/*!
 * # Génération du labyrinthe
 *
 * Parcours en profondeur aléatoire depuis la pièce (0, 0) : chaque pièce visitée
 * mélange ses quatre directions, ouvre un passage vers chaque voisin encore
 * jamais visité et s'y enfonce, puis ferme (ou recopie) les autres connexions.
 *
 * Les passages forment un arbre couvrant : toutes les pièces sont reliées et il
 * n'existe aucun cycle.
 *
 * La récursion est remplacée par une pile explicite pour supporter de grandes
 * grilles ; l'ordre des tirages aléatoires reste celui de la version récursive
 * (une pièce fille mélange ses directions avant que sa mère ne reprenne).
 */

use log::{debug, trace};
use rand::Rng;

use crate::direction::Direction;
use crate::grid::{Dimensions, Grid};
use crate::walls::{Connection, Walls};

/// Une pièce en cours de traitement sur la pile.
struct CarveFrame {
    row: usize,
    column: usize,
    directions: [Direction; 4],
    next: usize,
}

/// Mélange les 4 directions : chaque position i est échangée avec une position
/// tirée uniformément dans [0, 4), y compris elle-même.
pub fn shuffle_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    for i in 0..directions.len() {
        let j = rng.random_range(0..directions.len());
        directions.swap(i, j);
    }
    directions
}

/// Connexion à poser vers un voisin déjà visité : on recopie son ouverture
/// éventuelle dans la direction opposée, sinon c'est un mur.
pub fn mirrored_connection(neighbor: &Walls, direction: Direction) -> Connection {
    match neighbor.get(direction.opposite()) {
        Connection::Opening => Connection::Opening,
        Connection::Wall | Connection::Uninitialized => Connection::Wall,
    }
}

fn enter<R: Rng + ?Sized>(grid: &mut Grid, row: usize, column: usize, rng: &mut R) -> CarveFrame {
    grid.cell_mut(row, column).visit();
    let directions = shuffle_directions(rng);
    trace!("carve: enter ({}, {}) order {:?}", row, column, directions);
    CarveFrame {
        row,
        column,
        directions,
        next: 0,
    }
}

/// Génère un labyrinthe complet de la taille demandée.
///
/// Après l'appel, aucune connexion n'est `Uninitialized` et chaque connexion est
/// identique à celle du voisin dans la direction opposée. Les pièces restent
/// marquées `Visited` ; `solve` remet ces états à zéro avant son parcours.
pub fn generate_maze<R: Rng + ?Sized>(dimensions: Dimensions, rng: &mut R) -> Grid {
    debug!(
        "generate_maze: {}x{} maze",
        dimensions.rows(),
        dimensions.columns()
    );
    let mut grid = Grid::new(dimensions);
    let mut stack = vec![enter(&mut grid, 0, 0, rng)];
    let mut max_depth = 1;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next];
        frame.next += 1;
        let (row, column) = (frame.row, frame.column);

        match grid.neighbor(row, column, direction) {
            None => {
                grid.cell_mut(row, column).walls.set(direction, Connection::Wall);
            }
            Some((nr, nc)) if !grid.cell(nr, nc).is_visited() => {
                grid.cell_mut(row, column)
                    .walls
                    .set(direction, Connection::Opening);
                trace!("carve: ({}, {}) -> ({}, {})", row, column, nr, nc);
                stack.push(enter(&mut grid, nr, nc, rng));
                max_depth = max_depth.max(stack.len());
            }
            Some((nr, nc)) => {
                let connection = mirrored_connection(&grid.cell(nr, nc).walls, direction);
                grid.cell_mut(row, column).walls.set(direction, connection);
            }
        }
    }

    debug!("generate_maze: done, max depth {}", max_depth);
    grid
}
