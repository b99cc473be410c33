/*!
 * # Affichage ASCII du labyrinthe
 *
 * Chaque pièce occupe 3 colonnes et 2 lignes de texte, les intersections sont
 * des `+`. Un chemin optionnel est superposé : `S` au départ, `G` à l'arrivée,
 * `*` pour les pièces intermédiaires.
 */

use std::collections::HashSet;

use crate::grid::{Coord, Grid};
use crate::walls::Connection;

fn is_wall(connection: Connection) -> bool {
    match connection {
        Connection::Wall => true,
        Connection::Opening | Connection::Uninitialized => false,
    }
}

/// Génère une représentation ASCII de la grille, avec un chemin éventuel.
pub fn render_ascii(grid: &Grid, path: Option<&[Coord]>) -> String {
    let height = grid.rows() * 2 + 1;
    let width = grid.columns() * 3 + 1;
    let mut ascii_grid: Vec<Vec<char>> = vec![vec![' '; width]; height];

    for cell in grid.cells() {
        let grid_x = cell.column * 3;
        let grid_y = cell.row * 2;

        // MUR NORD
        if is_wall(cell.walls.north) {
            ascii_grid[grid_y][grid_x + 1] = '-';
            ascii_grid[grid_y][grid_x + 2] = '-';
        }
        // MUR SUD
        if is_wall(cell.walls.south) {
            ascii_grid[grid_y + 2][grid_x + 1] = '-';
            ascii_grid[grid_y + 2][grid_x + 2] = '-';
        }
        // MUR OUEST
        if is_wall(cell.walls.west) {
            ascii_grid[grid_y + 1][grid_x] = '|';
        }
        // MUR EST
        if is_wall(cell.walls.east) {
            ascii_grid[grid_y + 1][grid_x + 3] = '|';
        }
    }

    // Dessiner les intersections
    for row in (0..height).step_by(2) {
        for col in (0..width).step_by(3) {
            ascii_grid[row][col] = '+';
        }
    }

    if let Some(path) = path {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        for &(row, column) in &on_path {
            if !grid.dimensions().contains((row, column)) {
                continue;
            }
            ascii_grid[row * 2 + 1][column * 3 + 1] = '*';
        }
        if let Some(&(row, column)) = path.first() {
            if grid.dimensions().contains((row, column)) {
                ascii_grid[row * 2 + 1][column * 3 + 1] = 'S';
            }
        }
        if let Some(&(row, column)) = path.last() {
            if path.len() > 1 && grid.dimensions().contains((row, column)) {
                ascii_grid[row * 2 + 1][column * 3 + 1] = 'G';
            }
        }
    }

    let mut out = String::with_capacity(height * (width + 1));
    for row in ascii_grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::grid::Dimensions;

    #[test]
    fn test_render_two_by_two() {
        let grid = decode("dd\n6a\n", Dimensions::new(2, 2).unwrap()).unwrap();
        let expected = "\
+--+--+\n\
|  |  |\n\
+  +  +\n\
|     |\n\
+--+--+\n";
        assert_eq!(render_ascii(&grid, None), expected);
    }

    #[test]
    fn test_render_path_overlay() {
        let grid = decode("dd\n6a\n", Dimensions::new(2, 2).unwrap()).unwrap();
        let path = [(0, 0), (1, 0), (1, 1), (0, 1)];
        let expected = "\
+--+--+\n\
|S |G |\n\
+  +  +\n\
|*  * |\n\
+--+--+\n";
        assert_eq!(render_ascii(&grid, Some(&path)), expected);
    }
}
