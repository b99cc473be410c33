/*!
 * # Format hexadécimal des labyrinthes
 *
 * Une ligne de texte par ligne de la grille, un chiffre hexadécimal par pièce.
 * Bits : Est = 8, Ouest = 4, Sud = 2, Nord = 1 ; un bit à 1 signifie un mur.
 *
 * Le fichier ne contient pas les dimensions : l'appelant les fournit.
 */

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::CodecError;
use crate::grid::{Dimensions, Grid};

fn encode_row(grid: &Grid, row: usize) -> String {
    grid.row_cells(row)
        .iter()
        .map(|cell| format!("{:x}", cell.walls.to_nibble()))
        .collect()
}

/// Écrit la grille au format hexadécimal (chiffres en minuscules).
pub fn encode_to<W: Write>(grid: &Grid, out: &mut W) -> Result<(), CodecError> {
    for row in 0..grid.rows() {
        writeln!(out, "{}", encode_row(grid, row))?;
    }
    Ok(())
}

/// Encode la grille dans une `String`.
pub fn encode(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.rows() * (grid.columns() + 1));
    for row in 0..grid.rows() {
        text.push_str(&encode_row(grid, row));
        text.push('\n');
    }
    text
}

/// Lit une grille de `dimensions` pièces, ligne par ligne.
///
/// Les blancs (dont les retours à la ligne) sont ignorés, la lecture s'arrête
/// après `rows * columns` chiffres. Une entrée trop courte est une erreur.
pub fn decode_from<R: BufRead>(input: R, dimensions: Dimensions) -> Result<Grid, CodecError> {
    let expected = dimensions.cell_count();
    let columns = dimensions.columns();
    let mut nibbles = Vec::with_capacity(expected);
    let mut surplus = 0usize;

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        let width = line.chars().filter(|c| !c.is_whitespace()).count();
        if width != 0 && width != columns && nibbles.len() < expected {
            warn!(
                "decode: line {} has {} rooms, expected {}",
                line_no + 1,
                width,
                columns
            );
        }

        for character in line.chars().filter(|c| !c.is_whitespace()) {
            if nibbles.len() == expected {
                surplus += 1;
                continue;
            }
            let index = nibbles.len();
            let nibble = character
                .to_digit(16)
                .ok_or(CodecError::InvalidDigit {
                    character,
                    row: index / columns,
                    column: index % columns,
                })?;
            nibbles.push(nibble as u8);
        }
    }

    if nibbles.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            found: nibbles.len(),
        });
    }
    if surplus > 0 {
        warn!("decode: ignoring {} trailing characters", surplus);
    }

    debug!(
        "decode: read {}x{} maze",
        dimensions.rows(),
        dimensions.columns()
    );
    Ok(Grid::from_nibbles(dimensions, &nibbles))
}

/// Décode une grille depuis une chaîne.
pub fn decode(text: &str, dimensions: Dimensions) -> Result<Grid, CodecError> {
    decode_from(text.as_bytes(), dimensions)
}

/// Écrit le labyrinthe dans un fichier (créé ou écrasé).
pub fn write_maze_file<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), CodecError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_to(grid, &mut writer)?;
    writer.flush()?;
    debug!("write_maze_file: wrote {}", path.display());
    Ok(())
}

/// Lit un labyrinthe depuis un fichier.
pub fn read_maze_file<P: AsRef<Path>>(path: P, dimensions: Dimensions) -> Result<Grid, CodecError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("read_maze_file: reading {}", path.display());
    decode_from(BufReader::new(file), dimensions)
}
