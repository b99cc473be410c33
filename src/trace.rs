//! Écriture du résultat d'une résolution : texte `FULL`/`PRUNED` ou JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::CodecError;
use crate::grid::Coord;
use crate::solver::{SolveOutcome, TraceMode};

/// Format du fichier de sortie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct TraceReport<'a> {
    mode: TraceMode,
    found: bool,
    path: &'a [Coord],
}

/// Texte de la trace : la ligne de mode puis une ligne `row, column` par entrée.
///
/// Sans chemin trouvé, seule la ligne de mode est présente.
pub fn format_text(outcome: &SolveOutcome) -> String {
    let mut text = String::with_capacity(8 + outcome.path().len() * 8);
    text.push_str(outcome.mode().tag());
    text.push('\n');
    for (row, column) in outcome.path() {
        text.push_str(&format!("{}, {}\n", row, column));
    }
    text
}

/// Écrit le texte de [`format_text`] dans `out`.
pub fn write_text<W: Write>(outcome: &SolveOutcome, out: &mut W) -> Result<(), CodecError> {
    out.write_all(format_text(outcome).as_bytes())?;
    Ok(())
}

/// Rapport JSON : `{"mode":"PRUNED","found":true,"path":[[0,0],...]}`.
pub fn to_json_string(outcome: &SolveOutcome) -> Result<String, CodecError> {
    let report = TraceReport {
        mode: outcome.mode(),
        found: outcome.is_found(),
        path: outcome.path(),
    };
    Ok(serde_json::to_string(&report)?)
}

/// Écrit la trace dans un fichier (créé ou écrasé).
pub fn write_trace_file<P: AsRef<Path>>(
    path: P,
    outcome: &SolveOutcome,
    format: TraceFormat,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        TraceFormat::Text => write_text(outcome, &mut writer)?,
        TraceFormat::Json => writeln!(writer, "{}", to_json_string(outcome)?)?,
    }
    writer.flush()?;
    debug!(
        "write_trace_file: {} entries to {}",
        outcome.path().len(),
        path.display()
    );
    Ok(())
}
