use std::{fmt::Display, io::Write, path::Path};

use firebeats_core::matrix::codec;
use itertools::Itertools;

use super::FirebeatsAppError;

/// dimensions of a decoded matrix file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixSummary {
    pub width: usize,
    pub height: usize,
}

/// decodes a matrix file written by the beats operation and prints it one row
/// per line, comma separated, below a `# height x width` header line.
pub fn inspect_matrix<W: Write>(
    matrix_file: &Path,
    strings: bool,
    out: &mut W,
) -> Result<MatrixSummary, FirebeatsAppError> {
    if strings {
        let rows = codec::read_string_matrix_file(matrix_file)?;
        print_rows(matrix_file, &rows, out)
    } else {
        let rows = codec::read_i32_matrix_file(matrix_file)?;
        print_rows(matrix_file, &rows, out)
    }
}

fn print_rows<T: Display, W: Write>(
    matrix_file: &Path,
    rows: &[Vec<T>],
    out: &mut W,
) -> Result<MatrixSummary, FirebeatsAppError> {
    let summary = MatrixSummary {
        width: rows.first().map(|r| r.len()).unwrap_or_default(),
        height: rows.len(),
    };
    let write_err = |e: std::io::Error| {
        FirebeatsAppError::InvalidUserInput(format!("failure printing matrix: {e}"))
    };
    writeln!(
        out,
        "# {} x {} ({})",
        summary.height,
        summary.width,
        matrix_file.display()
    )
    .map_err(write_err)?;
    for row in rows.iter() {
        writeln!(out, "{}", row.iter().join(",")).map_err(write_err)?;
    }
    Ok(summary)
}
