use crate::domain::*;
use crate::error::Result;
use std::io::prelude::*;

/// One line per grid row, cells separated by a single space,
/// fixed `precision` decimals.
pub fn write_matrix<W: Write>(
    output: &mut W,
    grid: &Grid,
    precision: usize,
) -> std::io::Result<()> {
    for row in grid.rows() {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(output, "{first:.precision$}")?;
        }
        for r in cells {
            write!(output, " {r:.precision$}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// Write the result matrix file, 4 decimals.
pub fn write_matrix_file<P: AsRef<std::path::Path>>(
    grid: &Grid,
    path: &P,
) -> Result<()> {
    tracing::info!(path = ?path.as_ref(), "writing result matrix");
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_matrix(&mut output, grid, 4)?;
    output.flush()?;
    Ok(())
}
