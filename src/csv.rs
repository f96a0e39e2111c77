use crate::error::*;
use std::io::prelude::*;

/// Write equally long named columns as CSV, one line per sample.
pub fn write_csv_1d<P: AsRef<std::path::Path>>(
    path: &P,
    columns: &[(&str, &[f64])],
) -> Result<()> {
    let rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
    for (name, column) in columns {
        if column.len() != rows {
            return Err(StencilError::ColumnLengthMismatch {
                column: name.to_string(),
                expected: rows,
                found: column.len(),
            });
        }
    }

    println!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);

    let header: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    writeln!(output, "{}", header.join(", "))?;
    for i in 0..rows {
        for (c, (_, column)) in columns.iter().enumerate() {
            if c > 0 {
                write!(output, ", ")?;
            }
            write!(output, "{}", column[i])?;
        }
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}
