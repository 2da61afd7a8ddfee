//! Token loading and sorted output writing
//!
//! The pipeline core treats these as already-validated collaborators: the
//! loader hands over one token per input line with no interpretation, and
//! the writer emits each result set lexicographically sorted, one item per
//! line, with no header or trailer.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read tokens from a file, one per line, taken literally
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.push(line?);
    }

    debug!(path = %path.display(), tokens = tokens.len(), "Loaded tokens");
    Ok(tokens)
}

/// Sort items lexicographically and write them, one per line
pub fn write_sorted(path: &Path, mut items: Vec<String>) -> Result<()> {
    items.sort();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for item in &items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), items = items.len(), "Wrote output file");
    Ok(())
}
