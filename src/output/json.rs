use std::io::Write;
use crate::concordance::Concordance;
use crate::error::Result;

/// Writes the concordance as a single pretty-printed JSON document.
///
/// # Arguments
///
/// * `writer` - Where the document goes.
/// * `concordance` - Corpus, marker line, sorted query words and one block per logical line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_concordance(writer: &mut dyn Write, concordance: &Concordance) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, concordance)?;
    writeln!(writer)?;
    Ok(())
}
