use std::io::Write;
use crate::concordance::Concordance;
use crate::error::Result;

// Tab separated, one row per window:
//  => position, center, left context, right context
// Padding never shows up in the context columns. Tokens may carry tabs and
// newlines, so fields are backslash-escaped to keep one row per line.
pub fn write_concordance(writer: &mut dyn Write, concordance: &Concordance) -> Result<()> {
    output_csv_header(writer)?;
    for block in &concordance.blocks {
        for window in &block.windows {
            let row = vec![
                window.position.to_string(),
                window.center().text.clone(),
                window.left().join(" "),
                window.right().join(" "),
            ];
            output_csv_row(writer, &row)?;
        }
    }
    Ok(())
}

fn output_csv_header(output: &mut dyn Write) -> Result<()> {
    writeln!(output, "position\tcenter\tleft\tright")?;
    Ok(())
}

fn output_csv_row(output: &mut dyn Write, row: &[String]) -> Result<()> {
    let row_str = row.iter().map(|field| escape_field(field)).collect::<Vec<String>>().join("\t");
    writeln!(output, "{}", row_str)?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
