pub mod csv;
pub mod text;
pub mod json;

use crate::args::{Config, OutputFormat};
use crate::concordance::Concordance;
use crate::error::{ConcordanceError, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(String),
}

pub fn output_concordance(config: &Config, concordance: &Concordance) -> Result<()> {
    let mut writer = open_writer(&config.output)?;
    write_concordance(config, &mut writer, concordance)?;
    writer.flush()?;
    Ok(())
}

pub fn write_concordance(config: &Config, writer: &mut dyn Write, concordance: &Concordance) -> Result<()> {
    match config.output_format {
        OutputFormat::Text => text::write_concordance(config, writer, concordance),
        OutputFormat::Json => json::write_concordance(writer, concordance),
        OutputFormat::CSV => csv::write_concordance(writer, concordance),
    }
}

pub fn open_writer(output: &Output) -> Result<Box<dyn Write>> {
    match output {
        Output::Stdout => Ok(Box::new(std::io::stdout())),
        Output::File(path) => {
            // Create the output directory if it does not exist
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent).map_err(|source| ConcordanceError::Io { path: parent.to_path_buf(), source })?;
            }
            let file = std::fs::File::create(path).map_err(|source| ConcordanceError::Io { path: path.into(), source })?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
    }
}
