use log::warn;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConcordanceError {
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("Target line number is required for the concordance command")]
    MissingTarget,
    #[error("Marker line {line} has no corpus file path")]
    MissingCorpusPath { line: usize },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
    #[error("Output format {format} is not supported by {command}")]
    UnsupportedOutputFormat { command: String, format: String },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConcordanceError>;

// Read a whole file, keeping the path in the error. Invalid UTF-8 is replaced
// rather than rejected, with a warning since matching may suffer.
pub fn read_to_string(path: impl Into<PathBuf>) -> Result<String> {
    let path = path.into();
    let buffer = std::fs::read(&path).map_err(|source| ConcordanceError::Io { path: path.clone(), source })?;
    match String::from_utf8(buffer) {
        Ok(text) => Ok(text),
        Err(err) => {
            let bytes = err.into_bytes();
            let text = String::from_utf8_lossy(&bytes).into_owned();
            let replaced = text.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();
            warn!("{} is not valid UTF-8, {} invalid sequences replaced with U+FFFD", path.display(), replaced);
            Ok(text)
        }
    }
}
