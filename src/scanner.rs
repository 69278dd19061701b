use crate::error::{ConcordanceError, Result};
use crate::query::QuerySet;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // ASCII digits only, the whole token. A lone "." is a marker too.
    static ref MARKER_RE: Regex = Regex::new(r"^[0-9]*\.$").unwrap();
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Marker { path: Option<&'a str> },
    Query,
}

/// A marker line together with the query that was active when it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub line: usize,
    pub path: Option<String>,
    pub query: QuerySet,
}

/// Marker line selected by the target index, with a corpus path guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub line: usize,
    pub path: String,
    pub query: QuerySet,
}

pub fn is_marker(token: &str) -> bool {
    MARKER_RE.is_match(token)
}

pub fn classify(line: &str) -> LineKind<'_> {
    // ASCII whitespace only, so a no-break space stays inside a token
    let mut tokens = line.split_ascii_whitespace();
    match tokens.next() {
        None => LineKind::Blank,
        Some(first) if is_marker(first) => LineKind::Marker { path: tokens.next() },
        Some(_) => LineKind::Query,
    }
}

// Running state of a control file walk
#[derive(Debug, Default)]
struct ScanState {
    line: usize,
    query: QuerySet,
}

impl ScanState {
    // Advance over one line. Returns the marker path slot if the line was a marker.
    fn step<'a>(&mut self, text: &'a str) -> Option<Option<&'a str>> {
        self.line += 1;
        match classify(text) {
            LineKind::Blank => None,
            LineKind::Marker { path } => Some(path),
            LineKind::Query => {
                self.query = QuerySet::from_line(text);
                debug!("Line {}: query is now {:?}", self.line, self.query.sorted_words());
                None
            }
        }
    }
}

/// Walk the control file and return the marker at line `target`, if there is one.
pub fn find_target(control: &str, target: usize) -> Result<Option<Target>> {
    let mut state = ScanState::default();
    for text in control.lines() {
        let marker = state.step(text);
        if state.line == target {
            return match marker {
                Some(Some(path)) => Ok(Some(Target {
                    line: state.line,
                    path: path.to_string(),
                    query: state.query,
                })),
                Some(None) => Err(ConcordanceError::MissingCorpusPath { line: state.line }),
                None => Ok(None),
            };
        }
    }
    Ok(None)
}

/// Every marker line in the control file, in order.
pub fn markers(control: &str) -> Vec<Marker> {
    let mut state = ScanState::default();
    let mut found = Vec::new();
    for text in control.lines() {
        if let Some(path) = state.step(text) {
            found.push(Marker {
                line: state.line,
                path: path.map(|p| p.to_string()),
                query: state.query.clone(),
            });
        }
    }
    found
}
