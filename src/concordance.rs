use crate::error::{self, Result};
use crate::query::QuerySet;
use crate::scanner::Target;
use crate::tokenizer;
use log::info;
use serde::Serialize;

pub const PREVIEW_LEN: usize = 100;
pub const PADDING: usize = 10;
pub const WINDOW_LEN: usize = 18;
pub const CENTER: usize = 8;
// Slices shorter than this have no centre token and end the walk
pub const MIN_WINDOW_LEN: usize = CENTER + 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowToken {
    pub text: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    // Index of the centre token in the unpadded token sequence
    pub position: usize,
    pub tokens: Vec<WindowToken>,
}

impl Window {
    pub fn center(&self) -> &WindowToken {
        &self.tokens[CENTER]
    }

    // Real tokens before the centre, padding dropped
    pub fn left(&self) -> Vec<&str> {
        self.tokens[..CENTER].iter().map(|t| t.text.as_str()).filter(|t| !t.is_empty()).collect()
    }

    // Real tokens after the centre, padding dropped
    pub fn right(&self) -> Vec<&str> {
        self.tokens[CENTER + 1..].iter().map(|t| t.text.as_str()).filter(|t| !t.is_empty()).collect()
    }
}

/// Preview and context windows for one logical corpus line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub preview: Vec<String>,
    pub windows: Vec<Window>,
}

impl Block {
    pub fn build(line: &str, query: &QuerySet) -> Block {
        let tokens = tokenizer::tokenize(line.trim_matches(|c: char| c.is_ascii_whitespace()));
        let preview = tokens.iter().take(PREVIEW_LEN).cloned().collect();
        let windows = windows(&tokens, query);
        Block { preview, windows }
    }
}

/// Everything printed for one target: the corpus it came from and one block per logical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concordance {
    pub corpus: String,
    pub line: usize,
    pub query: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Concordance {
    // The whole file is one logical line unless per_line is set
    pub fn from_text(target: &Target, text: &str, per_line: bool) -> Concordance {
        let blocks = if per_line {
            text.lines().map(|line| Block::build(line, &target.query)).collect()
        } else {
            vec![Block::build(text, &target.query)]
        };
        Concordance {
            corpus: target.path.clone(),
            line: target.line,
            query: target.query.sorted_words(),
            blocks,
        }
    }

    pub fn load(target: &Target, per_line: bool) -> Result<Concordance> {
        info!("Reading corpus {} for marker line {}", target.path, target.line);
        let text = error::read_to_string(&target.path)?;
        let concordance = Concordance::from_text(target, &text, per_line);
        info!("Found {} context windows", concordance.window_count());
        Ok(concordance)
    }

    pub fn window_count(&self) -> usize {
        self.blocks.iter().map(|block| block.windows.len()).sum()
    }
}

// Pad the tokens and slide a window over them, keeping those whose centre is in the query
pub fn windows(tokens: &[String], query: &QuerySet) -> Vec<Window> {
    let mut padded: Vec<&str> = Vec::with_capacity(tokens.len() + 2 * PADDING);
    padded.extend(std::iter::repeat("").take(PADDING));
    padded.extend(tokens.iter().map(|t| t.as_str()));
    padded.extend(std::iter::repeat("").take(PADDING));

    let mut found = Vec::new();
    for start in 0..padded.len() {
        let end = (start + WINDOW_LEN).min(padded.len());
        let slice = &padded[start..end];
        if slice.len() < MIN_WINDOW_LEN {
            break;
        }
        if !query.matches(slice[CENTER]) {
            continue;
        }
        let tokens = slice
            .iter()
            .map(|text| WindowToken {
                text: text.to_string(),
                matched: query.matches(text),
            })
            .collect();
        found.push(Window {
            // A matching centre is never padding, so this cannot underflow
            position: start + CENTER - PADDING,
            tokens,
        });
    }
    found
}
