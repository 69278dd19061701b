use rustc_hash::FxHashSet;

// Words that never become part of a query, compared after lowercasing
pub const STOPWORDS: [&str; 3] = ["i", "och", "den"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    words: FxHashSet<String>,
}

impl QuerySet {
    /// Build a query from a control file line: ASCII whitespace split, lowercased, stopwords removed.
    pub fn from_line(line: &str) -> QuerySet {
        let words = line
            .split_ascii_whitespace()
            .map(|word| word.to_lowercase())
            .filter(|word| !STOPWORDS.contains(&word.as_str()))
            .collect();
        QuerySet { words }
    }

    /// Case-insensitive membership test for a corpus token.
    pub fn matches(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.words.contains(&token.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // Sorted copy of the words, for stable output
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}
