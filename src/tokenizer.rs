// Characters that separate corpus tokens. Newline, tab, '+', '_' and digits are
// deliberately absent and stay inside tokens.
pub const DELIMITERS: [char; 25] = [
    ' ', '|', '<', '>', '-', '!', '"', '#', '%', '&', '/', '(', ')', '=', '?',
    '{', '[', ']', '}', '*', '\'', ',', '.', ':', ';',
];

// Split on the default delimiter set
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &DELIMITERS)
}

// Split on any of the given delimiters, dropping empty pieces and keeping order
pub fn tokenize_with(text: &str, delimiters: &[char]) -> Vec<String> {
    text.split(delimiters)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_space() {
        let tokens = tokenize("Det var en gång (kanske) en katt, som hette \"Måns\"; slut.");
        assert_eq!(tokens, vec!["Det", "var", "en", "gång", "kanske", "en", "katt", "som", "hette", "Måns", "slut"]);
    }

    #[test]
    fn never_yields_empty_tokens() {
        let tokens = tokenize("  --a..b!!  ''c  ");
        assert_eq!(tokens, vec!["a", "b", "c"]);
        assert!(tokenize(" .,;:- ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn keeps_characters_outside_the_delimiter_set() {
        let tokens = tokenize("a+b c_d 1984 e\tf");
        assert_eq!(tokens, vec!["a+b", "c_d", "1984", "e\tf"]);
    }

    #[test]
    fn custom_delimiters() {
        let tokens = tokenize_with("a+b c", &['+']);
        assert_eq!(tokens, vec!["a", "b c"]);
    }
}
