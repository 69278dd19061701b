pub const DIM: &str = "\x1b[90m";
pub const RESET: &str = "\x1b[0m";

/// Display form of a window token. Tokens outside the query are dimmed unless
/// colour is turned off; matches are shown as they appear in the corpus.
pub fn display_token(token: &str, is_match: bool, color: bool) -> String {
    if is_match || !color {
        token.to_string()
    } else {
        format!("{}{}{}", DIM, token, RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_non_matching_tokens() {
        assert_eq!(display_token("stort", false, true), "\x1b[90mstort\x1b[0m");
    }

    #[test]
    fn leaves_matches_alone() {
        assert_eq!(display_token("ETT", true, true), "ETT");
    }

    #[test]
    fn padding_is_dimmed_too() {
        assert_eq!(display_token("", false, true), "\x1b[90m\x1b[0m");
    }

    #[test]
    fn no_escapes_without_color() {
        assert_eq!(display_token("stort", false, false), "stort");
    }
}
