use regex::Regex;

use crate::error::Result;

/// A compiled player pattern.
pub type Pattern = Regex;

/// Compile player input into a pattern.
///
/// The input is used verbatim, so leading or trailing spaces are part of the
/// pattern.
pub fn compile(input: &str) -> Result<Pattern> {
    let pattern = Regex::new(input)?;
    tracing::debug!(pattern = input, "compiled pattern");
    Ok(pattern)
}

/// True if the pattern matches anywhere in `text`.
pub fn is_match(pattern: &Pattern, text: &str) -> bool {
    pattern.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn unbalanced_group_is_rejected() {
        assert!(matches!(compile("("), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn match_is_unanchored() {
        let pattern = compile("go").unwrap();
        assert!(is_match(&pattern, "Let's go!"));
        assert!(!is_match(&pattern, "Proceed!"));
    }

    #[test]
    fn empty_pattern_matches_empty_text() {
        let pattern = compile("").unwrap();
        assert!(is_match(&pattern, ""));
    }

    #[test]
    fn whitespace_is_kept() {
        let pattern = compile(" ").unwrap();
        assert!(!is_match(&pattern, "One"));
        assert!(is_match(&pattern, "One two"));
    }
}
