// Delimiter-based tokenizer for puzzle text.

use crate::error::{Result, RudolfError};

/// Split `input` on any of the `delimiters` characters.
///
/// Every delimiter ends exactly one token, so adjacent delimiters produce
/// empty tokens and nothing is collapsed. A leading delimiter yields a leading
/// empty token. A trailing delimiter only terminates the last token, so
/// `"1\n2\n"` gives `["1", "2"]`. The empty string yields a single empty token.
///
/// Returns [`RudolfError::InvalidInput`] when `input` is absent.
pub fn split(input: Option<&str>, delimiters: &[char]) -> Result<Vec<String>> {
    let input = input.ok_or_else(|| RudolfError::InvalidInput("no text to split".to_string()))?;
    let is_delimiter = |c: char| delimiters.contains(&c);

    let mut tokens: Vec<String> = input.split(is_delimiter).map(str::to_string).collect();
    if input.ends_with(is_delimiter) {
        tokens.pop();
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_empty_fields() {
        assert_eq!(split(Some("a,,b"), &[',']).unwrap(), vec!["a", "", "b"]);
        assert_eq!(split(Some(",a"), &[',']).unwrap(), vec!["", "a"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(Some(""), &[',']).unwrap(), vec![""]);
    }

    #[test]
    fn test_multiple_delimiters() {
        assert_eq!(
            split(Some("a b,c"), &[' ', ',']).unwrap(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(split(Some("a,"), &[',']).unwrap(), vec!["a"]);
        assert_eq!(split(Some("1\n2\n"), &['\n']).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_consecutive_trailing_delimiters() {
        assert_eq!(split(Some("a,,"), &[',']).unwrap(), vec!["a", ""]);
        assert_eq!(split(Some(","), &[',']).unwrap(), vec![""]);
        assert_eq!(split(Some("x y,\n"), &[' ', ',', '\n']).unwrap(), vec!["x", "y", ""]);
    }

    #[test]
    fn test_no_delimiter_present() {
        assert_eq!(split(Some("abc"), &[',']).unwrap(), vec!["abc"]);
        assert_eq!(split(Some("abc"), &[]).unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            split(Some("ä→b→ç"), &['→']).unwrap(),
            vec!["ä", "b", "ç"]
        );
    }

    #[test]
    fn test_absent_input_is_an_error() {
        let err = split(None, &[',']).unwrap_err();
        assert!(matches!(err, RudolfError::InvalidInput(_)));
    }
}
