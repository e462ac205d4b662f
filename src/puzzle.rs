// Puzzle value types.
// Identifies one day's puzzle and carries its raw input payload.

use std::borrow::Cow;
use std::fmt;

/// Identifies one puzzle by event year and day.
///
/// No range is enforced here; the remote endpoint decides whether a
/// (year, day) pair exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleKey {
    pub year: i32,
    pub day: i32,
}

impl PuzzleKey {
    pub fn new(year: i32, day: i32) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day/{}", self.year, self.day)
    }
}

/// Raw puzzle input exactly as served by the remote endpoint.
///
/// A zero-length input is a valid value and distinct from "not stored".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleInput(Vec<u8>);

impl PuzzleInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Input as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for PuzzleInput {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for PuzzleInput {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for PuzzleInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(PuzzleKey::new(2023, 1).to_string(), "2023/day/1");
    }

    #[test]
    fn test_input_text() {
        let input = PuzzleInput::from("1721\n979\n");
        assert_eq!(input.text(), "1721\n979\n");
        assert_eq!(input.len(), 9);
    }

    #[test]
    fn test_input_text_lossy() {
        let input = PuzzleInput::new(vec![b'a', 0xff, b'b']);
        assert_eq!(input.text(), "a\u{fffd}b");
    }

    #[test]
    fn test_empty_input() {
        let input = PuzzleInput::default();
        assert!(input.is_empty());
        assert_eq!(input.as_bytes(), b"");
    }
}
