//! Core types for lyrsync-core

use serde::{Deserialize, Serialize};

/// Subtitle cue with timestamps.
///
/// Represents one lyric line with start and end times in seconds. Times are
/// `f64` so second-scale values keep exact millisecond precision through the
/// SRT codec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Lyric text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Cue {
    /// Create a cue from text and a time range.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Immutable ordered lyric lines for one recording session.
///
/// Built once from raw text and never mutated afterwards. Blank lines are
/// dropped and surrounding whitespace is trimmed, so every stored line is
/// non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LyricSheet {
    lines: Vec<String>,
}

impl LyricSheet {
    /// Build a sheet from raw text, one line per non-blank input line.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        Self { lines }
    }

    /// Number of lyric lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the sheet has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterator over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let sheet = LyricSheet::from_text("  first line \n\n\t\nsecond line\n");

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(0), Some("first line"));
        assert_eq!(sheet.get(1), Some("second line"));
        assert_eq!(sheet.get(2), None);
    }

    #[test]
    fn empty_text_gives_empty_sheet() {
        let sheet = LyricSheet::from_text("\n \n");

        assert!(sheet.is_empty());
        assert_eq!(sheet.lines().count(), 0);
    }
}
