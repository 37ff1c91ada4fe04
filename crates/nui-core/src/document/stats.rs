//! Status-bar counters

/// Character, word, and line counts for a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

impl DocumentStats {
    /// Count `text`
    ///
    /// Words are whitespace-separated runs. Lines are newline count plus
    /// one, except that empty text has zero lines.
    pub fn of(text: &str) -> Self {
        let characters = text.chars().count();
        let words = text.split_whitespace().count();
        let lines = if text.is_empty() {
            0
        } else {
            text.matches('\n').count() + 1
        };
        Self {
            characters,
            words,
            lines,
        }
    }
}

impl std::fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Characters: {} | Words: {} | Lines: {}",
            self.characters, self.words, self.lines
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(DocumentStats::of(""), DocumentStats::default());
    }

    #[test]
    fn test_counts() {
        let stats = DocumentStats::of("Hola  mundo\nadiós\n");
        assert_eq!(stats.characters, 18);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_whitespace_only() {
        let stats = DocumentStats::of("   ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DocumentStats::of("a b").to_string(),
            "Characters: 3 | Words: 2 | Lines: 1"
        );
    }
}
