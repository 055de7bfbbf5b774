use serde::Serialize;

use crate::unicode::{fold_width, is_kana_letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkCategory {
    Kana,
    Alphabet,
    Number,
    Symbol,
    Space,
}

impl ChunkCategory {
    /// Classify by the first character of a chunk's kana text.
    pub fn classify(kana: &str) -> Self {
        let Some(first) = kana.chars().next().map(fold_width) else {
            return Self::Symbol;
        };
        if first == ' ' {
            Self::Space
        } else if first.is_ascii_alphabetic() {
            Self::Alphabet
        } else if first.is_ascii_digit() {
            Self::Number
        } else if is_kana_letter(first) {
            Self::Kana
        } else {
            Self::Symbol
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kana => "kana",
            Self::Alphabet => "alphabet",
            Self::Number => "number",
            Self::Symbol => "symbol",
            Self::Space => "space",
        }
    }
}

/// One atomic typable unit of a lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Text this chunk stands for, e.g. "し", "った", "きゃ".
    pub kana: String,
    /// Candidate keystroke spellings; the first one is canonical.
    pub patterns: Vec<String>,
    pub category: ChunkCategory,
}

impl Chunk {
    pub fn new(kana: impl Into<String>, patterns: Vec<String>) -> Self {
        let kana = kana.into();
        let category = ChunkCategory::classify(&kana);
        Self {
            kana,
            patterns,
            category,
        }
    }

    /// The displayed spelling, or "" once every candidate is exhausted.
    pub fn canonical(&self) -> &str {
        self.patterns.first().map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ChunkCategory::classify("し"), ChunkCategory::Kana);
        assert_eq!(ChunkCategory::classify("った"), ChunkCategory::Kana);
        assert_eq!(ChunkCategory::classify("ー"), ChunkCategory::Symbol);
        assert_eq!(ChunkCategory::classify("Ａ"), ChunkCategory::Alphabet);
        assert_eq!(ChunkCategory::classify("x"), ChunkCategory::Alphabet);
        assert_eq!(ChunkCategory::classify("７"), ChunkCategory::Number);
        assert_eq!(ChunkCategory::classify("\u{3000}"), ChunkCategory::Space);
        assert_eq!(ChunkCategory::classify("..."), ChunkCategory::Symbol);
        assert_eq!(ChunkCategory::classify("。"), ChunkCategory::Symbol);
        assert_eq!(ChunkCategory::classify("゛"), ChunkCategory::Symbol);
    }

    #[test]
    fn test_canonical() {
        let chunk = Chunk::new("し", vec!["si".into(), "shi".into()]);
        assert_eq!(chunk.canonical(), "si");
        assert_eq!(chunk.category, ChunkCategory::Kana);
        assert_eq!(Chunk::new("", vec![]).canonical(), "");
    }
}
