//! Splits a preprocessed lyric line into table keys and literal characters.

use crate::compiler::CompileError;
use crate::table::PatternTable;
use crate::unicode::{ascii_key, is_space, katakana_to_hiragana};
use crate::voicing::normalize_mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A key of the pattern table ("し", "きゃ", "ー").
    Key(String),
    /// A character typed as itself (Latin letter, digit, ASCII punctuation).
    Literal(char),
    Space(char),
    /// A standalone voicing mark, to be composed with the preceding kana.
    Mark(char),
}

impl Token {
    pub fn text(&self) -> String {
        match self {
            Token::Key(k) => k.clone(),
            Token::Literal(c) | Token::Space(c) | Token::Mark(c) => c.to_string(),
        }
    }
}

/// Greedy longest-match tokenization. Katakana is folded to hiragana first.
pub fn tokenize(line: &str, table: &PatternTable) -> Result<Vec<Token>, CompileError> {
    let chars: Vec<char> = line.chars().map(katakana_to_hiragana).collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_space(c) {
            tokens.push(Token::Space(c));
            i += 1;
            continue;
        }
        if normalize_mark(c).is_some() {
            tokens.push(Token::Mark(c));
            i += 1;
            continue;
        }

        let max_len = table.max_key_chars().min(chars.len() - i);
        let longest = (1..=max_len).rev().find_map(|len| {
            let key: String = chars[i..i + len].iter().collect();
            table.contains(&key).then_some((key, len))
        });

        match longest {
            Some((key, len)) => {
                tokens.push(Token::Key(key));
                i += len;
            }
            None if ascii_key(c).is_some() => {
                tokens.push(Token::Literal(c));
                i += 1;
            }
            None => return Err(CompileError::UntypableChar { ch: c, index: i }),
        }
    }

    Ok(tokens)
}
