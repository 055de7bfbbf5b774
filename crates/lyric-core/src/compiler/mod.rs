//! Chunk compiler: tokens → typable chunks with context-sensitive patterns.
//!
//! The pipeline runs a fixed sequence of passes over an owned `Vec<Chunk>`:
//!
//! 1. dakuten: fold "base + voicing mark" into the voiced kana
//! 2. youon: contracted sounds gain their decomposed x/l spellings
//! 3. sokuon: "っ" fuses into a geminable follower
//! 4. hatsuon: "ん" drops the bare "n" where it would be ambiguous
//! 5. punctuation: ".." / "..." collapse into a shorthand chunk
//!
//! Each pass only ever adds or rewrites candidates; a chunk left without
//! patterns is reported as [`CompileError::EmptyPatterns`].

mod dakuten;
mod hatsuon;
mod punctuation;
mod sokuon;
mod youon;


use tracing::{debug, debug_span};

use crate::chunk::Chunk;
use crate::settings::Settings;
use crate::table::PatternTable;
use crate::tokenizer::{tokenize, Token};
use crate::unicode::ascii_key;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("untypable character {ch:?} at index {index}")]
    UntypableChar { ch: char, index: usize },
    #[error("chunk {kana:?} has no candidate patterns")]
    EmptyPatterns { kana: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub period_shorthand: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            period_shorthand: true,
        }
    }
}

impl CompileOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            period_shorthand: settings.compiler.period_shorthand,
        }
    }
}

/// Compile a line with the global pattern table and settings.
pub fn compile_chunks(text: &str) -> Result<Vec<Chunk>, CompileError> {
    let options = CompileOptions::from_settings(crate::settings::settings());
    compile_chunks_with(text, PatternTable::global(), &options)
}

pub fn compile_chunks_with(
    text: &str,
    table: &PatternTable,
    options: &CompileOptions,
) -> Result<Vec<Chunk>, CompileError> {
    let _span = debug_span!("compile_chunks", text).entered();

    let tokens = tokenize(text, table)?;
    let chunks: Vec<Chunk> = tokens
        .iter()
        .map(|token| chunk_from_token(token, table))
        .collect();

    let chunks = dakuten::compose_voicing_marks(chunks, table);
    let chunks = youon::expand_contracted(chunks, table);
    let chunks = sokuon::fuse_geminates(chunks);
    let chunks = hatsuon::disambiguate_nasals(chunks);
    let chunks = if options.period_shorthand {
        punctuation::collapse_periods(chunks)
    } else {
        chunks
    };

    validate(&chunks)?;
    debug!(token_count = tokens.len(), chunk_count = chunks.len());
    Ok(chunks)
}

/// Concatenated canonical spellings: what a player types when always taking
/// the first candidate. Used for keystroke counting.
pub fn canonical_romaji(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::canonical).collect()
}

fn chunk_from_token(token: &Token, table: &PatternTable) -> Chunk {
    match token {
        Token::Key(key) => Chunk::new(
            key.as_str(),
            table.lookup(key).map(<[String]>::to_vec).unwrap_or_default(),
        ),
        Token::Literal(c) => Chunk::new(
            c.to_string(),
            ascii_key(*c).map(|k| vec![k.to_string()]).unwrap_or_default(),
        ),
        Token::Space(c) => Chunk::new(c.to_string(), vec![" ".to_string()]),
        // Patterns come from composition with the preceding kana.
        Token::Mark(c) => Chunk::new(c.to_string(), Vec::new()),
    }
}

fn validate(chunks: &[Chunk]) -> Result<(), CompileError> {
    match chunks
        .iter()
        .find(|c| c.patterns.is_empty() || c.patterns.iter().any(String::is_empty))
    {
        Some(bad) => Err(CompileError::EmptyPatterns {
            kana: bad.kana.clone(),
        }),
        None => Ok(()),
    }
}

fn push_unique(patterns: &mut Vec<String>, pattern: String) {
    if !patterns.contains(&pattern) {
        patterns.push(pattern);
    }
}
