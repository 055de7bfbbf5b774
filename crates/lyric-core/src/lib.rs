//! Lyric line compilation: kana → romaji pattern table, tokenizer, and the
//! chunk compiler that precomputes every legal keystroke spelling.

pub mod chunk;
pub mod compiler;
pub mod keymap;
pub mod settings;
pub mod table;
pub mod tokenizer;
pub mod unicode;
pub mod voicing;

pub use chunk::{Chunk, ChunkCategory};
pub use compiler::{
    canonical_romaji, compile_chunks, compile_chunks_with, CompileError, CompileOptions,
};
