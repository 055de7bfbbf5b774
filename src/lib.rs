//! Lyric typing engine.
//!
//! Compiles lyric lines into typable chunks (`lyric-core`) and judges romaji
//! or kana keystrokes against them one key at a time (`lyric-session`). This
//! crate re-exports both and owns the optional tracing setup.

pub mod trace_init;

pub use lyric_core::{
    canonical_romaji, compile_chunks, compile_chunks_with, keymap, settings, table, unicode,
    voicing, Chunk, ChunkCategory, CompileError, CompileOptions,
};
pub use lyric_session::{
    compile_line, judge, judge_with, Confirmed, InputMode, JudgeOptions, Judgment, KeyEvent,
    LineState,
};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
