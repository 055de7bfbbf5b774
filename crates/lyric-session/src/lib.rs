//! Keystroke judgment against compiled lyric lines.
//!
//! `compile_line` turns a lyric line into a `LineState`; `judge` takes one key
//! event and returns a `Judgment` carrying the next state. States are never
//! mutated in place, so a failed key leaves the caller's state untouched and
//! old states can be kept for replay or undo.

pub(crate) mod types;

mod kana;
mod line_state;
mod romaji;

#[cfg(test)]
mod tests;

use lyric_core::settings::settings;
use tracing::{debug, debug_span};

pub use line_state::{Confirmed, LineState};
pub use lyric_core::{Chunk, ChunkCategory, CompileError};
pub use types::{InputMode, JudgeOptions, Judgment, KeyEvent};

/// Compile `text` with the global pattern table and settings.
pub fn compile_line(text: &str) -> Result<LineState, CompileError> {
    let _span = debug_span!("compile_line").entered();
    let chunks = lyric_core::compile_chunks(text)?;
    Ok(LineState::new(chunks))
}

/// Judge one key with options from the global settings.
pub fn judge(event: &KeyEvent, mode: InputMode, state: &LineState) -> Judgment {
    judge_with(event, mode, state, &JudgeOptions::from_settings(settings()))
}

pub fn judge_with(
    event: &KeyEvent,
    mode: InputMode,
    state: &LineState,
    options: &JudgeOptions,
) -> Judgment {
    let _span = debug_span!("judge", ?mode, key = ?event.key, code = %event.code).entered();
    let judgment = match mode {
        InputMode::Romaji => romaji::judge_romaji(event.key, state, options),
        InputMode::Kana => kana::judge_kana(event, state, options),
    };
    debug!(
        success = ?judgment.success_key(),
        fail = ?judgment.fail_key(),
        completed = judgment.is_completed(),
    );
    judgment
}
