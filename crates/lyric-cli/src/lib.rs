//! Command implementations behind the `typetool` binary.
//!
//! Each command writes its report to a caller-supplied writer and returns a
//! `CliError` on failure; the binary prints the error and exits non-zero.

pub mod commands;

use lyric_engine::keymap::LayoutConfigError;
use lyric_engine::settings::SettingsError;
use lyric_engine::table::PatternConfigError;
use lyric_engine::CompileError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Compile(#[from] CompileError),
    #[error("invalid key {0:?}: expected a key code such as KeyT or KeyZ+shift")]
    KeyToken(String),
    #[error("pattern table: {0}")]
    Patterns(#[from] PatternConfigError),
    #[error("kana layout: {0}")]
    Layout(#[from] LayoutConfigError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write: {0}")]
    Write(#[from] std::io::Error),
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
