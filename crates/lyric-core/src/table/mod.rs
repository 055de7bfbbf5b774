//! Kana → romaji pattern table.
//!
//! Each entry maps a kana unit (a single kana, a contracted digraph such as
//! "きゃ", or a symbol) to every keystroke spelling a player may use for it.
//! The table is loaded from TOML once per process.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_pattern_toml, PatternConfigError};

pub const DEFAULT_PATTERNS_TOML: &str = include_str!("default_patterns.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct PatternTable {
    entries: HashMap<String, Vec<String>>,
    max_key_chars: usize,
}

impl PatternTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PatternConfigError> {
        // Validate eagerly
        parse_pattern_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PatternConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PatternTable {
        static INSTANCE: OnceLock<PatternTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_PATTERNS_TOML);
            PatternTable::from_toml(toml_str).expect("pattern TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PatternConfigError> {
        let map = parse_pattern_toml(toml_str)?;
        let max_key_chars = map.keys().map(|k| k.chars().count()).max().unwrap_or(1);
        Ok(Self {
            entries: map.into_iter().collect(),
            max_key_chars,
        })
    }

    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn lookup_char(&self, c: char) -> Option<&[String]> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Length in chars of the longest key; bounds the tokenizer's lookahead.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
