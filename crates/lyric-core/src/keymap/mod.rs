//! Physical key → kana layout for native kana input.
//!
//! Key codes are `KeyboardEvent.code` strings ("KeyT", "Digit3", ...), so the
//! lookup is independent of the OS input method.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_KEYMAP_TOML: &str = include_str!("default_keymap.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct LayoutConfig {
    layout: HashMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[layout] table is empty")]
    Empty,
    #[error("invalid value for layout.{code}: {reason}")]
    InvalidValue { code: String, reason: String },
    #[error("kana layout already initialized")]
    AlreadyInitialized,
}

pub struct KanaLayout {
    /// key code → (normal, shifted)
    keys: HashMap<String, (char, char)>,
}

impl KanaLayout {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LayoutConfigError> {
        parse_layout_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LayoutConfigError::AlreadyInitialized)
    }

    pub fn global() -> &'static KanaLayout {
        static INSTANCE: OnceLock<KanaLayout> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_KEYMAP_TOML);
            KanaLayout {
                keys: parse_layout_toml(toml_str).expect("kana layout TOML must be valid"),
            }
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LayoutConfigError> {
        Ok(Self {
            keys: parse_layout_toml(toml_str)?,
        })
    }

    /// Kana produced by the physical key `code` with the given shift state.
    pub fn lookup(&self, code: &str, shift: bool) -> Option<char> {
        self.keys
            .get(code)
            .map(|&(normal, shifted)| if shift { shifted } else { normal })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub fn parse_layout_toml(toml_str: &str) -> Result<HashMap<String, (char, char)>, LayoutConfigError> {
    let config: LayoutConfig =
        toml::from_str(toml_str).map_err(|e| LayoutConfigError::Parse(e.to_string()))?;
    if config.layout.is_empty() {
        return Err(LayoutConfigError::Empty);
    }

    let mut keys = HashMap::with_capacity(config.layout.len());
    for (code, values) in config.layout {
        if values.len() != 2 {
            return Err(LayoutConfigError::InvalidValue {
                code,
                reason: "value must be [\"normal\", \"shifted\"]".to_string(),
            });
        }
        let normal = single_char(&values[0]);
        let shifted = single_char(&values[1]);
        match (normal, shifted) {
            (Some(n), Some(s)) => {
                keys.insert(code, (n, s));
            }
            _ => {
                return Err(LayoutConfigError::InvalidValue {
                    code,
                    reason: "each entry must be exactly one character".to_string(),
                })
            }
        }
    }
    Ok(keys)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
