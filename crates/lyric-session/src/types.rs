use lyric_core::settings::Settings;

use super::line_state::LineState;

/// One physical key press as reported by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Character the key produced.
    pub key: char,
    /// Physical key identifier (`KeyboardEvent.code`, e.g. "KeyT").
    pub code: String,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: char, code: impl Into<String>, shift: bool) -> Self {
        Self {
            key,
            code: code.into(),
            shift,
        }
    }

    /// An event known only by its character, as in romaji input.
    pub fn from_char(key: char) -> Self {
        Self {
            key,
            code: String::new(),
            shift: key.is_ascii_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Romaji,
    Kana,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Romaji => Self::Kana,
            Self::Kana => Self::Romaji,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgeOptions {
    /// Accept "nn" for a ん already completed by a single "n".
    pub nn_route: bool,
    /// Accept ゛/゜ before the base kana in kana mode.
    pub mark_first: bool,
}

impl Default for JudgeOptions {
    fn default() -> Self {
        Self {
            nn_route: true,
            mark_first: true,
        }
    }
}

impl JudgeOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            nn_route: settings.romaji.nn_route,
            mark_first: settings.kana.mark_first,
        }
    }
}

/// Outcome of judging one key. A fail carries no state: the caller keeps the
/// one it passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgment {
    Success { state: LineState, key: char },
    Completed { state: LineState, key: char },
    Fail { key: char },
}

impl Judgment {
    pub fn success_key(&self) -> Option<char> {
        match self {
            Self::Success { key, .. } | Self::Completed { key, .. } => Some(*key),
            Self::Fail { .. } => None,
        }
    }

    pub fn fail_key(&self) -> Option<char> {
        match self {
            Self::Fail { key } => Some(*key),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn state(&self) -> Option<&LineState> {
        match self {
            Self::Success { state, .. } | Self::Completed { state, .. } => Some(state),
            Self::Fail { .. } => None,
        }
    }

    /// The state to continue from: the new one on success, `previous` on fail.
    pub fn into_state(self, previous: LineState) -> LineState {
        match self {
            Self::Success { state, .. } | Self::Completed { state, .. } => state,
            Self::Fail { .. } => previous,
        }
    }

    /// Wrap a state that just accepted `key`.
    pub(super) fn accepted(state: LineState, key: char) -> Self {
        if state.is_completed() {
            Self::Completed { state, key }
        } else {
            Self::Success { state, key }
        }
    }
}
