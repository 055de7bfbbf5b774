mod romaji;

use std::collections::HashMap;
use std::sync::OnceLock;

use lyric_core::keymap::{parse_layout_toml, DEFAULT_KEYMAP_TOML};
use lyric_core::voicing::decompose;

use crate::{compile_line, judge_with, InputMode, JudgeOptions, KeyEvent, LineState};

pub(super) fn line(text: &str) -> LineState {
    compile_line(text).unwrap()
}

/// Tally of a key sequence fed through the judge.
#[derive(Debug)]
pub(super) struct Run {
    pub state: LineState,
    pub successes: usize,
    pub fails: usize,
    pub completed: bool,
}

pub(super) fn run(
    mut state: LineState,
    events: impl IntoIterator<Item = KeyEvent>,
    mode: InputMode,
    options: &JudgeOptions,
) -> Run {
    let mut successes = 0;
    let mut fails = 0;
    let mut completed = false;
    for event in events {
        let judgment = judge_with(&event, mode, &state, options);
        if judgment.fail_key().is_some() {
            fails += 1;
        } else {
            successes += 1;
        }
        completed = judgment.is_completed();
        state = judgment.into_state(state);
    }
    Run {
        state,
        successes,
        fails,
        completed,
    }
}

pub(super) fn type_romaji(state: LineState, keys: &str) -> Run {
    run(
        state,
        keys.chars().map(KeyEvent::from_char),
        InputMode::Romaji,
        &JudgeOptions::default(),
    )
}

pub(super) fn type_kana(state: LineState, events: Vec<KeyEvent>) -> Run {
    run(state, events, InputMode::Kana, &JudgeOptions::default())
}

/// Physical key for each kana on the default layout.
fn reverse_layout() -> &'static HashMap<char, (String, bool)> {
    static MAP: OnceLock<HashMap<char, (String, bool)>> = OnceLock::new();
    MAP.get_or_init(|| {
        let layout = parse_layout_toml(DEFAULT_KEYMAP_TOML).unwrap();
        let mut map = HashMap::new();
        for (code, (normal, shifted)) in layout {
            map.entry(normal).or_insert((code.clone(), false));
            map.entry(shifted).or_insert((code, true));
        }
        map
    })
}

/// The key event a kana-layout typist produces for `c`.
pub(super) fn kana_key(c: char) -> KeyEvent {
    if c == ' ' || c == '\u{3000}' {
        return KeyEvent::new(' ', "Space", false);
    }
    match reverse_layout().get(&c) {
        Some((code, shift)) => KeyEvent::new(c, code.clone(), *shift),
        None => KeyEvent::from_char(c),
    }
}

/// Key events for `kana`, splitting voiced kana into base then mark.
pub(super) fn kana_events(kana: &str) -> Vec<KeyEvent> {
    let mut out = Vec::new();
    for c in kana.chars() {
        match decompose(c) {
            Some((base, mark)) => {
                out.push(kana_key(base));
                out.push(kana_key(mark));
            }
            None => out.push(kana_key(c)),
        }
    }
    out
}
