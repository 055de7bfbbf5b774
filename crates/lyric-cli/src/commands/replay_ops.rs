use std::io::Write;

use lyric_engine::keymap::KanaLayout;
use lyric_engine::{compile_line, judge, InputMode, Judgment, KeyEvent};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub keys: usize,
    pub misses: usize,
    pub completed: bool,
}

/// Parse a kana-mode key token: a `KeyboardEvent.code` with an optional
/// `+shift` suffix ("KeyT", "KeyZ+shift", "Space"), or a single literal
/// character.
pub fn parse_key_token(token: &str) -> Result<KeyEvent, CliError> {
    let (code, shift) = match token.strip_suffix("+shift") {
        Some(code) => (code, true),
        None => (token, false),
    };
    if let Some(kana) = KanaLayout::global().lookup(code, shift) {
        return Ok(KeyEvent::new(kana, code, shift));
    }
    if code == "Space" {
        return Ok(KeyEvent::new(' ', code, shift));
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyEvent::from_char(c)),
        _ => Err(CliError::KeyToken(token.to_string())),
    }
}

/// Feed `keys` through the judge and print one row per key.
///
/// Romaji keys are the characters of `keys`; kana keys are whitespace
/// separated tokens (see `parse_key_token`).
pub fn replay(
    line: &str,
    keys: &str,
    kana: bool,
    out: &mut impl Write,
) -> Result<ReplaySummary, CliError> {
    let (mode, events) = if kana {
        let events = keys
            .split_whitespace()
            .map(parse_key_token)
            .collect::<Result<Vec<_>, _>>()?;
        (InputMode::Kana, events)
    } else {
        (InputMode::Romaji, keys.chars().map(KeyEvent::from_char).collect())
    };

    let mut state = compile_line(line)?;
    let mut misses = 0;
    for (i, event) in events.iter().enumerate() {
        let judgment = judge(event, mode, &state);
        let outcome = match &judgment {
            Judgment::Success { .. } => "ok",
            Judgment::Completed { .. } => "done",
            Judgment::Fail { .. } => {
                misses += 1;
                "miss"
            }
        };
        state = judgment.into_state(state);
        writeln!(
            out,
            "{:>3}  {:<12}  {:<4}  {}|{}",
            i + 1,
            describe(event),
            outcome,
            state.confirmed_kana(),
            state.remaining_kana()
        )?;
    }

    let summary = ReplaySummary {
        keys: events.len(),
        misses,
        completed: state.is_completed(),
    };
    writeln!(
        out,
        "{} keys, {} misses, {}",
        summary.keys,
        summary.misses,
        if summary.completed { "completed" } else { "incomplete" }
    )?;
    Ok(summary)
}

fn describe(event: &KeyEvent) -> String {
    match (event.code.is_empty(), event.shift) {
        (true, _) => format!("{:?}", event.key),
        (false, true) => format!("{}+shift", event.code),
        (false, false) => event.code.clone(),
    }
}
