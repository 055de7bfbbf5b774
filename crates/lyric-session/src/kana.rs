use lyric_core::keymap::KanaLayout;
use lyric_core::table::PatternTable;
use lyric_core::unicode::{fold_width, is_kana_letter, katakana_to_hiragana};
use lyric_core::voicing::{decompose, normalize_mark};
use tracing::trace;

use crate::line_state::LineState;
use crate::types::{JudgeOptions, Judgment, KeyEvent};

/// Judge one key in kana mode, one kana character per key.
///
/// A voiced kana is accepted whole, as base then mark, or (with
/// `mark_first`) as mark then base. Symbols with no key of their own (…, ‥)
/// are typed by their romaji spelling.
pub(crate) fn judge_kana(event: &KeyEvent, state: &LineState, options: &JudgeOptions) -> Judgment {
    let key = event.key;
    let Some(head) = state.current.as_ref().and_then(|c| c.kana.chars().next()) else {
        return Judgment::Fail { key };
    };
    let candidates = candidates(event);

    let mut next = state.clone();
    next.nasal_tail = false;
    if state.pending_mark.is_none() && accepts(head, &candidates) {
        consume_head(&mut next, head);
    } else if let Some((base, mark)) = decompose(head) {
        match state.pending_mark {
            Some(pending) if pending == mark && candidates.contains(&base) => {
                trace!(%head, "mark then base");
                consume_head(&mut next, head);
            }
            Some(_) => return Judgment::Fail { key },
            None if candidates.contains(&base) => {
                trace!(%head, "base then mark");
                next.confirmed.kana.push(base);
                replace_head(&mut next, mark);
            }
            None if options.mark_first && candidates.contains(&mark) => {
                next.pending_mark = Some(mark);
            }
            None => return Judgment::Fail { key },
        }
    } else if !spell_symbol(&mut next, head, &candidates) {
        return Judgment::Fail { key };
    }

    Judgment::accepted(next, key)
}

/// Characters the event could stand for: the layout's kana for the physical
/// key, then the produced character itself.
fn candidates(event: &KeyEvent) -> Vec<char> {
    let mut out = Vec::with_capacity(2);
    if let Some(kana) = KanaLayout::global().lookup(&event.code, event.shift) {
        out.push(kana);
    }
    let produced = katakana_to_hiragana(event.key);
    out.push(normalize_mark(produced).unwrap_or(produced));
    out
}

fn accepts(head: char, candidates: &[char]) -> bool {
    let folded = fold(head);
    if candidates.iter().any(|&c| fold(c) == folded) {
        return true;
    }
    // punctuation such as ー or 。 also takes its single-key romaji
    !is_kana_letter(head)
        && symbol_key(head).is_some_and(|alias| candidates.iter().any(|&c| fold(c) == alias))
}

fn fold(c: char) -> char {
    fold_width(c).to_ascii_lowercase()
}

fn symbol_key(c: char) -> Option<char> {
    PatternTable::global()
        .lookup_char(c)?
        .iter()
        .find_map(|p| {
            let mut chars = p.chars();
            match (chars.next(), chars.next()) {
                (Some(only), None) => Some(only),
                _ => None,
            }
        })
}

/// Narrow a keyless symbol's spellings by one romaji key, entering the
/// symbol once a spelling is used up.
fn spell_symbol(state: &mut LineState, head: char, candidates: &[char]) -> bool {
    if is_kana_letter(head) || symbol_key(head).is_some() {
        return false;
    }
    let Some(chunk) = state.current.as_ref().filter(|c| c.kana.chars().count() == 1) else {
        return false;
    };
    let Some((key, survivors)) = candidates.iter().map(|&c| fold(c)).find_map(|key| {
        let survivors: Vec<String> = chunk
            .patterns
            .iter()
            .filter_map(|p| p.strip_prefix(key))
            .map(str::to_string)
            .collect();
        (!survivors.is_empty()).then_some((key, survivors))
    }) else {
        return false;
    };

    trace!(%head, %key, "symbol spelled out");
    state.confirmed.romaji.push(key);
    state.current_typed.push(key);
    let done = survivors.iter().any(String::is_empty);
    if let Some(chunk) = state.current.as_mut() {
        chunk.patterns = if done { vec![String::new()] } else { survivors };
    }
    if done {
        consume_head(state, head);
    }
    true
}

/// Enter the head character of the current chunk. A lone mark voices the
/// kana entered just before it.
fn consume_head(state: &mut LineState, head: char) {
    let mut buf = [0u8; 4];
    state.confirm_kana(head.encode_utf8(&mut buf));
    state.pending_mark = None;

    let Some(chunk) = state.current.as_mut() else {
        return;
    };
    chunk.kana.remove(0);
    if chunk.kana.is_empty() {
        let romaji = chunk.canonical().to_string();
        state.confirmed.romaji.push_str(&romaji);
        state.advance();
    }
}

fn replace_head(state: &mut LineState, with: char) {
    if let Some(chunk) = state.current.as_mut() {
        chunk.kana.remove(0);
        chunk.kana.insert(0, with);
    }
}
