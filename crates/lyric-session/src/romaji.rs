use lyric_core::unicode::fold_width;
use tracing::trace;

use crate::line_state::LineState;
use crate::types::{JudgeOptions, Judgment};

const HATSUON: &str = "ん";

/// Judge one romaji key against the current chunk's candidate spellings.
pub(crate) fn judge_romaji(key: char, state: &LineState, options: &JudgeOptions) -> Judgment {
    let key = fold_width(key).to_ascii_lowercase();
    let Some(current) = state.current.as_ref() else {
        return Judgment::Fail { key };
    };

    let survivors: Vec<String> = current
        .patterns
        .iter()
        .filter_map(|p| p.strip_prefix(key))
        .map(str::to_string)
        .collect();

    if survivors.is_empty() {
        // "nn" or "n'" for a ん already closed by its single "n"
        if options.nn_route && state.nasal_tail && (key == 'n' || key == '\'') {
            trace!("nn route");
            let mut next = state.clone();
            next.confirmed.romaji.push(key);
            next.nasal_tail = false;
            return Judgment::accepted(next, key);
        }
        return Judgment::Fail { key };
    }

    let mut next = state.clone();
    next.confirmed.romaji.push(key);
    next.current_typed.push(key);
    next.nasal_tail = false;

    if survivors.iter().any(String::is_empty) {
        let kana = current.kana.as_str();
        next.confirm_kana(kana);
        let nasal = kana == HATSUON && next.current_typed == "n";
        trace!(kana, typed = %next.current_typed, "chunk complete");
        next.advance();
        next.nasal_tail = nasal;
    } else if let Some(chunk) = next.current.as_mut() {
        chunk.patterns = survivors;
    }

    Judgment::accepted(next, key)
}
