//! Character-level Unicode classification for Japanese lyric text.

/// Check the full Hiragana block (U+3040..U+309F). The block also holds the
/// voicing marks (U+3099..U+309C); use [`is_kana_letter`] to exclude them.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// A hiragana syllable, excluding the combining and spacing voicing marks.
pub fn is_kana_letter(c: char) -> bool {
    is_hiragana(c) && !('\u{3099}'..='\u{309C}').contains(&c)
}

/// Small kana that only ever appear as the tail of a contracted sound.
pub fn is_small_kana(c: char) -> bool {
    matches!(
        c,
        'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ' | 'ゕ' | 'ゖ'
    )
}

/// Fold a katakana syllable to hiragana. ー and non-katakana pass through.
pub fn katakana_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Fold full-width ASCII (U+FF01..U+FF5E) and the ideographic space to their
/// half-width forms. Everything else is returned unchanged.
pub fn fold_width(c: char) -> char {
    match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// The key a player presses to type `c` literally, if it is one key on a
/// Latin keyboard. Letters are lower-cased.
pub fn ascii_key(c: char) -> Option<char> {
    let folded = fold_width(c);
    folded
        .is_ascii_graphic()
        .then(|| folded.to_ascii_lowercase())
}

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\u{3000}'
}
