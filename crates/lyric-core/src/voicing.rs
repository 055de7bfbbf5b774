//! Dakuten (゛) and handakuten (゜) composition.

pub const DAKUTEN: char = '゛';
pub const HANDAKUTEN: char = '゜';

/// (base, mark, voiced)
const VOICED: &[(char, char, char)] = &[
    ('か', DAKUTEN, 'が'),
    ('き', DAKUTEN, 'ぎ'),
    ('く', DAKUTEN, 'ぐ'),
    ('け', DAKUTEN, 'げ'),
    ('こ', DAKUTEN, 'ご'),
    ('さ', DAKUTEN, 'ざ'),
    ('し', DAKUTEN, 'じ'),
    ('す', DAKUTEN, 'ず'),
    ('せ', DAKUTEN, 'ぜ'),
    ('そ', DAKUTEN, 'ぞ'),
    ('た', DAKUTEN, 'だ'),
    ('ち', DAKUTEN, 'ぢ'),
    ('つ', DAKUTEN, 'づ'),
    ('て', DAKUTEN, 'で'),
    ('と', DAKUTEN, 'ど'),
    ('は', DAKUTEN, 'ば'),
    ('ひ', DAKUTEN, 'び'),
    ('ふ', DAKUTEN, 'ぶ'),
    ('へ', DAKUTEN, 'べ'),
    ('ほ', DAKUTEN, 'ぼ'),
    ('は', HANDAKUTEN, 'ぱ'),
    ('ひ', HANDAKUTEN, 'ぴ'),
    ('ふ', HANDAKUTEN, 'ぷ'),
    ('へ', HANDAKUTEN, 'ぺ'),
    ('ほ', HANDAKUTEN, 'ぽ'),
    ('う', DAKUTEN, 'ゔ'),
];

/// Fold the spacing, combining (U+3099/U+309A) and half-width forms of a
/// voicing mark to the spacing form. Returns `None` for anything else.
pub fn normalize_mark(c: char) -> Option<char> {
    match c {
        '゛' | '\u{3099}' | 'ﾞ' => Some(DAKUTEN),
        '゜' | '\u{309A}' | 'ﾟ' => Some(HANDAKUTEN),
        _ => None,
    }
}

pub fn compose(base: char, mark: char) -> Option<char> {
    let mark = normalize_mark(mark)?;
    VOICED
        .iter()
        .find(|&&(b, m, _)| b == base && m == mark)
        .map(|&(_, _, voiced)| voiced)
}

/// Split a voiced kana into its base and spacing mark.
pub fn decompose(voiced: char) -> Option<(char, char)> {
    VOICED
        .iter()
        .find(|&&(_, _, v)| v == voiced)
        .map(|&(base, mark, _)| (base, mark))
}
