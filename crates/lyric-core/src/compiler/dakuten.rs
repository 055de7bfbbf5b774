use crate::chunk::Chunk;
use crate::table::PatternTable;
use crate::voicing::{compose, normalize_mark};

/// Fold a standalone voicing mark into the single kana before it
/// ("か" + "゛" → "が"). Marks that cannot compose are left as-is and fail
/// validation.
pub(super) fn compose_voicing_marks(chunks: Vec<Chunk>, table: &PatternTable) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let mark = single_char(&chunk.kana).and_then(normalize_mark);
        if let Some(voiced) = mark.and_then(|m| out.last().and_then(|prev| voiced(prev, m, table)))
        {
            out.pop();
            out.push(voiced);
            continue;
        }
        out.push(chunk);
    }
    out
}

fn voiced(prev: &Chunk, mark: char, table: &PatternTable) -> Option<Chunk> {
    let base = single_char(&prev.kana)?;
    let voiced = compose(base, mark)?;
    let patterns = table.lookup_char(voiced)?.to_vec();
    Some(Chunk::new(voiced.to_string(), patterns))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(kana: &str, patterns: &[&str]) -> Chunk {
        Chunk::new(kana, patterns.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_compose_dakuten() {
        let table = PatternTable::global();
        let out = compose_voicing_marks(vec![chunk("か", &["ka", "ca"]), chunk("゛", &[])], table);
        assert_eq!(out, vec![chunk("が", &["ga"])]);
    }

    #[test]
    fn test_compose_combining_handakuten() {
        let table = PatternTable::global();
        let out = compose_voicing_marks(vec![chunk("は", &["ha"]), chunk("\u{309A}", &[])], table);
        assert_eq!(out, vec![chunk("ぱ", &["pa"])]);
    }

    #[test]
    fn test_compose_vu() {
        let table = PatternTable::global();
        let out = compose_voicing_marks(vec![chunk("う", &["u"]), chunk("゛", &[])], table);
        assert_eq!(out, vec![chunk("ゔ", &["vu"])]);
    }

    #[test]
    fn test_orphan_mark_kept() {
        let table = PatternTable::global();
        let out = compose_voicing_marks(vec![chunk("あ", &["a"]), chunk("゛", &[])], table);
        assert_eq!(out.len(), 2);
        assert!(out[1].patterns.is_empty());
    }

    #[test]
    fn test_leading_mark_kept() {
        let table = PatternTable::global();
        let out = compose_voicing_marks(vec![chunk("゜", &[])], table);
        assert_eq!(out.len(), 1);
    }
}
