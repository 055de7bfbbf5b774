use super::push_unique;
use crate::chunk::Chunk;
use crate::table::PatternTable;
use crate::unicode::is_small_kana;

/// Give every contracted sound its decomposed spellings.
///
/// A digraph chunk ("きゃ") keeps its contracted patterns ("kya") and gains
/// base × small-kana combinations ("kixya", "kilya"). A single kana followed
/// by a separate small-kana chunk that together form a registered digraph
/// (e.g. "ゔ" + "ぁ" after dakuten composition) is merged the same way.
pub(super) fn expand_contracted(chunks: Vec<Chunk>, table: &PatternTable) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let merged = out
            .last()
            .filter(|prev| prev.kana.chars().count() == 1 && starts_small(&chunk))
            .and_then(|prev| contracted(format!("{}{}", prev.kana, chunk.kana), table));
        if let Some(merged) = merged {
            out.pop();
            out.push(merged);
            continue;
        }
        match contracted(chunk.kana.clone(), table) {
            Some(expanded) => out.push(expanded),
            None => out.push(chunk),
        }
    }
    out
}

fn starts_small(chunk: &Chunk) -> bool {
    chunk.kana.chars().next().is_some_and(is_small_kana)
}

/// Build a digraph chunk, or `None` when `digraph` is not a registered
/// two-kana contracted sound.
fn contracted(digraph: String, table: &PatternTable) -> Option<Chunk> {
    let mut chars = digraph.chars();
    let (base, small) = match (chars.next(), chars.next(), chars.next()) {
        (Some(b), Some(s), None) if is_small_kana(s) => (b, s),
        _ => return None,
    };
    let mut patterns = table.lookup(&digraph)?.to_vec();
    let base_patterns = table.lookup_char(base)?;
    let small_patterns = table.lookup_char(small)?;
    for b in base_patterns {
        for s in small_patterns {
            push_unique(&mut patterns, format!("{b}{s}"));
        }
    }
    Some(Chunk::new(digraph, patterns))
}
