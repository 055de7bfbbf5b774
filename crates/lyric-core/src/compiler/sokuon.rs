use super::push_unique;
use crate::chunk::{Chunk, ChunkCategory};

const SOKUON: &str = "っ";

/// Fuse "っ" into the following kana chunk when its canonical spelling starts
/// with a geminable consonant: "っ" + "た" → "った" with "tta" first, then
/// every "っ" spelling ("xtu", "ltu", ...) prefixed to every follower spelling.
///
/// Runs right to left so "っった" fuses inner-first.
pub(super) fn fuse_geminates(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for chunk in chunks.into_iter().rev() {
        if chunk.kana == SOKUON {
            if let Some(fused) = out.last().and_then(|follower| geminate(&chunk, follower)) {
                out.pop();
                out.push(fused);
                continue;
            }
        }
        out.push(chunk);
    }
    out.reverse();
    out
}

fn geminate(sokuon: &Chunk, follower: &Chunk) -> Option<Chunk> {
    if follower.category != ChunkCategory::Kana {
        return None;
    }
    let lead = follower.canonical().chars().next()?;
    if !is_geminable(lead) {
        return None;
    }

    let mut patterns = Vec::new();
    for p in &follower.patterns {
        if let Some(c) = p.chars().next().filter(|&c| is_geminable(c)) {
            push_unique(&mut patterns, format!("{c}{p}"));
        }
    }
    for prefix in &sokuon.patterns {
        for p in &follower.patterns {
            push_unique(&mut patterns, format!("{prefix}{p}"));
        }
    }
    Some(Chunk::new(
        format!("{}{}", sokuon.kana, follower.kana),
        patterns,
    ))
}

/// Consonants that double to mark gemination; vowels and "n" never do.
fn is_geminable(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'n')
}
