use super::push_unique;
use crate::chunk::{Chunk, ChunkCategory};

const HATSUON: &str = "ん";

/// Rewrite "ん" where a bare "n" cannot stand on its own.
///
/// - at line end or before a space: only "nn" and "n'"
/// - before a chunk that could continue a bare "n" (vowel, "y", "n"):
///   "n" becomes "nn" / "n'", other spellings stay
pub(super) fn disambiguate_nasals(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
    for i in 0..chunks.len() {
        if chunks[i].kana != HATSUON {
            continue;
        }
        let rewritten = match chunks.get(i + 1) {
            None => Some(forced()),
            Some(next) if next.category == ChunkCategory::Space => Some(forced()),
            Some(next) if continues_bare_n(next) => Some(doubled(&chunks[i].patterns)),
            Some(_) => None,
        };
        if let Some(patterns) = rewritten {
            chunks[i].patterns = patterns;
        }
    }
    chunks
}

fn forced() -> Vec<String> {
    vec!["nn".to_string(), "n'".to_string()]
}

fn doubled(patterns: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(patterns.len() + 1);
    for p in patterns {
        if p == "n" {
            push_unique(&mut out, "nn".to_string());
            push_unique(&mut out, "n'".to_string());
        } else {
            push_unique(&mut out, p.clone());
        }
    }
    out
}

fn continues_bare_n(next: &Chunk) -> bool {
    next.patterns.iter().any(|p| {
        p.starts_with(|c: char| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'n'))
    })
}
