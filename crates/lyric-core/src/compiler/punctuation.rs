use crate::chunk::Chunk;

/// Collapse a run of exactly two or three periods into one chunk accepting
/// the z-sequence shorthand ("z," for "‥", "z." for "…") before the literal
/// run. Longer runs stay one chunk per period.
pub(super) fn collapse_periods(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());
    let mut iter = chunks.into_iter().peekable();
    while let Some(chunk) = iter.next() {
        if !is_period(&chunk) {
            out.push(chunk);
            continue;
        }
        let mut run = vec![chunk];
        while let Some(next) = iter.next_if(is_period) {
            run.push(next);
        }
        match shorthand(run.len()) {
            Some(short) => {
                let kana: String = run.iter().map(|c| c.kana.as_str()).collect();
                let literal = ".".repeat(run.len());
                out.push(Chunk::new(kana, vec![short.to_string(), literal]));
            }
            None => out.extend(run),
        }
    }
    out
}

fn is_period(chunk: &Chunk) -> bool {
    chunk.kana == "." || chunk.kana == "．"
}

fn shorthand(run_len: usize) -> Option<&'static str> {
    match run_len {
        2 => Some("z,"),
        3 => Some("z."),
        _ => None,
    }
}
