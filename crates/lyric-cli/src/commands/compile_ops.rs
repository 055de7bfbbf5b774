use std::io::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lyric_engine::{canonical_romaji, compile_chunks, Chunk};

use crate::CliError;

#[derive(Serialize)]
struct CompileReport<'a> {
    line: &'a str,
    canonical: String,
    chunks: &'a [Chunk],
}

/// Print the chunks of `line`, one per row, or the whole report as JSON.
pub fn compile(line: &str, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let chunks = compile_chunks(line)?;
    let canonical = canonical_romaji(&chunks);

    if json {
        let report = CompileReport {
            line,
            canonical,
            chunks: &chunks,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let kana_width = chunks.iter().map(|c| c.kana.width()).max().unwrap_or(0);
    for chunk in &chunks {
        let pad = kana_width - chunk.kana.width();
        writeln!(
            out,
            "{}{}  {:<8}  {}",
            chunk.kana,
            " ".repeat(pad),
            chunk.category.as_str(),
            chunk.patterns.join(" ")
        )?;
    }
    writeln!(out, "canonical: {canonical} ({} keys)", canonical.chars().count())?;
    Ok(())
}
