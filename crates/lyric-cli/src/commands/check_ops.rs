use std::io::Write;

use lyric_engine::{canonical_romaji, compile_chunks};

use crate::{read_file, CliError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub lines: usize,
    pub untypable: usize,
    pub keystrokes: usize,
}

/// Compile every non-blank line of a lyrics file and report the canonical
/// keystroke count of each, or why it cannot be typed.
pub fn check(path: &str, out: &mut impl Write) -> Result<CheckSummary, CliError> {
    let content = read_file(path)?;
    let mut summary = CheckSummary::default();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        summary.lines += 1;
        match compile_chunks(line) {
            Ok(chunks) => {
                let keys = canonical_romaji(&chunks).chars().count();
                summary.keystrokes += keys;
                writeln!(out, "{:>4}  {:>4}  {line}", lineno + 1, keys)?;
            }
            Err(e) => {
                summary.untypable += 1;
                writeln!(out, "{:>4}  ERR   {line}  ({e})", lineno + 1)?;
            }
        }
    }

    writeln!(
        out,
        "{} lines, {} untypable, {} keystrokes",
        summary.lines, summary.untypable, summary.keystrokes
    )?;
    Ok(summary)
}
