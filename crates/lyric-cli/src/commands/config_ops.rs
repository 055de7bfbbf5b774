use std::io::Write;

use lyric_engine::keymap::{parse_layout_toml, KanaLayout, DEFAULT_KEYMAP_TOML};
use lyric_engine::settings::{self, parse_settings_toml};
use lyric_engine::table::{parse_pattern_toml, PatternTable, DEFAULT_PATTERNS_TOML};

use crate::{read_file, CliError};

/// Install custom TOML files before any line is compiled or judged.
pub fn install(
    settings_file: Option<&str>,
    patterns_file: Option<&str>,
    keymap_file: Option<&str>,
) -> Result<(), CliError> {
    if let Some(path) = settings_file {
        settings::init_custom(read_file(path)?)?;
    }
    if let Some(path) = patterns_file {
        PatternTable::init_custom(read_file(path)?)?;
    }
    if let Some(path) = keymap_file {
        KanaLayout::init_custom(read_file(path)?)?;
    }
    Ok(())
}

pub fn patterns_export(out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{DEFAULT_PATTERNS_TOML}")?;
    Ok(())
}

pub fn patterns_validate(file: &str, out: &mut impl Write) -> Result<(), CliError> {
    let map = parse_pattern_toml(&read_file(file)?)?;
    writeln!(out, "OK: {} entries", map.len())?;
    Ok(())
}

pub fn keymap_export(out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{DEFAULT_KEYMAP_TOML}")?;
    Ok(())
}

pub fn keymap_validate(file: &str, out: &mut impl Write) -> Result<(), CliError> {
    let keys = parse_layout_toml(&read_file(file)?)?;
    writeln!(out, "OK: {} keys", keys.len())?;
    Ok(())
}

pub fn settings_export(out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{}", settings::default_toml())?;
    Ok(())
}

pub fn settings_validate(file: &str, out: &mut impl Write) -> Result<(), CliError> {
    let s = parse_settings_toml(&read_file(file)?)?;
    writeln!(
        out,
        "OK: compiler.period_shorthand={}, romaji.nn_route={}, kana.mark_first={}",
        s.compiler.period_shorthand, s.romaji.nn_route, s.kana.mark_first
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn temp_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_exported_defaults_validate() {
        let mut exported = Vec::new();
        patterns_export(&mut exported).unwrap();
        let file = temp_toml(std::str::from_utf8(&exported).unwrap());
        let mut out = Vec::new();
        patterns_validate(file.path().to_str().unwrap(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("OK: "));

        let mut exported = Vec::new();
        keymap_export(&mut exported).unwrap();
        let file = temp_toml(std::str::from_utf8(&exported).unwrap());
        let mut out = Vec::new();
        keymap_validate(file.path().to_str().unwrap(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("keys\n"));
    }

    #[test]
    fn test_settings_validate() {
        let file = temp_toml(
            "[compiler]\nperiod_shorthand = false\n[romaji]\nnn_route = true\n[kana]\nmark_first = false\n",
        );
        let mut out = Vec::new();
        settings_validate(file.path().to_str().unwrap(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OK: compiler.period_shorthand=false, romaji.nn_route=true, kana.mark_first=false\n"
        );
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        let file = temp_toml("[patterns]\n\"あ\" = []\n");
        let mut out = Vec::new();
        let err = patterns_validate(file.path().to_str().unwrap(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Patterns(_)));
    }
}
