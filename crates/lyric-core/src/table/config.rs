use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct PatternConfig {
    patterns: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum PatternConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[patterns] table is empty")]
    Empty,
    #[error("empty pattern list for key: {0}")]
    EmptyPatterns(String),
    #[error("invalid pattern {pattern:?} for key {key}: must be non-empty lower-case ASCII")]
    InvalidPattern { key: String, pattern: String },
    #[error("pattern table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, patterns>`.
pub fn parse_pattern_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, PatternConfigError> {
    let config: PatternConfig =
        toml::from_str(toml_str).map_err(|e| PatternConfigError::Parse(e.to_string()))?;

    if config.patterns.is_empty() {
        return Err(PatternConfigError::Empty);
    }

    for (key, patterns) in &config.patterns {
        if patterns.is_empty() {
            return Err(PatternConfigError::EmptyPatterns(key.clone()));
        }
        for pattern in patterns {
            let typable = !pattern.is_empty()
                && pattern
                    .chars()
                    .all(|c| c.is_ascii_graphic() && !c.is_ascii_uppercase());
            if !typable {
                return Err(PatternConfigError::InvalidPattern {
                    key: key.clone(),
                    pattern: pattern.clone(),
                });
            }
        }
    }

    Ok(config.patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[patterns]
"あ" = ["a"]
"し" = ["si", "shi"]
"#;
        let map = parse_pattern_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["し"], vec!["si", "shi"]);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_pattern_toml(super::super::DEFAULT_PATTERNS_TOML).unwrap();
        assert!(map.len() > 180, "expected 180+ entries, got {}", map.len());
    }

    #[test]
    fn error_empty_table() {
        let err = parse_pattern_toml("[patterns]\n").unwrap_err();
        assert!(matches!(err, PatternConfigError::Empty));
    }

    #[test]
    fn error_empty_pattern_list() {
        let toml = "[patterns]\n\"あ\" = []\n";
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::EmptyPatterns(_)));
    }

    #[test]
    fn error_uppercase_pattern() {
        let toml = "[patterns]\n\"あ\" = [\"A\"]\n";
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn error_non_ascii_pattern() {
        let toml = "[patterns]\n\"あ\" = [\"あ\"]\n";
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_pattern_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, PatternConfigError::Parse(_)));
    }
}
