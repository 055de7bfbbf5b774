fn main() {
    // Embedded defaults must parse and carry their top-level table; the
    // OnceLock loaders rely on it.
    check_embedded(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["compiler", "romaji", "kana"],
    );
    check_embedded(
        "src/table/default_patterns.toml",
        include_str!("src/table/default_patterns.toml"),
        &["patterns"],
    );
    check_embedded(
        "src/keymap/default_keymap.toml",
        include_str!("src/keymap/default_keymap.toml"),
        &["layout"],
    );
}

fn check_embedded(path: &str, content: &str, sections: &[&str]) {
    println!("cargo:rerun-if-changed={path}");
    let value = match content.parse::<toml::Table>() {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in sections {
        match value.get(*section) {
            Some(toml::Value::Table(t)) if !t.is_empty() => {}
            _ => panic!("{path}: missing or empty [{section}] table"),
        }
    }
}
