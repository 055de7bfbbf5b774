use super::{line, run, type_romaji};
use crate::{judge_with, InputMode, JudgeOptions, Judgment, KeyEvent};

fn press(state: &crate::LineState, key: char) -> Judgment {
    judge_with(
        &KeyEvent::from_char(key),
        InputMode::Romaji,
        state,
        &JudgeOptions::default(),
    )
}

#[test]
fn test_first_key_narrows_candidates() {
    let state = line("し");
    let next = press(&state, 's').into_state(state);
    assert_eq!(next.current().unwrap().patterns, ["i", "hi"]);
    assert_eq!(next.current_typed(), "s");
    assert_eq!(next.confirmed_romaji(), "s");
    assert_eq!(next.confirmed_kana(), "");
}

#[test]
fn test_alternate_spelling_completes() {
    let run = type_romaji(line("し"), "shi");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
    assert_eq!(run.state.confirmed_kana(), "し");
    assert_eq!(run.state.confirmed_romaji(), "shi");
}

#[test]
fn test_fail_leaves_state_unchanged() {
    let state = line("か");
    let judgment = press(&state, 'q');
    assert_eq!(judgment, Judgment::Fail { key: 'q' });
    assert!(judgment.state().is_none());
    let next = judgment.into_state(state.clone());
    assert_eq!(next, state);
}

#[test]
fn test_repeated_fail_is_idempotent() {
    let run = type_romaji(line("か"), "kxxx");
    assert_eq!(run.successes, 1);
    assert_eq!(run.fails, 3);
    assert_eq!(run.state.current().unwrap().patterns, ["a"]);
}

#[test]
fn test_uppercase_and_full_width_keys_fold() {
    let run = type_romaji(line("か"), "K");
    assert_eq!(run.fails, 0);
    let run = type_romaji(run.state, "ａ");
    assert!(run.completed);
    assert_eq!(run.state.confirmed_romaji(), "ka");
}

#[test]
fn test_completed_state_rejects_keys() {
    let run = type_romaji(line("あ"), "a");
    assert!(run.completed);
    assert!(run.state.is_completed());
    let judgment = press(&run.state, 'a');
    assert_eq!(judgment.fail_key(), Some('a'));
}

#[test]
fn test_empty_line_is_completed() {
    let state = line("");
    assert!(state.is_completed());
    assert!(press(&state, 'a').fail_key().is_some());
}

#[test]
fn test_remaining_romaji_follows_narrowing() {
    let state = line("ちゃ");
    assert_eq!(state.remaining_romaji(), "tya");
    let run = type_romaji(state, "c");
    assert_eq!(run.state.remaining_romaji(), "ha");
    let run = type_romaji(run.state, "ha");
    assert!(run.completed);
    assert_eq!(run.state.confirmed_kana(), "ちゃ");
}

#[test]
fn test_decomposed_contracted_spelling() {
    let run = type_romaji(line("きゃ"), "kixya");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
}

#[test]
fn test_nasal_before_consonant_single_n() {
    let run = type_romaji(line("かんき"), "kanki");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
    assert_eq!(run.state.confirmed_kana(), "かんき");
}

#[test]
fn test_nasal_nn_route() {
    let run = type_romaji(line("かんき"), "kannki");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
    assert_eq!(run.state.confirmed_romaji(), "kannki");
}

#[test]
fn test_nn_route_only_once() {
    let run = type_romaji(line("かんき"), "kannn");
    assert_eq!(run.successes, 4);
    assert_eq!(run.fails, 1);
    assert_eq!(run.state.current_kana(), "き");
}

#[test]
fn test_nn_route_disabled() {
    let options = JudgeOptions {
        nn_route: false,
        ..JudgeOptions::default()
    };
    let run = run(
        line("かんき"),
        "kann".chars().map(KeyEvent::from_char),
        InputMode::Romaji,
        &options,
    );
    assert_eq!(run.fails, 1);
}

#[test]
fn test_nn_route_not_after_xn() {
    let run = type_romaji(line("んき"), "xnn");
    assert_eq!(run.fails, 1);
}

#[test]
fn test_nasal_before_vowel_needs_double() {
    let run = type_romaji(line("かんな"), "kana");
    assert_eq!(run.fails, 1);
    assert_eq!(run.state.confirmed_kana(), "か");
    let run = type_romaji(run.state, "nna");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
}

#[test]
fn test_apostrophe_nasal() {
    let run = type_romaji(line("きんえん"), "kin'enn");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
}

#[test]
fn test_geminate_spellings() {
    for keys in ["tta", "xtuta", "ltsuta"] {
        let run = type_romaji(line("った"), keys);
        assert_eq!(run.fails, 0, "{keys}");
        assert!(run.completed, "{keys}");
        assert_eq!(run.state.confirmed_kana(), "った");
    }
}

#[test]
fn test_symbols_and_spaces() {
    let run = type_romaji(line("らー、 ａ"), "ra-, a");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
}

#[test]
fn test_period_shorthand() {
    let run = type_romaji(line("あ..."), "az.");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
    let run = type_romaji(line("あ..."), "a...");
    assert!(run.completed);
}

#[test]
fn test_judgment_keys() {
    let state = line("か");
    let judgment = press(&state, 'k');
    assert_eq!(judgment.success_key(), Some('k'));
    assert_eq!(judgment.fail_key(), None);
    assert!(!judgment.is_completed());
    let state = judgment.into_state(state);
    let judgment = press(&state, 'a');
    assert!(judgment.is_completed());
    assert_eq!(judgment.success_key(), Some('a'));
}

#[test]
fn test_apostrophe_after_single_n() {
    let run = type_romaji(line("んか"), "n'ka");
    assert_eq!(run.fails, 0);
    assert!(run.completed);
    assert_eq!(run.state.confirmed_romaji(), "n'ka");
    let run = type_romaji(line("んか"), "n''");
    assert_eq!(run.fails, 1);
}
