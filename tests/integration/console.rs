//! A console-style session driven through the library API: the vocabulary
//! grows as namespaces load, the user types with typos and corrections, and
//! the ranking is read after every keystroke.

use super::common::*;
use typeahead::{Autocomplete, Band, Config, Suggestion};

#[test]
fn test_console_session_walkthrough() {
    let config = Config::from_json(r#"{"suggestion_count": 3}"#).unwrap();
    let mut session = Autocomplete::from_config(&config);
    for token in &CONSOLE_VOCABULARY[..10] {
        session.add_token(token);
    }

    // User starts typing "profiler" but fat-fingers it
    type_query(&mut session, "prfo");
    assert_session_well_formed(&session);

    // A plugin registers more commands mid-query
    for token in &CONSOLE_VOCABULARY[10..] {
        session.add_token(token);
    }
    assert_session_well_formed(&session);

    // Correct the typo
    session.backspace();
    session.backspace();
    assert_eq!(session.query(), "pr");
    type_query(&mut session, "ofile");

    let top = session.suggestions();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0], Suggestion::new("profile", 0));
    assert_eq!(top[1], Suggestion::new("profiler", 1));
    assert_eq!(session.suggestions_within(1).len(), 2);
}

#[test]
fn test_keystroke_rankings_match_brute_force() {
    let mut session = session_with(CONSOLE_VOCABULARY, CONSOLE_VOCABULARY.len());
    let mut typed = String::new();
    for c in "textrue".chars() {
        session.append(c);
        typed.push(c);
        assert_eq!(
            canonical(session.suggestions()),
            canonical(brute_force_ranking(CONSOLE_VOCABULARY, &typed)),
            "after {:?}",
            typed
        );
    }
    assert_eq!(session.suggestions()[0], Suggestion::new("texture", 1));
}

#[test]
fn test_banded_session_matches_exact_top_hit() {
    let mut banded = session_with(CONSOLE_VOCABULARY, 1);
    banded.set_band(Band::Limit(2));
    type_query(&mut banded, "hieght");

    let mut exact = session_with(CONSOLE_VOCABULARY, 1);
    type_query(&mut exact, "hieght");

    assert_eq!(banded.suggestions(), vec![Suggestion::new("height", 1)]);
    assert_eq!(banded.suggestions(), exact.suggestions());
}

#[test]
fn test_reload_vocabulary() {
    let mut session = session_with(SCENARIO_TOKENS, 2);
    type_query(&mut session, "win");

    session.clear_token_pool();
    for token in ["width", "window", "wireframe"] {
        session.add_token(token);
    }
    type_query(&mut session, "wid");

    assert_eq!(session.suggestions()[0], Suggestion::new("width", 2));
    assert_session_well_formed(&session);
}
