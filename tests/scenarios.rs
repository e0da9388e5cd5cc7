//! End-to-end rounds played through the public session API.

use gallows::source::TextSource;
use gallows::{GameOver, GameSession, SessionConfig, SessionError, Status, WordBank};
use std::collections::HashSet;
use std::io::Write;

fn session_with(word: &str, lives: u32) -> GameSession {
    let mut session = GameSession::builder()
        .word(word)
        .max_lives(lives)
        .build()
        .unwrap();
    session.start(None).unwrap();
    session
}

#[test]
fn full_word_reveal_wins() {
    let mut session = session_with("ONE WORD", 6);

    assert_eq!(session.guess_word("ONE WORD").unwrap(), 7);
    assert_eq!(session.guess_count(), 1);
    assert_eq!(session.status(), Status::Won);
    assert!(session.ended_at().is_some());
}

#[test]
fn partial_letter_reveal_then_word() {
    let mut session = session_with("ECHO LOCATION", 6);

    assert_eq!(session.guess_letter("O").unwrap(), 3);
    assert_eq!(session.visible_word(), "___O _O____O_");
    assert_eq!(session.guess_word("ECHO LOCATION").unwrap(), 9);
    assert_eq!(session.guess_count(), 2);
    assert!(session.is_won());
}

#[test]
fn occurrences_are_counted() {
    let mut session = session_with("KITTY CAT", 6);

    assert_eq!(session.guess_letter("M").unwrap(), 0);
    assert_eq!(session.guess_letter("I").unwrap(), 1);
    assert_eq!(session.guess_letter("T").unwrap(), 3);
    assert_eq!(session.guess_word("KITTY CAT").unwrap(), 4);

    let log: Vec<(&str, usize)> = session
        .guesses()
        .iter()
        .map(|g| (g.guess.as_str(), g.revealed))
        .collect();
    assert_eq!(log, vec![("M", 0), ("I", 1), ("T", 3), ("KITTY CAT", 4)]);
    assert_eq!(session.guess_count(), 4);
    assert_eq!(session.lives(), 5);
    assert!(session.is_won());
}

#[test]
fn running_out_of_lives_loses() {
    let mut session = session_with("ABC", 1);

    assert_eq!(session.guess_letter("A").unwrap(), 1);
    assert_eq!(session.lives(), 1);
    assert_eq!(session.guess_letter("Z").unwrap(), 0);
    assert_eq!(session.lives(), 0);
    assert_eq!(session.status(), Status::Lost);
    assert!(session.ended_at().is_some());
}

#[test]
fn last_letter_wins_without_word_guess() {
    let mut session = session_with("AAB", 6);

    assert_eq!(session.guess_letter("A").unwrap(), 2);
    assert!(session.is_active());
    assert_eq!(session.guess_letter("B").unwrap(), 1);
    assert!(session.is_won());
}

#[test]
fn finished_rounds_reject_guesses_without_mutation() {
    for (guess, status) in [("AB", Status::Won), ("X", Status::Lost)] {
        let mut session = session_with("AB", 1);
        session.guess(guess).unwrap();
        assert_eq!(session.status(), status);

        let before = session.round().clone();
        assert_eq!(session.guess_letter("A"), Err(GameOver { status }));
        assert_eq!(session.guess_word("AB"), Err(GameOver { status }));
        assert_eq!(session.round(), &before);
    }
}

#[test]
fn stop_then_start_archives_previous_round() {
    let mut session = GameSession::builder()
        .words(["ABC", "DEF"])
        .max_lives(6)
        .build()
        .unwrap();
    session.start(None).unwrap();
    let word = session.word().to_string();
    session.guess_letter("Q").unwrap();
    let guesses = session.guesses().to_vec();

    session.stop();
    session.start(None).unwrap();

    let archived = session.history().latest().unwrap();
    assert_eq!(archived.word, word);
    assert_eq!(archived.guesses, guesses);
    assert_eq!(archived.status, Status::Active);
    assert_eq!(archived.max_lives, 6);

    assert!(session.guesses().is_empty());
    assert_eq!(session.visible_letters().iter().collect::<Vec<_>>(), vec![&' ']);
    assert_eq!(session.lives(), 6);
}

#[test]
fn words_are_reused_after_exhaustion() {
    let mut session = GameSession::builder().words(["123", "456"]).build().unwrap();

    let mut seen = HashSet::new();
    for _ in 0..2 {
        session.start(None).unwrap();
        seen.insert(session.word().to_string());
    }
    assert_eq!(seen.len(), 2);

    session.start(None).unwrap();
    assert!(["123", "456"].contains(&session.word()));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn restart_resets_round_state() {
    let mut session = GameSession::builder().words(["ABC", "DEF"]).build().unwrap();
    session.start(None).unwrap();
    let word = session.word().to_string();
    assert_eq!(session.guess_word(&word).unwrap(), 3);
    assert!(session.is_won());

    session.start(None).unwrap();
    assert_ne!(session.word(), word);
    assert!(session.guesses().is_empty());
    assert!(session.is_active());
    assert!(session.ended_at().is_none());
    assert_eq!(session.history().wins(), 1);
}

#[test]
fn empty_configuration_is_rejected() {
    assert!(matches!(
        GameSession::builder().build(),
        Err(SessionError::NoWords)
    ));
    assert!(matches!(
        GameSession::builder().words(Vec::<String>::new()).build(),
        Err(SessionError::NoWords)
    ));
    assert!(matches!(
        GameSession::builder().source(TextSource(" , ".to_string())).build(),
        Err(SessionError::NoWords)
    ));
}

#[test]
fn empty_json_list_is_rejected_but_allowed_when_permitted() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "[]").unwrap();
    let location = file.path().to_str().unwrap().to_string();

    let strict = GameSession::builder().location(location.clone()).build();
    assert!(matches!(strict, Err(SessionError::NoWords)));

    let mut relaxed = GameSession::builder()
        .location(location)
        .allow_empty(true)
        .build()
        .unwrap();
    assert_eq!(relaxed.start(None).unwrap(), Status::Inactive);
    assert_eq!(relaxed.start(Some("other player")).unwrap(), Status::Active);
}

#[test]
fn config_file_drives_session() {
    let mut words = tempfile::NamedTempFile::new().unwrap();
    write!(words, "apple,banana,cherry").unwrap();

    let json = format!(
        r#"{{ "max_lives": 2, "location": "{}" }}"#,
        words.path().display()
    );
    let config: SessionConfig = serde_json::from_str(&json).unwrap();
    let session = GameSession::from_config(&config).unwrap();

    assert_eq!(session.max_lives(), 2);
    assert_eq!(session.word_bank().sorted(), vec!["APPLE", "BANANA", "CHERRY"]);
}

#[test]
fn bank_management_between_rounds() {
    let mut session = GameSession::builder().word("ABC").build().unwrap();
    session.start(None).unwrap();
    session.guess_word("ABC").unwrap();

    let bank: &mut WordBank = session.word_bank_mut();
    bank.remove("abc");
    bank.add(["xyz"]);

    session.start(None).unwrap();
    assert_eq!(session.word(), "XYZ");
    assert_eq!(session.history().latest().unwrap().word, "ABC");
}
