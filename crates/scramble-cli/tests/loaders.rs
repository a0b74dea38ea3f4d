//! Loader tests against real files in per-test temporary directories.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble_game::dictionary::Dictionary;
use scramble_game::{GameOptions, GameSession};
use tempfile::TempDir;

/// Write `contents` to `name` inside `dir`.
fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn explicit_corpus_and_dictionary() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "start.txt", "Listen\n\n");
    let dict = write_fixture(&dir, "words.txt", "silent\nenlist\ntinsel\n");

    let corpus = scramble_cli::load_corpus(Some(words.as_path())).unwrap();
    assert_eq!(corpus.words(), &["listen"]);

    let dictionary = scramble_cli::load_dictionary(Some(dict.as_path()), "en").unwrap();
    assert!(dictionary.is_known_word("tinsel", "en"));

    let mut rng = StdRng::seed_from_u64(5);
    let mut session = GameSession::start(&corpus, &mut rng, GameOptions::default());
    assert_eq!(session.root(), "listen");
    assert!(session.submit("Silent", &dictionary).is_ok());
    assert!(session.submit("enlist", &dictionary).is_ok());
    assert_eq!(session.used_words(), &["enlist", "silent"]);
}

#[test]
fn empty_dictionary_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let dict = write_fixture(&dir, "empty-words.txt", "\n\n");
    let err = scramble_cli::load_dictionary(Some(dict.as_path()), "en").unwrap_err();
    assert!(format!("{err:#}").contains("no words"));
}

#[test]
fn empty_explicit_corpus_still_plays_fallback() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "empty-start.txt", "");
    let corpus = scramble_cli::load_corpus(Some(words.as_path())).unwrap();
    assert!(corpus.is_empty());

    let mut rng = StdRng::seed_from_u64(5);
    let session = GameSession::start(&corpus, &mut rng, GameOptions::default());
    assert_eq!(session.root(), "silkworm");
}

#[test]
fn fixtures_are_removed_with_their_directory() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "start.txt", "silkworm\n");
    let root = dir.path().to_path_buf();
    assert!(words.is_file());
    drop(dir);
    assert!(!root.exists());
}
