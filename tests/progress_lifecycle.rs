//! Rates words in a session, persists progress to SQLite, reopens and continues.

use vocab_srs::database::{self, KeyValueStore};
use vocab_srs::export::json::{export_progress_to_path, import_progress};
use vocab_srs::{AppConfig, LearningSession, ProgressStore, Rating, SimulatedClock, Word, WordList};

const START: i64 = 1_700_000_000_000;
const DAY: i64 = 86_400_000;

fn temp_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        database_path: dir.path().join("test.sqlite3"),
        ..Default::default()
    }
}

#[test]
fn session_progress_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = temp_config(&dir);
    let clock = SimulatedClock::new(START);

    let words = vec![Word::new("cat", "gato"), Word::new("dog", "perro")];
    {
        let mut storage = config.open_storage().unwrap();
        database::save_words(&mut storage, &config.words_key, &words).unwrap();

        let progress = database::load_progress(&storage, &config.progress_key).unwrap();
        let mut session = LearningSession::new(words.clone(), progress, &clock);
        session.rate_current(Rating::Good).unwrap();
        session.rate_current(Rating::Again).unwrap();

        let progress = session.into_store();
        database::save_progress(&mut storage, &config.progress_key, &progress).unwrap();
    }

    let storage = config.open_storage().unwrap();
    let stored_words = database::load_words(&storage, &config.words_key).unwrap();
    assert_eq!(stored_words, words);

    let progress = database::load_progress(&storage, &config.progress_key).unwrap();
    assert_eq!(progress.learned_count(), 2);

    let cat = progress.get("cat").unwrap();
    assert_eq!(cat.word_id, "cat");
    assert_eq!(cat.next_review, START + DAY);

    let dog = progress.get("dog").unwrap();
    assert_eq!(dog.interval, 0.0);
    assert_eq!(dog.next_review, START);
    assert_eq!(progress.due_words(START), vec!["dog"]);

    clock.advance_days(1);
    let mut session = LearningSession::new(stored_words, progress, &clock);
    assert_eq!(session.current_word().unwrap().term, "dog");
    let dog = session.rate_current(Rating::Good).unwrap().unwrap();
    // First rating was Again, so Good keeps the interval at zero.
    assert_eq!(dog.interval, 0.0);
    assert_eq!(dog.history.len(), 2);
}

#[test]
fn reset_clears_everything() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = temp_config(&dir);
    let mut storage = config.open_storage().unwrap();

    let list = WordList::new("alpha\nbeta\n\ngamma\n");
    let words = list.words_batch(0, 10);
    assert_eq!(words.len(), 3);
    database::save_words(&mut storage, &config.words_key, &words).unwrap();

    let mut progress = database::load_progress(&storage, &config.progress_key).unwrap();
    progress.apply_rating("alpha", Rating::Easy, START).unwrap();
    database::save_progress(&mut storage, &config.progress_key, &progress).unwrap();
    assert_eq!(storage.len().unwrap(), 2);

    database::reset_all(&mut storage, &config.words_key, &config.progress_key).unwrap();
    assert_eq!(storage.len().unwrap(), 0);
    assert_eq!(storage.get_item(&config.progress_key).unwrap(), None);
}

#[test]
fn progress_file_round_trip_keeps_layout() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("progress.json");

    let mut progress = vocab_srs::ProgressMap::new();
    progress.apply_rating("house", Rating::Good, START).unwrap();
    progress.apply_rating("house", Rating::Good, START + DAY).unwrap();
    progress.apply_rating("house", Rating::Easy, START + 4 * DAY).unwrap();
    export_progress_to_path(&progress, &path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let house = &raw["house"];
    assert_eq!(house["wordId"], "house");
    assert_eq!(house["streak"], 3);
    assert_eq!(house["history"].as_array().unwrap().len(), 3);
    assert_eq!(house["history"][2]["rating"], 4);
    assert!((house["interval"].as_f64().unwrap() - 8.6125).abs() < 1e-9);

    assert_eq!(import_progress(&path).unwrap(), progress);
}
