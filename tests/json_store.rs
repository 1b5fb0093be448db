use phrasekeeper::domain::Phrase;
use phrasekeeper::storage::{
    JsonFileStore, KeyValueStore, PhraseRepository, PhraseStore, STORAGE_KEY,
};
use phrasekeeper::{open_session, Config, PhraseError};
use std::fs;

#[test]
fn phrases_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("phrases.json");

    {
        let mut repo = PhraseRepository::new(JsonFileStore::new(path.clone()).unwrap());
        repo.add(Phrase::new("1", "older phrase", 1_000)).unwrap();
        repo.add(Phrase::new("2", "newer phrase", 2_000)).unwrap();
    }

    let repo = PhraseRepository::new(JsonFileStore::new(path.clone()).unwrap());
    let phrases = repo.get_all().unwrap();
    let ids: Vec<&str> = phrases.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    let stored: serde_json::Value =
        serde_json::from_str(raw["entries"][STORAGE_KEY].as_str().unwrap()).unwrap();
    assert_eq!(stored[0]["createdAt"], 1_000);
    assert!(stored[0].get("updatedAt").is_none());
}

#[test]
fn corrupt_file_is_reported_as_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phrases.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(path).unwrap_err();
    assert!(matches!(err, PhraseError::Storage(_)));
}

#[test]
fn clear_removes_only_the_phrase_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phrases.json");

    let mut backend = JsonFileStore::new(path.clone()).unwrap();
    backend.set_item("other", "kept").unwrap();
    let mut repo = PhraseRepository::new(backend);
    repo.add(Phrase::new("1", "some phrase", 1)).unwrap();
    repo.clear().unwrap();
    drop(repo);

    let reopened = JsonFileStore::new(path).unwrap();
    assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("kept"));
    assert_eq!(reopened.get_item(STORAGE_KEY).unwrap(), None);
}

#[test]
fn open_session_loads_existing_phrases() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    {
        let mut session = open_session(&config).unwrap();
        session.add_phrase("persisted across runs").unwrap();
    }

    let mut session = open_session(&config).unwrap();
    assert_eq!(session.state().items.len(), 1);
    assert_eq!(session.visible()[0].text, "persisted across runs");
    assert!(config.storage_path().exists());
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "data_dir = \"{}\"\nsearch_delay_ms = 120\n",
            dir.path().join("data").display()
        ),
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.search_delay_ms, 120);
    assert_eq!(config.storage_path(), dir.path().join("data").join("phrases.json"));
    assert_eq!(config.trace_level, None);
}

#[test]
fn failed_write_does_not_surface_the_phrase_later() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    let mut session = open_session(&config).unwrap();
    session.add_phrase("saved before the outage").unwrap();
    fs::create_dir(config.storage_path().with_extension("tmp")).unwrap();

    assert!(session.add_phrase("never persisted").is_err());
    assert!(session.state().error.is_some());
    assert_eq!(session.state().items.len(), 1);

    session.load_all().unwrap();
    let texts: Vec<&str> = session.state().items.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["saved before the outage"]);
    drop(session);

    fs::remove_dir(config.storage_path().with_extension("tmp")).unwrap();
    let reopened = open_session(&config).unwrap();
    assert_eq!(reopened.state().items.len(), 1);
}

#[test]
fn failed_repository_add_is_not_returned_by_get_all() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phrases.json");
    let mut repo = PhraseRepository::new(JsonFileStore::new(path.clone()).unwrap());
    fs::create_dir(path.with_extension("tmp")).unwrap();

    assert!(repo.add(Phrase::new("x", "lost phrase", 1)).is_err());
    assert!(repo.get_all().unwrap().is_empty());
}
