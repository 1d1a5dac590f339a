use spendkeep_core::db::open_db_in_memory;
use spendkeep_core::{
    CollectionSlot, KeyValueStore, MemoryKeyValueStore, Note, NoteId, SqliteKeyValueStore, Theme,
    ThemeSlot,
};

const TEST_NOTES: CollectionSlot<Note> = CollectionSlot::new("testNotes");
const TEST_THEME: ThemeSlot = ThemeSlot::new("testTheme", Theme::Light);

fn note(id: i64, title: &str) -> Note {
    Note {
        id: NoteId(id),
        title: title.to_string(),
        content: String::new(),
        date: "10/14/2026".to_string(),
    }
}

#[test]
fn sqlite_slots_set_get_and_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get("missing").unwrap(), None);
    store.set("a", "1").unwrap();
    store.set("a", "2").unwrap();
    store.set("b", "3").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("3"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_storage;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);
}

#[test]
fn collection_save_then_load_returns_same_records() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKeyValueStore::new(&conn);
    let notes = vec![note(2, "second"), note(1, "first")];

    TEST_NOTES.save(&mut store, &notes).unwrap();
    assert_eq!(TEST_NOTES.load(&store).unwrap(), notes);
}

#[test]
fn missing_slot_loads_as_empty_collection() {
    let store = MemoryKeyValueStore::new();
    assert!(TEST_NOTES.load(&store).unwrap().is_empty());
}

#[test]
fn non_array_or_all_invalid_slot_loads_as_empty_collection() {
    let mut store = MemoryKeyValueStore::new();
    for raw in [
        "not json",
        "{\"id\": 1}",
        "[{\"id\": 1}]",
        "[{\"id\": -4, \"title\": \"neg\"}]",
    ] {
        store.set(TEST_NOTES.key(), raw).unwrap();
        assert!(TEST_NOTES.load(&store).unwrap().is_empty(), "raw={raw}");
    }
}

#[test]
fn invalid_elements_are_dropped_and_valid_ones_kept() {
    let mut store = MemoryKeyValueStore::new();
    store
        .set(
            TEST_NOTES.key(),
            r#"[
                {"id": 1, "title": "keep me", "content": "", "date": "10/1/2026"},
                {"id": 2, "title": "   "},
                {"id": "three", "title": "wrong id type"},
                {"id": 4, "title": "me too", "content": "body", "date": "10/2/2026"}
            ]"#,
        )
        .unwrap();

    let loaded = TEST_NOTES.load(&store).unwrap();
    let titles: Vec<&str> = loaded.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["keep me", "me too"]);
}

#[test]
fn save_overwrites_whole_collection() {
    let mut store = MemoryKeyValueStore::new();
    TEST_NOTES
        .save(&mut store, &[note(1, "a"), note(2, "b")])
        .unwrap();
    TEST_NOTES.save(&mut store, &[note(3, "c")]).unwrap();
    assert_eq!(TEST_NOTES.load(&store).unwrap(), vec![note(3, "c")]);
}

#[test]
fn theme_slot_defaults_and_ignores_unknown_values() {
    let mut store = MemoryKeyValueStore::new();
    assert_eq!(TEST_THEME.load(&store).unwrap(), Theme::Light);

    TEST_THEME.save(&mut store, Theme::Dark).unwrap();
    assert_eq!(store.get("testTheme").unwrap().as_deref(), Some("dark"));
    assert_eq!(TEST_THEME.load(&store).unwrap(), Theme::Dark);

    store.set("testTheme", "solarized").unwrap();
    assert_eq!(TEST_THEME.load(&store).unwrap(), Theme::Light);
}
